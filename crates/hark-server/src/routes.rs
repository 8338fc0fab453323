//! Router assembly.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the service router.
///
/// The body limit is the admission policy: oversized uploads are
/// rejected by the framework before the handler stages anything to disk.
pub fn router(state: AppState) -> Router {
    let max_upload = state.settings.server.max_upload_bytes;
    Router::new()
        .route("/", get(handlers::health::health))
        .route("/version", get(handlers::health::version))
        .route("/transcribe", post(handlers::transcribe::transcribe))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hark_settings::Settings;
    use hark_transcription::StubEngine;

    use super::*;

    #[test]
    fn router_builds() {
        let state = AppState::new(
            Arc::new(StubEngine::new("m", 16_000)),
            Arc::new(Settings::default()),
        );
        let _router = router(state);
    }
}
