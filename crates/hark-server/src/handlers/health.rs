//! Liveness and runtime-info endpoints.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Wire shape of `GET /`. Field names match the original public API, so
/// `sampleRate` stays camelCase.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
    /// Identifier of the loaded recognition model.
    pub model: String,
    /// Sample rate every upload is normalized to, in Hz.
    pub sample_rate: u32,
}

/// `GET /`. Pure read of process-wide constants.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.engine.model_name().to_string(),
        sample_rate: state.engine.sample_rate(),
    })
}

/// Wire shape of `GET /version`.
#[derive(Serialize)]
pub struct VersionResponse {
    /// Service name.
    pub service: &'static str,
    /// Crate version baked in at compile time.
    pub version: &'static str,
}

/// `GET /version`.
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "hark",
        version: env!("CARGO_PKG_VERSION"),
    })
}
