//! Shared request-handler state.

use std::sync::Arc;

use hark_settings::Settings;
use hark_transcription::SpeechEngine;

/// State shared by every request.
///
/// The engine is the process-wide, read-only recognition model; it is
/// injected here rather than living in a global so tests can substitute
/// a stub. Everything is behind `Arc`, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Loaded recognition model, shared by all concurrent sessions.
    pub engine: Arc<dyn SpeechEngine>,
    /// Immutable service configuration.
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Bundle the engine and settings for the router.
    pub fn new(engine: Arc<dyn SpeechEngine>, settings: Arc<Settings>) -> Self {
        Self { engine, settings }
    }
}

#[cfg(test)]
mod tests {
    use hark_transcription::StubEngine;

    use super::*;

    #[test]
    fn state_is_cheaply_cloneable() {
        let state = AppState::new(
            Arc::new(StubEngine::new("test-model", 16_000)),
            Arc::new(Settings::default()),
        );
        let clone = state.clone();
        assert_eq!(clone.engine.model_name(), "test-model");
        assert!(Arc::ptr_eq(&state.settings, &clone.settings));
    }
}
