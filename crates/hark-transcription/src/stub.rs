//! Deterministic engine with no native dependencies.
//!
//! Used by tests and by `--stub-engine` runs. Transcripts are derived
//! from the samples a session was fed, so a session contaminated by
//! another request's audio produces a visibly wrong transcript.

use crate::engine::{RecognizerSession, SpeechEngine};
use crate::types::TranscriptionError;

/// Engine whose sessions report what they heard instead of decoding it.
pub struct StubEngine {
    model_name: String,
    sample_rate: u32,
}

impl StubEngine {
    /// Create a stub engine posing as `model_name` at `sample_rate` Hz.
    pub fn new(model_name: impl Into<String>, sample_rate: u32) -> Self {
        Self {
            model_name: model_name.into(),
            sample_rate,
        }
    }
}

impl SpeechEngine for StubEngine {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn new_session(&self) -> Result<Box<dyn RecognizerSession>, TranscriptionError> {
        Ok(Box::new(StubSession {
            total_samples: 0,
            nonzero_samples: 0,
            chunks: 0,
            finalized: false,
        }))
    }
}

/// Session state: counters only, no audio retained.
struct StubSession {
    total_samples: usize,
    nonzero_samples: usize,
    chunks: usize,
    finalized: bool,
}

impl RecognizerSession for StubSession {
    fn accept_pcm(&mut self, samples: &[i16]) -> Result<(), TranscriptionError> {
        if self.finalized {
            return Err(TranscriptionError::Recognizer(
                "accept_pcm after finalize".into(),
            ));
        }
        self.total_samples += samples.len();
        self.nonzero_samples += samples.iter().filter(|&&s| s != 0).count();
        self.chunks += 1;
        Ok(())
    }

    fn finalize(&mut self) -> Result<String, TranscriptionError> {
        if self.finalized {
            return Err(TranscriptionError::Recognizer(
                "session already finalized".into(),
            ));
        }
        self.finalized = true;
        tracing::trace!(
            samples = self.total_samples,
            chunks = self.chunks,
            "stub session finalized"
        );
        // Silence decodes to nothing, like the real engine.
        if self.nonzero_samples == 0 {
            return Ok(String::new());
        }
        Ok(format!("[stub] heard {} samples", self.total_samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_identity() {
        let engine = StubEngine::new("vosk-model-small-en-us-0.15", 16_000);
        assert_eq!(engine.model_name(), "vosk-model-small-en-us-0.15");
        assert_eq!(engine.sample_rate(), 16_000);
    }

    #[test]
    fn counts_samples_across_chunks() {
        let engine = StubEngine::new("m", 16_000);
        let mut session = engine.new_session().unwrap();
        session.accept_pcm(&[1, 2, 3]).unwrap();
        session.accept_pcm(&[4, 5]).unwrap();
        assert_eq!(session.finalize().unwrap(), "[stub] heard 5 samples");
    }

    #[test]
    fn silence_yields_empty_transcript() {
        let engine = StubEngine::new("m", 16_000);
        let mut session = engine.new_session().unwrap();
        session.accept_pcm(&[0; 1600]).unwrap();
        assert_eq!(session.finalize().unwrap(), "");
    }

    #[test]
    fn no_audio_yields_empty_transcript() {
        let engine = StubEngine::new("m", 16_000);
        let mut session = engine.new_session().unwrap();
        assert_eq!(session.finalize().unwrap(), "");
    }

    #[test]
    fn sessions_are_independent() {
        let engine = StubEngine::new("m", 16_000);
        let mut a = engine.new_session().unwrap();
        let mut b = engine.new_session().unwrap();
        a.accept_pcm(&[1; 100]).unwrap();
        b.accept_pcm(&[1; 200]).unwrap();
        assert_eq!(a.finalize().unwrap(), "[stub] heard 100 samples");
        assert_eq!(b.finalize().unwrap(), "[stub] heard 200 samples");
    }

    #[test]
    fn finalize_twice_is_an_error() {
        let engine = StubEngine::new("m", 16_000);
        let mut session = engine.new_session().unwrap();
        let _ = session.finalize().unwrap();
        assert!(session.finalize().is_err());
    }

    #[test]
    fn accept_after_finalize_is_an_error() {
        let engine = StubEngine::new("m", 16_000);
        let mut session = engine.new_session().unwrap();
        let _ = session.finalize().unwrap();
        assert!(session.accept_pcm(&[1]).is_err());
    }

    #[test]
    fn stub_engine_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StubEngine>();
    }
}
