//! Vosk-backed engine. Links libvosk, hence the cargo feature gate.

use std::path::Path;

use vosk::{Model, Recognizer};

use crate::engine::{RecognizerSession, SpeechEngine};
use crate::model::model_name;
use crate::types::TranscriptionError;

/// Engine wrapping one loaded Vosk model.
///
/// The model is immutable after load and safe to share across threads;
/// each session owns its own `Recognizer`.
pub struct VoskEngine {
    model: Model,
    model_name: String,
    sample_rate: u32,
}

impl VoskEngine {
    /// Load the model under `dir`. Loading the small English model takes
    /// a few seconds; larger models considerably longer.
    pub fn load(dir: &Path, sample_rate: u32) -> Result<Self, TranscriptionError> {
        let model = Model::new(dir.to_string_lossy().into_owned()).ok_or_else(|| {
            TranscriptionError::ModelNotAvailable(format!(
                "vosk rejected model directory {}",
                dir.display()
            ))
        })?;
        tracing::info!(model = %model_name(dir), sample_rate, "vosk model loaded");
        Ok(Self {
            model,
            model_name: model_name(dir),
            sample_rate,
        })
    }
}

impl SpeechEngine for VoskEngine {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn new_session(&self) -> Result<Box<dyn RecognizerSession>, TranscriptionError> {
        let recognizer = Recognizer::new(&self.model, self.sample_rate as f32).ok_or_else(
            || TranscriptionError::Recognizer("failed to create vosk recognizer".into()),
        )?;
        Ok(Box::new(VoskSession { recognizer }))
    }
}

/// Per-request decoding context. The wrapped recognizer frees its native
/// resources on drop.
struct VoskSession {
    recognizer: Recognizer,
}

impl RecognizerSession for VoskSession {
    fn accept_pcm(&mut self, samples: &[i16]) -> Result<(), TranscriptionError> {
        self.recognizer
            .accept_waveform(samples)
            .map(|_state| ())
            .map_err(|e| TranscriptionError::Recognizer(format!("accept_waveform: {e}")))
    }

    fn finalize(&mut self) -> Result<String, TranscriptionError> {
        let result = self.recognizer.final_result();
        Ok(result
            .single()
            .map(|alt| alt.text.to_string())
            .unwrap_or_default())
    }
}
