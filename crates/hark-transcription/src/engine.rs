//! Engine and session traits, plus the build-time engine selector.

use std::path::Path;
use std::sync::Arc;

use crate::types::TranscriptionError;

/// Process-wide handle to a loaded recognition model.
///
/// Loaded once at startup and shared read-only by every request, so
/// implementations must be `Send + Sync`. Each request opens its own
/// [`RecognizerSession`]; the engine itself is never mutated.
pub trait SpeechEngine: Send + Sync {
    /// Identifier of the loaded model (directory basename).
    fn model_name(&self) -> &str;

    /// Sample rate sessions expect, in Hz.
    fn sample_rate(&self) -> u32;

    /// Open a fresh decoding session bound to this engine's model.
    fn new_session(&self) -> Result<Box<dyn RecognizerSession>, TranscriptionError>;
}

/// One stateful decoding context, bound to a single audio stream.
///
/// PCM chunks must be submitted strictly in stream order and never
/// concurrently. [`RecognizerSession::finalize`] may be called at most
/// once; internal engine resources are released when the session drops,
/// whether or not it was finalized.
pub trait RecognizerSession: Send {
    /// Feed the next chunk of 16-bit PCM samples.
    fn accept_pcm(&mut self, samples: &[i16]) -> Result<(), TranscriptionError>;

    /// End the stream and return the engine's best transcript for the
    /// whole accumulated waveform. Untrimmed; possibly empty.
    fn finalize(&mut self) -> Result<String, TranscriptionError>;
}

/// Load the speech engine this binary was built with.
///
/// With the `vosk` feature this loads the Vosk model from `dir`; without
/// it there is no engine to construct and startup must either fail or
/// fall back to [`crate::StubEngine`] explicitly.
#[cfg(feature = "vosk")]
pub fn load_engine(
    dir: &Path,
    sample_rate: u32,
) -> Result<Arc<dyn SpeechEngine>, TranscriptionError> {
    Ok(Arc::new(crate::vosk::VoskEngine::load(dir, sample_rate)?))
}

/// Load the speech engine this binary was built with.
///
/// This build carries no engine: the `vosk` feature is disabled.
#[cfg(not(feature = "vosk"))]
pub fn load_engine(
    dir: &Path,
    sample_rate: u32,
) -> Result<Arc<dyn SpeechEngine>, TranscriptionError> {
    let _ = (dir, sample_rate);
    Err(TranscriptionError::ModelNotAvailable(
        "this build has no speech engine; rebuild with `--features vosk` or run with --stub-engine"
            .into(),
    ))
}
