//! Core error types for the recognition layer.

/// Errors that can occur loading a model or driving a session.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// Model directory missing, incomplete, or rejected by the engine.
    #[error("model not available: {0}")]
    ModelNotAvailable(String),

    /// Recognizer construction or decoding failure.
    #[error("recognizer error: {0}")]
    Recognizer(String),

    /// I/O error (file read/write).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extension trait to reduce `.map_err()` boilerplate when wrapping
/// errors into [`TranscriptionError`].
pub trait ResultExt<T> {
    /// Wrap the error as [`TranscriptionError::Recognizer`] with a `context` prefix.
    fn recognizer(self, context: &str) -> Result<T, TranscriptionError>;
    /// Wrap the error as [`TranscriptionError::ModelNotAvailable`] with a `context` prefix.
    fn model(self, context: &str) -> Result<T, TranscriptionError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn recognizer(self, context: &str) -> Result<T, TranscriptionError> {
        self.map_err(|e| TranscriptionError::Recognizer(format!("{context}: {e}")))
    }
    fn model(self, context: &str) -> Result<T, TranscriptionError> {
        self.map_err(|e| TranscriptionError::ModelNotAvailable(format!("{context}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = TranscriptionError::ModelNotAvailable("missing am/final.mdl".into());
        assert!(e.to_string().contains("missing am/final.mdl"));

        let e = TranscriptionError::Recognizer("decode failed".into());
        assert!(e.to_string().contains("decode failed"));
    }

    #[test]
    fn result_ext_recognizer_context() {
        let err: Result<(), &str> = Err("bad state");
        let mapped = err.recognizer("accept_pcm");
        assert!(matches!(
            mapped,
            Err(TranscriptionError::Recognizer(s)) if s == "accept_pcm: bad state"
        ));
    }

    #[test]
    fn result_ext_model_context() {
        let err: Result<(), &str> = Err("no such dir");
        let mapped = err.model("load");
        assert!(matches!(
            mapped,
            Err(TranscriptionError::ModelNotAvailable(s)) if s == "load: no such dir"
        ));
    }

    #[test]
    fn result_ext_ok_passthrough() {
        let ok: Result<i32, &str> = Ok(7);
        assert_eq!(ok.recognizer("ctx").unwrap(), 7);
        let ok: Result<i32, &str> = Ok(9);
        assert_eq!(ok.model("ctx").unwrap(), 9);
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: TranscriptionError = io.into();
        assert!(matches!(e, TranscriptionError::Io(_)));
        assert!(e.to_string().contains("gone"));
    }
}
