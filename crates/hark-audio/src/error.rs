//! Error types for the transcoder adapter and the WAV reader.

use thiserror::Error;

/// Errors from invoking the external transcoder.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The transcoder executable could not be started.
    #[error("failed to spawn transcoder `{tool}`: {source}")]
    Spawn {
        /// Executable that was invoked.
        tool: String,
        /// Underlying spawn error.
        source: std::io::Error,
    },

    /// The transcoder ran but exited unsuccessfully.
    #[error("transcoder exited with {status}: {stderr}")]
    Failed {
        /// Exit status description ("code 1", "signal").
        status: String,
        /// Tail of the child's stderr.
        stderr: String,
    },

    /// The transcoder did not finish before the deadline.
    #[error("transcoder timed out after {seconds}s")]
    TimedOut {
        /// Configured deadline in seconds.
        seconds: u64,
    },

    /// I/O failure while waiting on the child.
    #[error("transcoder io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parsing or streaming a WAV container.
#[derive(Debug, Error)]
pub enum WavError {
    /// The container header or sample data is not valid WAV.
    #[error("malformed wav container: {0}")]
    Malformed(String),

    /// I/O failure reading the container.
    #[error("io error reading wav: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hound::Error> for WavError {
    fn from(e: hound::Error) -> Self {
        match e {
            hound::Error::IoError(io) => Self::Io(io),
            other => Self::Malformed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcode_failed_display() {
        let e = TranscodeError::Failed {
            status: "code 1".into(),
            stderr: "unknown codec".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("code 1"));
        assert!(msg.contains("unknown codec"));
    }

    #[test]
    fn timeout_display_names_the_deadline() {
        let e = TranscodeError::TimedOut { seconds: 120 };
        assert!(e.to_string().contains("120s"));
    }

    #[test]
    fn hound_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "cut short");
        let e: WavError = hound::Error::IoError(io).into();
        assert!(matches!(e, WavError::Io(_)));
    }

    #[test]
    fn hound_format_error_maps_to_malformed() {
        let e: WavError = hound::Error::FormatError("no RIFF tag found").into();
        assert!(matches!(e, WavError::Malformed(_)));
        assert!(e.to_string().contains("RIFF"));
    }
}
