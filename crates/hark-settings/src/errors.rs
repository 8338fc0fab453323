//! Settings loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for the expected shape.
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        /// Path that was being parsed.
        path: PathBuf,
        /// Underlying serde error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_display_includes_path() {
        let e = SettingsError::Read {
            path: PathBuf::from("/etc/hark.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/etc/hark.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn parse_error_display_includes_path() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{");
        let e = SettingsError::Parse {
            path: PathBuf::from("hark.json"),
            source: bad.unwrap_err(),
        };
        assert!(e.to_string().contains("hark.json"));
    }
}
