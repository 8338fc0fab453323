//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase", default)]` so partial
//! JSON files parse cleanly; missing fields keep their compiled default.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root settings for the hark service.
///
/// # JSON Format
///
/// ```json
/// {
///   "server": { "port": 3000 },
///   "model": { "dir": "model/vosk-model-small-en-us-0.15" }
/// }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Network settings.
    pub server: ServerSettings,
    /// Recognition model settings.
    pub model: ModelSettings,
    /// External transcoder settings.
    pub transcode: TranscodeSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Correct invalid values in place rather than rejecting the file.
    ///
    /// Called automatically during loading. A zero sample rate or timeout
    /// would wedge every request, so both snap back to their defaults
    /// with a warning.
    pub fn validate(&mut self) {
        if self.model.sample_rate == 0 {
            let fallback = ModelSettings::default().sample_rate;
            tracing::warn!("model sampleRate is 0, resetting to {fallback}");
            self.model.sample_rate = fallback;
        }
        if self.transcode.timeout_secs == 0 {
            let fallback = TranscodeSettings::default().timeout_secs;
            tracing::warn!("transcode timeoutSecs is 0, resetting to {fallback}");
            self.transcode.timeout_secs = fallback;
        }
        if self.server.max_upload_bytes == 0 {
            let fallback = ServerSettings::default().max_upload_bytes;
            tracing::warn!("server maxUploadBytes is 0, resetting to {fallback}");
            self.server.max_upload_bytes = fallback;
        }
    }
}

/// Network settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Listening port. Port 0 asks the OS for an ephemeral port.
    pub port: u16,
    /// Bind address.
    pub bind: String,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind: "0.0.0.0".to_string(),
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

/// Recognition model settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelSettings {
    /// Directory holding the pre-trained model.
    pub dir: PathBuf,
    /// Sample rate the recognizer expects, in Hz. The transcoder
    /// normalizes every upload to this rate.
    pub sample_rate: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("model/vosk-model-small-en-us-0.15"),
            sample_rate: 16_000,
        }
    }
}

/// External transcoder settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranscodeSettings {
    /// Transcoder executable; resolved via PATH when not absolute.
    pub ffmpeg_path: String,
    /// Directory for transient upload files.
    pub uploads_dir: PathBuf,
    /// Upper bound on one conversion, in seconds. The child process is
    /// killed when the deadline passes.
    pub timeout_secs: u64,
}

impl Default for TranscodeSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            uploads_dir: PathBuf::from("uploads"),
            timeout_secs: 120,
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub directive: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directive: "info,hark=debug".to_string(),
        }
    }
}
