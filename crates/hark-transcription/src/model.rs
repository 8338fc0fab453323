//! Model directory resolution and on-disk layout checks.

use std::path::{Path, PathBuf};

/// Typed paths for the files every Vosk model directory ships.
///
/// The full layout varies by model size (graph format, optional ivector
/// extractor), so only the two files common to all of them are checked.
pub struct ModelLayout {
    /// Acoustic model (`am/final.mdl`).
    pub acoustic: PathBuf,
    /// Engine configuration (`conf/model.conf`).
    pub config: PathBuf,
}

impl ModelLayout {
    /// Required files, relative to the model directory.
    pub const NAMES: &[&str] = &["am/final.mdl", "conf/model.conf"];

    /// Construct paths for the required files under `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            acoustic: dir.join("am/final.mdl"),
            config: dir.join("conf/model.conf"),
        }
    }

    /// Check that every required file exists.
    pub fn all_exist(&self) -> bool {
        self.acoustic.exists() && self.config.exists()
    }
}

/// Default model location, relative to the service's working directory.
pub fn default_model_dir() -> PathBuf {
    PathBuf::from("model/vosk-model-small-en-us-0.15")
}

/// Check whether `dir` looks like a usable model directory.
pub fn is_model_present(dir: impl AsRef<Path>) -> bool {
    let dir = dir.as_ref();
    dir.is_dir() && ModelLayout::from_dir(dir).all_exist()
}

/// Human-readable model identifier: the directory's basename.
pub fn model_name(dir: &Path) -> String {
    dir.file_name()
        .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().into_owned())
}
