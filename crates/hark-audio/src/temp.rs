//! Scoped temp-file cleanup.

use std::path::{Path, PathBuf};

/// Drop guard for a transient file.
///
/// Every per-request artifact (the raw upload, the converted waveform)
/// is wrapped in one of these at the point its path is decided, before
/// anything is written there. Whatever exit path the request takes, the
/// guard removes the file; a path that was never written to is a no-op.
/// Removal failures are logged and swallowed; they must never displace
/// the request's primary outcome.
#[derive(Debug)]
pub struct TempPath {
    path: PathBuf,
    armed: bool,
}

impl TempPath {
    /// Guard `path`. The file need not exist yet.
    pub fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    /// The guarded path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the file now instead of waiting for drop. Best-effort.
    pub fn remove_now(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "temp file removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove temp file");
            }
        }
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        self.remove_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scratch.bin");
        std::fs::write(&path, b"data").unwrap();
        {
            let _guard = TempPath::new(path.clone());
        }
        assert!(!path.exists());
    }

    #[test]
    fn remove_now_deletes_and_disarms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scratch.bin");
        std::fs::write(&path, b"data").unwrap();
        let mut guard = TempPath::new(path.clone());
        guard.remove_now();
        assert!(!path.exists());
        // Re-create; the disarmed guard must leave it alone on drop.
        std::fs::write(&path, b"again").unwrap();
        drop(guard);
        assert!(path.exists());
    }

    #[test]
    fn dropping_a_guard_for_a_missing_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let guard = TempPath::new(dir.path().join("never-written"));
        drop(guard);
    }
}
