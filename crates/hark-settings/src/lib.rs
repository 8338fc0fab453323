//! # hark-settings
//!
//! Configuration for the hark transcription service, loaded from three
//! layers (in priority order):
//!
//! 1. **Compiled defaults** — [`Settings::default()`]
//! 2. **Settings file** — `hark.json` in the working directory, or the
//!    path passed to [`load_settings`]; partial files are fine, missing
//!    fields keep their defaults
//! 3. **Environment variables** — `PORT` and `HARK_*` overrides
//!
//! There is no global singleton: the loaded [`Settings`] value is passed
//! into whatever needs it, so tests can construct their own.
//!
//! ## Crate Position
//!
//! Standalone. Depended on by: hark-server, hark.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::SettingsError;
pub use loader::{DEFAULT_SETTINGS_FILE, load_settings};
pub use types::{LoggingSettings, ModelSettings, ServerSettings, Settings, TranscodeSettings};
