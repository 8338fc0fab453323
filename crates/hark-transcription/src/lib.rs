//! # hark-transcription
//!
//! Recognition model management and the recognizer-session abstraction
//! for the hark service.
//!
//! # Architecture
//!
//! ```text
//! model dir (on disk, loaded once) → SpeechEngine (shared, read-only)
//! → one RecognizerSession per request → accept_pcm(chunks in order)
//! → finalize() → transcript string
//! ```
//!
//! The real engine wraps libvosk and is gated behind the `vosk` cargo
//! feature so default builds need no native library. [`StubEngine`] is a
//! deterministic dependency-free engine used by tests and `--stub-engine`
//! runs.
//!
//! ## Crate Position
//!
//! Standalone (no hark crate dependencies).
//! Depended on by: hark-server, hark.

#![deny(unsafe_code)]

pub mod engine;
pub mod model;
pub mod stub;
pub mod types;

#[cfg(feature = "vosk")]
pub mod vosk;

pub use engine::{RecognizerSession, SpeechEngine, load_engine};
pub use stub::StubEngine;
pub use types::{ResultExt, TranscriptionError};
#[cfg(feature = "vosk")]
pub use vosk::VoskEngine;
