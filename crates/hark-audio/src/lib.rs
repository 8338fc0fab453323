//! # hark-audio
//!
//! Audio plumbing for the hark service:
//!
//! ```text
//! uploaded file → ffmpeg child process → mono 16 kHz s16le WAV
//! → WavPcmReader → i16 PCM chunks in file order
//! ```
//!
//! Plus [`TempPath`], the drop guard that keeps per-request temp files
//! from outliving their request.
//!
//! ## Crate Position
//!
//! Standalone (no hark crate dependencies).
//! Depended on by: hark-server.

#![deny(unsafe_code)]

pub mod error;
pub mod temp;
pub mod transcode;
pub mod wav;

pub use error::{TranscodeError, WavError};
pub use temp::TempPath;
pub use transcode::convert_to_pcm_wav;
pub use wav::{PcmFormat, WavPcmReader};
