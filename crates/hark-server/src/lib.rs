//! # hark-server
//!
//! Axum HTTP surface for the hark transcription service.
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /` | Liveness: status, model identifier, sample rate |
//! | `GET /version` | Runtime info: service name and version |
//! | `POST /transcribe` | Multipart audio upload → JSON transcript |
//!
//! The transcribe handler owns the one nontrivial piece of the service:
//! the per-request temp-file and streaming lifecycle (see
//! [`handlers::transcribe`]).
//!
//! ## Crate Position
//!
//! Depends on: hark-settings, hark-transcription, hark-audio.
//! Depended on by: hark (the binary).

#![deny(unsafe_code)]

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use routes::router;
pub use state::AppState;
