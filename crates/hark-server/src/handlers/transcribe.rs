//! `POST /transcribe`: upload, convert, recognize, respond.
//!
//! The request lifecycle this handler guarantees:
//!
//! 1. exactly one upload file is written, under a unique name;
//! 2. at most one converted waveform is written next to it;
//! 3. both are deleted before the response is sent, on success and on
//!    every failure path (drop guards, not per-branch deletes);
//! 4. the recognizer session is released on every exit path (its drop);
//! 5. PCM chunks reach the session strictly in file order.

use std::path::PathBuf;
use std::time::Duration;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use serde::Serialize;
use uuid::Uuid;

use hark_audio::{TempPath, WavPcmReader, transcode};
use hark_transcription::RecognizerSession;

use crate::errors::ApiError;
use crate::state::AppState;

/// Samples per chunk pushed into the recognizer (16 KiB of s16le PCM).
const CHUNK_SAMPLES: usize = 8 * 1024;

/// Wire shape of a successful transcription.
#[derive(Serialize)]
pub struct TranscribeResponse {
    /// Trimmed transcript; empty for silence.
    pub text: String,
}

/// `POST /transcribe` with a single multipart file field named `audio`.
#[tracing::instrument(skip_all)]
pub async fn transcribe(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let upload = receive_audio_field(&mut multipart).await?;
    tracing::debug!(
        file_name = upload.file_name.as_deref(),
        bytes = upload.bytes.len(),
        "audio upload received"
    );

    // Unique per-upload name; concurrent requests can never collide.
    let input_path = state
        .settings
        .transcode
        .uploads_dir
        .join(Uuid::now_v7().simple().to_string());
    let mut input = TempPath::new(input_path);
    let converted = TempPath::new(PathBuf::from(format!(
        "{}_converted.wav",
        input.path().display()
    )));

    tokio::fs::write(input.path(), &upload.bytes)
        .await
        .map_err(|e| ApiError::Conversion(format!("staging upload: {e}")))?;

    let transcode_cfg = &state.settings.transcode;
    transcode::convert_to_pcm_wav(
        &transcode_cfg.ffmpeg_path,
        input.path(),
        converted.path(),
        state.engine.sample_rate(),
        Duration::from_secs(transcode_cfg.timeout_secs),
    )
    .await
    .map_err(|e| ApiError::Conversion(e.to_string()))?;

    // The raw upload is no longer needed once the normalized waveform
    // exists. Best-effort: a failed delete is logged, not fatal.
    input.remove_now();

    let session = state
        .engine
        .new_session()
        .map_err(|e| ApiError::Recognition(e.to_string()))?;

    // WAV decode and recognition are blocking CPU/file work; keep them
    // off the request threads. The converted file's guard travels into
    // the task so deletion happens exactly when the session is done
    // with it, success or error.
    let text = tokio::task::spawn_blocking(move || {
        let outcome = run_recognition(&converted, session);
        drop(converted);
        outcome
    })
    .await
    .map_err(|e| ApiError::Recognition(format!("recognition task: {e}")))??;

    tracing::info!(transcript = %text, "recognized");
    Ok(Json(TranscribeResponse { text }))
}

/// A single `audio` multipart field, buffered.
struct AudioUpload {
    file_name: Option<String>,
    bytes: Bytes,
}

/// Walk the form for the first field named `audio`.
///
/// Other fields are skipped; a form without one is a client error and
/// nothing touches the disk.
async fn receive_audio_field(multipart: &mut Multipart) -> Result<AudioUpload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadUpload(e.to_string()))?
    {
        if field.name() != Some("audio") {
            continue;
        }
        let file_name = field.file_name().map(ToString::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadUpload(e.to_string()))?;
        return Ok(AudioUpload { file_name, bytes });
    }
    Err(ApiError::NoAudioFile)
}

/// Stream the converted waveform into the session and finalize it.
///
/// The session is owned here so its resources are released when this
/// returns, whichever branch that happens on.
fn run_recognition(
    waveform: &TempPath,
    mut session: Box<dyn RecognizerSession>,
) -> Result<String, ApiError> {
    let mut reader =
        WavPcmReader::open(waveform.path()).map_err(|e| ApiError::Reader(e.to_string()))?;

    let format = reader.format();
    tracing::info!(
        sample_rate = format.sample_rate,
        channels = format.channels,
        bits_per_sample = format.bits_per_sample,
        "converted audio format"
    );

    let mut chunk = Vec::with_capacity(CHUNK_SAMPLES);
    loop {
        let more = reader
            .next_chunk(&mut chunk, CHUNK_SAMPLES)
            .map_err(|e| ApiError::Reader(e.to_string()))?;
        if !more {
            break;
        }
        session
            .accept_pcm(&chunk)
            .map_err(|e| ApiError::Recognition(e.to_string()))?;
    }

    let text = session
        .finalize()
        .map_err(|e| ApiError::Recognition(e.to_string()))?;
    Ok(text.trim().to_string())
}
