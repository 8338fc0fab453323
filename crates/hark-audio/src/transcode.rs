//! Transcoder adapter: normalize arbitrary audio via an ffmpeg child
//! process into mono, fixed-rate, 16-bit little-endian PCM in a WAV
//! container.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::TranscodeError;

/// Most ffmpeg failures explain themselves in the last few stderr lines;
/// anything longer is log spam we don't want in an HTTP response.
const STDERR_TAIL_BYTES: usize = 500;

/// Convert `input` to a mono `sample_rate` Hz s16le WAV at `output`.
///
/// Resolves to exactly one terminal outcome: `Ok` once the child exits
/// successfully, or one of [`TranscodeError`]'s variants. When `timeout`
/// passes first, the child is killed and [`TranscodeError::TimedOut`] is
/// returned.
pub async fn convert_to_pcm_wav(
    ffmpeg: &str,
    input: &Path,
    output: &Path,
    sample_rate: u32,
    timeout: Duration,
) -> Result<(), TranscodeError> {
    let mut cmd = Command::new(ffmpeg);
    cmd.arg("-y")
        .arg("-i")
        .arg(input)
        .arg("-ac")
        .arg("1")
        .arg("-ar")
        .arg(sample_rate.to_string())
        .arg("-acodec")
        .arg("pcm_s16le")
        .arg("-f")
        .arg("wav")
        .arg(output)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    tracing::debug!(
        tool = ffmpeg,
        input = %input.display(),
        output = %output.display(),
        sample_rate,
        "starting conversion"
    );

    let child = cmd.spawn().map_err(|source| TranscodeError::Spawn {
        tool: ffmpeg.to_string(),
        source,
    })?;

    let collected = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        // Dropping the in-flight future kills the child (kill_on_drop).
        Err(_elapsed) => {
            return Err(TranscodeError::TimedOut {
                seconds: timeout.as_secs(),
            });
        }
        Ok(waited) => waited?,
    };

    if collected.status.success() {
        return Ok(());
    }

    let status = collected
        .status
        .code()
        .map_or_else(|| "signal".to_string(), |c| format!("code {c}"));
    let stderr = String::from_utf8_lossy(&collected.stderr);
    Err(TranscodeError::Failed {
        status,
        stderr: tail(stderr.trim(), STDERR_TAIL_BYTES).to_string(),
    })
}

/// Last `max_bytes` of `s`, snapped forward to a char boundary.
fn tail(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut start = s.len() - max_bytes;
    while start < s.len() && !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}
