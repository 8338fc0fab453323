//! Streaming WAV reader: parse the container header, then yield raw PCM
//! samples in file order.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::WavError;

/// Format metadata discovered from the container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Samples per second.
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

/// Reader over a WAV file's PCM payload.
///
/// Opening parses the header; [`WavPcmReader::next_chunk`] then yields
/// i16 samples strictly in file order until the payload is exhausted.
/// The reader is synchronous; callers on an async runtime drive it from
/// a blocking task.
pub struct WavPcmReader {
    format: PcmFormat,
    samples: hound::WavIntoSamples<BufReader<File>, i16>,
}

impl WavPcmReader {
    /// Open `path` and parse its header.
    pub fn open(path: &Path) -> Result<Self, WavError> {
        let reader = hound::WavReader::open(path)?;
        let spec = reader.spec();
        Ok(Self {
            format: PcmFormat {
                sample_rate: spec.sample_rate,
                channels: spec.channels,
                bits_per_sample: spec.bits_per_sample,
            },
            samples: reader.into_samples(),
        })
    }

    /// Format discovered from the header.
    pub fn format(&self) -> PcmFormat {
        self.format
    }

    /// Fill `buf` with up to `max_samples` samples, in file order.
    ///
    /// Returns `Ok(true)` when `buf` holds at least one sample and
    /// `Ok(false)` at end of stream. A malformed or truncated payload
    /// surfaces as an error on the chunk it was discovered in.
    pub fn next_chunk(&mut self, buf: &mut Vec<i16>, max_samples: usize) -> Result<bool, WavError> {
        buf.clear();
        while buf.len() < max_samples {
            match self.samples.next() {
                Some(Ok(sample)) => buf.push(sample),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            }
        }
        Ok(!buf.is_empty())
    }
}
