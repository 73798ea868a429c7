//! PCM data extraction, hashing and header inspection.

use std::io::Cursor;
use std::path::Path;

use serde::Serialize;

use crate::error::{DtmfError, DtmfResult};

/// Reads the raw PCM payload back out of WAV bytes.
///
/// Samples are decoded with `hound` and re-encoded the way the data chunk
/// stores them: 8-bit as unsigned offset-binary, 16-bit as little-endian
/// signed. Returns `None` for anything that is not 8- or 16-bit integer PCM.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<Vec<u8>> {
    let reader = hound::WavReader::new(Cursor::new(wav_data)).ok()?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int {
        return None;
    }

    match spec.bits_per_sample {
        8 => reader
            .into_samples::<i8>()
            .map(|s| s.map(|s| (s as u8).wrapping_add(0x80)))
            .collect::<Result<_, _>>()
            .ok(),
        16 => {
            let mut pcm = Vec::with_capacity(reader.len() as usize * 2);
            for sample in reader.into_samples::<i16>() {
                pcm.extend_from_slice(&sample.ok()?.to_le_bytes());
            }
            Some(pcm)
        }
        _ => None,
    }
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// For mono files this equals [`SampleBuffer::pcm_hash`](crate::SampleBuffer::pcm_hash)
/// of the buffer that was written.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(&pcm).to_hex().to_string())
}

/// Header fields of a WAV file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Number of channels.
    pub channels: u16,
    /// Frame rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Number of sample frames.
    pub frames: u32,
}

impl WavInfo {
    /// Bytes per sample (per channel).
    pub fn sample_width(&self) -> u16 {
        self.bits_per_sample / 8
    }
}

/// Reads the header of the WAV file at `path`.
pub fn read_wav_info(path: &Path) -> DtmfResult<WavInfo> {
    let reader = hound::WavReader::open(path).map_err(|e| match e {
        hound::Error::IoError(io) => DtmfError::Io(io),
        other => DtmfError::Encode(other),
    })?;
    let spec = reader.spec();
    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        frames: reader.duration(),
    })
}
