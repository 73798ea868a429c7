//! WAV file format parameters.

use crate::config::BitDepth;
use crate::error::{DtmfError, DtmfResult};
use crate::synth::SampleBuffer;

/// Largest byte rate the 32-bit `nAvgBytesPerSec` header field can hold.
pub const MAX_BYTE_RATE: u64 = u32::MAX as u64;

/// Largest PCM payload a 44-byte-header WAV file can describe.
///
/// The RIFF size field counts the payload plus 36 header bytes.
pub const MAX_DATA_BYTES: u64 = u32::MAX as u64 - 36;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample width written to the file.
    pub bit_depth: BitDepth,
}

impl WavFormat {
    /// Creates a mono 16-bit WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bit_depth: BitDepth::Pcm16,
        }
    }

    /// Creates a stereo 16-bit WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bit_depth: BitDepth::Pcm16,
        }
    }

    /// Format matching a rendered buffer's rate and depth.
    pub fn for_buffer(buffer: &SampleBuffer, channels: u16) -> Self {
        Self {
            channels,
            sample_rate: buffer.sample_rate(),
            bit_depth: buffer.bit_depth(),
        }
    }

    /// Returns a copy with a different sample width.
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bit_depth.bytes_per_sample()
    }

    /// Block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate (bytes per second).
    ///
    /// Widened so layouts past the header limit can be detected.
    pub fn byte_rate(&self) -> u64 {
        self.sample_rate as u64 * self.block_align() as u64
    }

    /// Size of the PCM payload for `frames` sample frames.
    pub fn data_bytes(&self, frames: usize) -> u64 {
        (frames as u64).saturating_mul(self.block_align() as u64)
    }

    /// Checks that the writer can produce this layout.
    pub(crate) fn validate(&self) -> DtmfResult<()> {
        if !matches!(self.channels, 1 | 2) {
            return Err(DtmfError::UnsupportedChannels {
                channels: self.channels,
            });
        }
        if self.sample_rate == 0 {
            return Err(DtmfError::invalid_config(
                "sample_rate",
                "must be greater than 0 Hz",
            ));
        }
        if self.byte_rate() > MAX_BYTE_RATE {
            return Err(DtmfError::invalid_config(
                "sample_rate",
                format!(
                    "{} Hz at {} channel(s) of {} needs {} bytes/s, above the WAV limit of {}",
                    self.sample_rate, self.channels, self.bit_depth, self.byte_rate(), MAX_BYTE_RATE
                ),
            ));
        }
        Ok(())
    }

    /// Checks that `frames` sample frames fit in one data chunk.
    pub(crate) fn check_frames(&self, frames: usize) -> DtmfResult<()> {
        let bytes = self.data_bytes(frames);
        if bytes > MAX_DATA_BYTES {
            return Err(DtmfError::DataTooLarge {
                bytes,
                limit: MAX_DATA_BYTES,
            });
        }
        Ok(())
    }

    /// Container spec handed to `hound`.
    pub(crate) fn to_spec(self) -> hound::WavSpec {
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bit_depth.bits(),
            sample_format: hound::SampleFormat::Int,
        }
    }
}
