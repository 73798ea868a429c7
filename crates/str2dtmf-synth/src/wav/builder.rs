//! WAV file writer builder pattern.

use std::path::Path;

use crate::config::BitDepth;
use crate::error::{DtmfError, DtmfResult};
use crate::synth::SampleBuffer;

use super::format::WavFormat;
use super::writer::{write_wav_file, write_wav_to_vec};

/// WAV file writer builder.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a new WAV writer with mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// Creates a new WAV writer with stereo 16-bit format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::stereo(sample_rate),
        }
    }

    /// Creates a mono writer matching the buffer's rate and depth.
    pub fn for_buffer(buffer: &SampleBuffer) -> Self {
        Self {
            format: WavFormat::for_buffer(buffer, 1),
        }
    }

    /// Sets the channel count (1 or 2).
    pub fn channels(mut self, channels: u16) -> Self {
        self.format.channels = channels;
        self
    }

    /// Sets the sample width written to the file.
    pub fn bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.format.bit_depth = bit_depth;
        self
    }

    /// Returns the format this writer produces.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Writes a buffer to a byte vector.
    pub fn write_to_vec(&self, buffer: &SampleBuffer) -> DtmfResult<Vec<u8>> {
        self.check_depth(buffer)?;
        write_wav_to_vec(&self.format, buffer.samples())
    }

    /// Writes a buffer to a file.
    ///
    /// On failure the buffer is untouched and may be written elsewhere.
    pub fn write_to_file(&self, buffer: &SampleBuffer, path: impl AsRef<Path>) -> DtmfResult<()> {
        self.check_depth(buffer)?;
        write_wav_file(path.as_ref(), &self.format, buffer.samples())
    }

    /// 16-bit samples cannot be narrowed into an 8-bit file.
    fn check_depth(&self, buffer: &SampleBuffer) -> DtmfResult<()> {
        if self.format.bit_depth.bits() < buffer.bit_depth().bits() {
            return Err(DtmfError::invalid_config(
                "bit_depth",
                format!(
                    "cannot write a {} buffer as {}",
                    buffer.bit_depth(),
                    self.format.bit_depth
                ),
            ));
        }
        Ok(())
    }
}
