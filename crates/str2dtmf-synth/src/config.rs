//! Synthesis parameters: timing, sample rate and output bit depth.

use serde::{Deserialize, Serialize};

use crate::error::{DtmfError, DtmfResult};
use crate::wav::{MAX_BYTE_RATE, MAX_DATA_BYTES};

/// Default tone length in milliseconds.
pub const DEFAULT_TONE_DURATION_MS: u32 = 500;
/// Default gap after each tone in milliseconds.
pub const DEFAULT_SILENCE_DURATION_MS: u32 = 25;
/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 8000;

/// Signed PCM sample width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitDepth {
    /// 8-bit signed samples.
    Pcm8,
    /// 16-bit signed samples.
    #[default]
    Pcm16,
}

impl BitDepth {
    /// Bits per sample.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Pcm8 => 8,
            BitDepth::Pcm16 => 16,
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(self) -> u16 {
        self.bits() / 8
    }

    /// Largest positive sample value as a float.
    pub fn full_scale(self) -> f64 {
        match self {
            BitDepth::Pcm8 => i8::MAX as f64,
            BitDepth::Pcm16 => i16::MAX as f64,
        }
    }

    /// Gain applied to the sum of the two sines.
    ///
    /// Each sine peaks at 1.0, so halving the full scale keeps the sum in range.
    pub fn amplitude_scale(self) -> f64 {
        0.5 * self.full_scale()
    }

    /// Narrows a rendered sample with a direct numeric cast.
    ///
    /// The cast truncates toward zero. The result is widened back to `i16` so
    /// both depths share one buffer type.
    pub fn quantize(self, value: f64) -> i16 {
        match self {
            BitDepth::Pcm8 => value as i8 as i16,
            BitDepth::Pcm16 => value as i16,
        }
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PCM-{}", self.bits())
    }
}

/// Parameters controlling how an input string is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Length of each tone in milliseconds.
    pub tone_duration_ms: u32,
    /// Length of the silence after each tone in milliseconds.
    pub silence_duration_ms: u32,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Output sample width.
    pub bit_depth: BitDepth,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            tone_duration_ms: DEFAULT_TONE_DURATION_MS,
            silence_duration_ms: DEFAULT_SILENCE_DURATION_MS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            bit_depth: BitDepth::default(),
        }
    }
}

impl SynthesisConfig {
    /// Sets the tone duration.
    pub fn with_tone_duration_ms(mut self, ms: u32) -> Self {
        self.tone_duration_ms = ms;
        self
    }

    /// Sets the inter-tone silence duration.
    pub fn with_silence_duration_ms(mut self, ms: u32) -> Self {
        self.silence_duration_ms = ms;
        self
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, hz: u32) -> Self {
        self.sample_rate = hz;
        self
    }

    /// Sets the output bit depth.
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// Number of samples in one tone, rounded down.
    pub fn samples_per_tone(&self) -> usize {
        ms_to_samples(self.tone_duration_ms, self.sample_rate) as usize
    }

    /// Number of samples in one silence gap, rounded down.
    pub fn samples_per_silence(&self) -> usize {
        ms_to_samples(self.silence_duration_ms, self.sample_rate) as usize
    }

    /// Samples reserved for each input character (tone plus silence).
    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_tone() + self.samples_per_silence()
    }

    /// Mono PCM payload size for `symbols` input characters.
    pub fn data_bytes(&self, symbols: usize) -> u64 {
        let segment = ms_to_samples(self.tone_duration_ms, self.sample_rate)
            + ms_to_samples(self.silence_duration_ms, self.sample_rate);
        (symbols as u64)
            .saturating_mul(segment)
            .saturating_mul(self.bit_depth.bytes_per_sample() as u64)
    }

    /// Rejects configurations that cannot describe audio.
    ///
    /// A zero sample rate or zero tone duration is an error, as is a sample
    /// rate whose mono byte rate overflows the WAV header. Zero silence is
    /// fine, as are combinations that round down to zero samples per tone.
    pub fn validate(&self) -> DtmfResult<()> {
        if self.sample_rate == 0 {
            return Err(DtmfError::invalid_config(
                "sample_rate",
                "must be greater than 0 Hz",
            ));
        }
        let byte_rate = self.sample_rate as u64 * self.bit_depth.bytes_per_sample() as u64;
        if byte_rate > MAX_BYTE_RATE {
            return Err(DtmfError::invalid_config(
                "sample_rate",
                format!(
                    "{} Hz at {} needs {} bytes/s, above the WAV limit of {}",
                    self.sample_rate, self.bit_depth, byte_rate, MAX_BYTE_RATE
                ),
            ));
        }
        if self.tone_duration_ms == 0 {
            return Err(DtmfError::invalid_config(
                "tone_duration_ms",
                "must be greater than 0 ms",
            ));
        }
        Ok(())
    }

    /// Fails if rendering `symbols` characters would not fit in a WAV file.
    pub fn check_payload(&self, symbols: usize) -> DtmfResult<()> {
        let bytes = self.data_bytes(symbols);
        if bytes > MAX_DATA_BYTES {
            return Err(DtmfError::DataTooLarge {
                bytes,
                limit: MAX_DATA_BYTES,
            });
        }
        Ok(())
    }
}

fn ms_to_samples(ms: u32, sample_rate: u32) -> u64 {
    ms as u64 * sample_rate as u64 / 1000
}
