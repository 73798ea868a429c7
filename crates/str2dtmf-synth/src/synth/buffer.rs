//! Rendered sample buffer and synthesis diagnostics.

use std::ops::Range;

use serde::Serialize;

use crate::config::BitDepth;

/// An input character that was not in the DTMF alphabet.
///
/// Its segment in the buffer was left silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedChar {
    /// Character position in the input (counted in chars, not bytes).
    pub index: usize,
    /// The offending character.
    pub ch: char,
}

impl std::fmt::Display for SkippedChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "char {:?} at position {} ignored because it is not a DTMF character",
            self.ch, self.index
        )
    }
}

/// Mono PCM samples produced by [`synthesize`](super::synthesize).
///
/// Samples are stored as `i16` for both bit depths. In [`BitDepth::Pcm8`] mode
/// every value lies in `i8` range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
    bit_depth: BitDepth,
    samples_per_tone: usize,
    samples_per_silence: usize,
    skipped: Vec<SkippedChar>,
}

impl SampleBuffer {
    pub(crate) fn new(
        samples: Vec<i16>,
        sample_rate: u32,
        bit_depth: BitDepth,
        samples_per_tone: usize,
        samples_per_silence: usize,
        skipped: Vec<SkippedChar>,
    ) -> Self {
        Self {
            samples,
            sample_rate,
            bit_depth,
            samples_per_tone,
            samples_per_silence,
            skipped,
        }
    }

    /// All samples, in order.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Sample width the values were quantized to.
    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    /// Samples in each tone.
    pub fn samples_per_tone(&self) -> usize {
        self.samples_per_tone
    }

    /// Samples in each silence gap.
    pub fn samples_per_silence(&self) -> usize {
        self.samples_per_silence
    }

    /// Samples reserved per input character.
    pub fn segment_len(&self) -> usize {
        self.samples_per_tone + self.samples_per_silence
    }

    /// Number of input characters the buffer was rendered from.
    ///
    /// Zero-length segments make the count unrecoverable, in which case this
    /// returns 0.
    pub fn segment_count(&self) -> usize {
        match self.segment_len() {
            0 => 0,
            len => self.samples.len() / len,
        }
    }

    /// Sample range reserved for input character `index`.
    pub fn segment_range(&self, index: usize) -> Range<usize> {
        let start = index * self.segment_len();
        start..start + self.segment_len()
    }

    /// Samples reserved for input character `index` (tone then silence).
    ///
    /// Returns `None` past the end of the buffer.
    pub fn segment(&self, index: usize) -> Option<&[i16]> {
        self.samples.get(self.segment_range(index))
    }

    /// Tone part of segment `index`.
    pub fn tone(&self, index: usize) -> Option<&[i16]> {
        self.segment(index).map(|s| &s[..self.samples_per_tone])
    }

    /// Silence part of segment `index`.
    pub fn silence(&self, index: usize) -> Option<&[i16]> {
        self.segment(index).map(|s| &s[self.samples_per_tone..])
    }

    /// Characters that were not rendered.
    pub fn skipped(&self) -> &[SkippedChar] {
        &self.skipped
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Playback length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Mono PCM payload exactly as it appears in a WAV data chunk.
    ///
    /// 16-bit samples are little-endian signed. 8-bit samples use the WAV
    /// unsigned offset-binary encoding (`0x80` is silence).
    pub fn to_pcm_bytes(&self) -> Vec<u8> {
        match self.bit_depth {
            BitDepth::Pcm8 => self
                .samples
                .iter()
                .map(|&s| (s as i8 as u8).wrapping_add(0x80))
                .collect(),
            BitDepth::Pcm16 => {
                let mut pcm = Vec::with_capacity(self.samples.len() * 2);
                for &sample in &self.samples {
                    pcm.extend_from_slice(&sample.to_le_bytes());
                }
                pcm
            }
        }
    }

    /// BLAKE3 hex digest of [`to_pcm_bytes`](Self::to_pcm_bytes).
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&self.to_pcm_bytes()).to_hex().to_string()
    }
}
