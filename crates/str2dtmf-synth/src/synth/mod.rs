//! DTMF tone synthesis.
//!
//! Every input character gets a fixed-size segment: `samples_per_tone`
//! samples of the summed sine pair followed by `samples_per_silence` samples
//! of silence. Characters outside the DTMF alphabet keep an all-zero segment
//! and are reported through [`SampleBuffer::skipped`].

mod buffer;


use std::f64::consts::PI;

pub use buffer::{SampleBuffer, SkippedChar};

use crate::config::{BitDepth, SynthesisConfig};
use crate::error::DtmfResult;
use crate::keypad::DtmfSymbol;

/// Renders `input` into a mono sample buffer.
///
/// # Arguments
/// * `input` - Characters to dial; `0-9`, `A-D` (any case), `*`, `#` and `,`
/// * `config` - Timing, sample rate and bit depth
///
/// # Returns
/// A buffer of `input.chars().count() * config.samples_per_segment()` samples,
/// or [`DtmfError::InvalidConfig`](crate::DtmfError::InvalidConfig) if the
/// sample rate or tone duration is zero. Output too large for a WAV file is
/// rejected with [`DtmfError::DataTooLarge`](crate::DtmfError::DataTooLarge)
/// before anything is allocated.
pub fn synthesize(input: &str, config: &SynthesisConfig) -> DtmfResult<SampleBuffer> {
    config.validate()?;
    let symbols = input.chars().count();
    config.check_payload(symbols)?;

    let samples_per_tone = config.samples_per_tone();
    let samples_per_silence = config.samples_per_silence();
    let segment_len = samples_per_tone + samples_per_silence;

    let mut samples = vec![0i16; symbols * segment_len];
    let mut skipped = Vec::new();

    for (i, ch) in input.chars().enumerate() {
        let Some(symbol) = DtmfSymbol::from_char(ch) else {
            skipped.push(SkippedChar { index: i, ch });
            continue;
        };

        let start = i * segment_len;
        let tone = render_tone(symbol, samples_per_tone, config.sample_rate, config.bit_depth);
        samples[start..start + samples_per_tone].copy_from_slice(&tone);
        // The trailing silence is already zero from the allocation.
    }

    Ok(SampleBuffer::new(
        samples,
        config.sample_rate,
        config.bit_depth,
        samples_per_tone,
        samples_per_silence,
        skipped,
    ))
}

/// Renders one tone segment for `symbol`.
///
/// Sample `t` is `amplitude_scale * (sin(2π·f1·t/rate) + sin(2π·f2·t/rate))`,
/// narrowed with [`BitDepth::quantize`]. The pause symbol renders all zeros.
pub fn render_tone(
    symbol: DtmfSymbol,
    num_samples: usize,
    sample_rate: u32,
    bit_depth: BitDepth,
) -> Vec<i16> {
    let (f1, f2) = symbol.frequencies();
    let (f1, f2) = (f1 as f64, f2 as f64);
    let rate = sample_rate as f64;
    let scale = bit_depth.amplitude_scale();

    (0..num_samples)
        .map(|t| {
            let t = t as f64;
            let low = (2.0 * PI * f1 * t / rate).sin();
            let high = (2.0 * PI * f2 * t / rate).sin();
            bit_depth.quantize(scale * (low + high))
        })
        .collect()
}
