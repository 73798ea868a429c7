//! Keypad synthesis integration tests.
//!
//! Checks the spectral content of every rendered symbol with a Goertzel
//! filter tuned to the eight DTMF frequencies.

use std::f64::consts::PI;

use str2dtmf_synth::keypad::{COLUMN_FREQUENCIES, ROW_FREQUENCIES};
use str2dtmf_synth::{synthesize, BitDepth, DtmfSymbol, SynthesisConfig};

/// Signal power at `freq` over the whole block.
fn goertzel_power(samples: &[i16], freq: f64, sample_rate: f64) -> f64 {
    let coeff = 2.0 * (2.0 * PI * freq / sample_rate).cos();
    let (mut s1, mut s2) = (0.0f64, 0.0f64);
    for &x in samples {
        let s0 = x as f64 + coeff * s1 - s2;
        s2 = s1;
        s1 = s0;
    }
    s1 * s1 + s2 * s2 - coeff * s1 * s2
}

fn strongest(samples: &[i16], candidates: &[u32], sample_rate: f64) -> u32 {
    candidates
        .iter()
        .copied()
        .max_by(|&a, &b| {
            goertzel_power(samples, a as f64, sample_rate)
                .total_cmp(&goertzel_power(samples, b as f64, sample_rate))
        })
        .unwrap()
}

#[test]
fn test_every_symbol_has_its_row_and_column_tones() {
    let config = SynthesisConfig::default()
        .with_tone_duration_ms(100)
        .with_silence_duration_ms(0);

    for symbol in DtmfSymbol::ALL.iter().filter(|s| !s.is_pause()) {
        let input = symbol.as_char().to_string();
        let buffer = synthesize(&input, &config).unwrap();
        let tone = buffer.tone(0).unwrap();
        let (low, high) = symbol.frequencies();

        assert_eq!(strongest(tone, &ROW_FREQUENCIES, 8000.0), low, "symbol {symbol}");
        assert_eq!(strongest(tone, &COLUMN_FREQUENCIES, 8000.0), high, "symbol {symbol}");
    }
}

#[test]
fn test_pcm8_keeps_the_same_spectrum() {
    let config = SynthesisConfig::default()
        .with_tone_duration_ms(100)
        .with_bit_depth(BitDepth::Pcm8);
    let buffer = synthesize("9", &config).unwrap();
    let tone = buffer.tone(0).unwrap();

    assert_eq!(strongest(tone, &ROW_FREQUENCIES, 8000.0), 852);
    assert_eq!(strongest(tone, &COLUMN_FREQUENCIES, 8000.0), 1477);
}

#[test]
fn test_dial_string_with_mixed_content() {
    let config = SynthesisConfig::default()
        .with_tone_duration_ms(80)
        .with_silence_duration_ms(20)
        .with_sample_rate(16000);
    let buffer = synthesize("+1 (555) 0199,#", &config).unwrap();

    let skipped: String = buffer.skipped().iter().map(|s| s.ch).collect();
    assert_eq!(skipped, "+ () ");
    assert_eq!(buffer.segment_count(), 15);

    for skipped in buffer.skipped() {
        assert!(buffer.segment(skipped.index).unwrap().iter().all(|&s| s == 0));
    }

    // '5' sits at index 4
    let tone = buffer.tone(4).unwrap();
    assert_eq!(strongest(tone, &ROW_FREQUENCIES, 16000.0), 770);
    assert_eq!(strongest(tone, &COLUMN_FREQUENCIES, 16000.0), 1336);
}
