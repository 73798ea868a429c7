//! str2dtmf synthesis library
//!
//! Renders dual-tone multi-frequency (DTMF) keypad signals from a character
//! string and writes them as uncompressed PCM WAV files.
//!
//! # Overview
//!
//! Each input character becomes one fixed-size segment: a tone made of the
//! symbol's low and high frequencies summed together, then a silence gap.
//! Characters outside the DTMF alphabet keep a silent segment and are
//! reported back to the caller instead of aborting synthesis.
//!
//! # Determinism
//!
//! Synthesis is a pure function of the input string and [`SynthesisConfig`].
//! Identical calls produce bit-identical buffers, and the WAV writer emits no
//! timestamps or variable metadata.
//!
//! # Example
//!
//! ```no_run
//! use str2dtmf_synth::{synthesize, SynthesisConfig, WavWriter};
//!
//! let config = SynthesisConfig::default().with_sample_rate(44100);
//! let buffer = synthesize("555,0123", &config)?;
//!
//! for skipped in buffer.skipped() {
//!     eprintln!("warning: {skipped}");
//! }
//!
//! WavWriter::for_buffer(&buffer).channels(2).write_to_file(&buffer, "dial.wav")?;
//! # Ok::<(), str2dtmf_synth::DtmfError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`synthesize()`] - Main entry point for tone rendering
//! - [`keypad`] - DTMF symbols and the frequency table
//! - [`config`] - Timing, sample rate and bit depth
//! - [`wav`] - WAV file writer and header inspection

pub mod config;
pub mod error;
pub mod keypad;
pub mod synth;
pub mod wav;

// Re-export main types at crate root
pub use config::{BitDepth, SynthesisConfig};
pub use error::{DtmfError, DtmfResult};
pub use keypad::DtmfSymbol;
pub use synth::{render_tone, synthesize, SampleBuffer, SkippedChar};
pub use wav::{WavFormat, WavInfo, WavWriter};
