//! str2dtmf End-to-End Test Infrastructure
//!
//! This crate provides integration tests across the synthesis library and
//! the CLI command layer:
//!
//! - Generation: dial string -> WAV file on disk
//! - Validation: header fields and sample content read back with `hound`
//! - **Determinism**: byte-identical output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p str2dtmf-tests
//! ```

pub mod determinism;
pub mod harness;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use harness::{TestHarness, WavFile};
