//! CLI command implementations

pub mod generate;
pub mod json_output;

/// Process exit codes.
///
/// `--help` and `--version` also exit with [`SUCCESS`](exit_codes::SUCCESS).
pub mod exit_codes {
    /// Tones generated and written.
    pub const SUCCESS: u8 = 0;
    /// Bad arguments, unreadable or malformed config file, or invalid settings.
    pub const INVALID_INPUT: u8 = 1;
    /// The WAV file could not be written.
    pub const IO_FAILURE: u8 = 2;
}
