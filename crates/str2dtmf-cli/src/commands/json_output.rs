//! JSON output types for machine-readable CLI output.
//!
//! Emitted by the generate command when `--json` is passed, so scripts can
//! parse results without scraping colored text.

use serde::{Deserialize, Serialize};
use str2dtmf_synth::{DtmfError, SampleBuffer, SkippedChar, SynthesisConfig};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable. Library errors pass through their own
/// `DTMF_XXX` codes.
pub mod error_codes {
    /// Config file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Config file is not valid JSON or has unknown fields
    pub const JSON_PARSE: &str = "CLI_002";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Input character outside the DTMF alphabet
    pub const SKIPPED_CHAR: &str = "CLI_W001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "DTMF_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File path involved (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Character position in the input (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            position: None,
        }
    }

    /// Sets the input position for this warning.
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

/// JSON output for the generate command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether the WAV file was written
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Non-fatal diagnostics (skipped characters)
    pub warnings: Vec<JsonWarning>,
    /// Generation details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(result: GenerateResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// Generation details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Path of the written WAV file
    pub output_file: String,
    /// Effective synthesis settings
    pub config: SynthesisConfig,
    /// Channel count in the file
    pub channels: u16,
    /// Bytes per sample in the file
    pub sample_width: u16,
    /// Number of frames in the file
    pub frames: usize,
    /// Samples per tone
    pub samples_per_tone: usize,
    /// Samples per silence gap
    pub samples_per_silence: usize,
    /// Playback length in seconds
    pub duration_seconds: f64,
    /// Largest absolute sample value
    pub peak: u16,
    /// BLAKE3 hash of the mono PCM payload
    pub pcm_hash: String,
    /// BLAKE3 hash of the config file (if one was used)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_hash: Option<String>,
}

impl GenerateResult {
    /// Summarizes a written buffer.
    pub fn from_buffer(
        buffer: &SampleBuffer,
        config: SynthesisConfig,
        output_file: &str,
        channels: u16,
    ) -> Self {
        Self {
            output_file: output_file.to_string(),
            config,
            channels,
            sample_width: buffer.bit_depth().bytes_per_sample(),
            frames: buffer.len(),
            samples_per_tone: buffer.samples_per_tone(),
            samples_per_silence: buffer.samples_per_silence(),
            duration_seconds: buffer.duration_seconds(),
            peak: buffer.peak(),
            pcm_hash: buffer.pcm_hash(),
            config_hash: None,
        }
    }
}

/// Converts a config loading error to a JSON error.
pub fn input_error_to_json(err: &InputError) -> JsonError {
    let (code, path) = match err {
        InputError::FileRead { path, .. } => (error_codes::FILE_READ, path),
        InputError::JsonParse { path, .. } => (error_codes::JSON_PARSE, path),
    };
    JsonError::new(code, err.to_string()).with_file(path.display().to_string())
}

/// Converts a synthesis or WAV error to a JSON error.
pub fn dtmf_error_to_json(err: &DtmfError) -> JsonError {
    let error = JsonError::new(err.code(), err.to_string());
    match err {
        DtmfError::Write { path, .. } => error.with_file(path.display().to_string()),
        _ => error,
    }
}

/// Converts a skipped input character to a JSON warning.
pub fn skipped_char_to_json(skipped: &SkippedChar) -> JsonWarning {
    JsonWarning::new(warning_codes::SKIPPED_CHAR, skipped.to_string()).with_position(skipped.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_failure_output_omits_result() {
        let output = GenerateOutput::failure(vec![JsonError::new("CLI_001", "boom")], vec![]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("result").is_none());
        assert_eq!(json["errors"][0]["code"], "CLI_001");
        assert!(json["errors"][0].get("file").is_none());
    }

    #[test]
    fn test_input_error_to_json() {
        let err = InputError::JsonParse {
            path: PathBuf::from("tones.json"),
            message: "expected value".to_string(),
        };
        let json = input_error_to_json(&err);
        assert_eq!(json.code, error_codes::JSON_PARSE);
        assert_eq!(json.file.as_deref(), Some("tones.json"));
        assert!(json.message.contains("expected value"));
    }

    #[test]
    fn test_dtmf_error_to_json_keeps_library_code() {
        let err = DtmfError::invalid_config("sample_rate", "must be greater than 0 Hz");
        let json = dtmf_error_to_json(&err);
        assert_eq!(json.code, "DTMF_001");
        assert!(json.file.is_none());
    }

    #[test]
    fn test_skipped_char_warning() {
        let warning = skipped_char_to_json(&SkippedChar { index: 3, ch: 'x' });
        assert_eq!(warning.code, warning_codes::SKIPPED_CHAR);
        assert_eq!(warning.position, Some(3));
    }
}
