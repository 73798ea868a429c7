//! Error types for DTMF synthesis and WAV output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for synthesis and WAV operations.
pub type DtmfResult<T> = Result<T, DtmfError>;

/// Errors that can occur while synthesizing or writing DTMF audio.
#[derive(Debug, Error)]
pub enum DtmfError {
    /// Invalid synthesis configuration.
    #[error("invalid configuration '{field}': {message}")]
    InvalidConfig {
        /// Offending config field.
        field: &'static str,
        /// Error message.
        message: String,
    },

    /// Channel count the WAV writer cannot produce.
    #[error("unsupported channel count: {channels} (expected 1 or 2)")]
    UnsupportedChannels {
        /// The requested channel count.
        channels: u16,
    },

    /// Rendered audio would not fit in a WAV data chunk.
    #[error("audio data of {bytes} bytes exceeds the WAV limit of {limit} bytes")]
    DataTooLarge {
        /// Bytes the PCM payload would need.
        bytes: u64,
        /// Largest payload the container can describe.
        limit: u64,
    },

    /// Writing a WAV file to disk failed.
    #[error("failed to write WAV file '{}': {source}", path.display())]
    Write {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying container/I/O error.
        #[source]
        source: hound::Error,
    },

    /// Encoding a WAV stream in memory failed.
    #[error("WAV encoding error: {0}")]
    Encode(#[from] hound::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DtmfError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable reports.
    pub fn code(&self) -> &'static str {
        match self {
            DtmfError::InvalidConfig { .. } => "DTMF_001",
            DtmfError::UnsupportedChannels { .. } => "DTMF_002",
            DtmfError::Write { .. } => "DTMF_003",
            DtmfError::Encode(_) => "DTMF_004",
            DtmfError::Io(_) => "DTMF_005",
            DtmfError::DataTooLarge { .. } => "DTMF_006",
        }
    }

    /// Whether the error came from the filesystem or the output stream.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            DtmfError::Write { .. } | DtmfError::Encode(_) | DtmfError::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_helper() {
        let err = DtmfError::invalid_config("sample_rate", "must be greater than 0");
        assert!(err.to_string().contains("sample_rate"));
        assert!(err.to_string().contains("greater than 0"));
        assert_eq!(err.code(), "DTMF_001");
        assert!(!err.is_io());
    }

    #[test]
    fn test_write_error_mentions_path_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DtmfError::Write {
            path: PathBuf::from("/nope/out.wav"),
            source: hound::Error::IoError(io),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/out.wav"));
        assert!(msg.contains("denied"));
        assert!(err.is_io());
        assert_eq!(err.code(), "DTMF_003");
    }

    #[test]
    fn test_unsupported_channels_message() {
        let err = DtmfError::UnsupportedChannels { channels: 6 };
        assert!(err.to_string().contains('6'));
        assert!(!err.is_io());
    }

    #[test]
    fn test_data_too_large_is_not_io() {
        let err = DtmfError::DataTooLarge {
            bytes: 8_000_000_000,
            limit: 4_294_967_259,
        };
        assert!(err.to_string().contains("8000000000"));
        assert_eq!(err.code(), "DTMF_006");
        assert!(!err.is_io());
    }
}
