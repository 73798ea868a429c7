//! Synthesis config loading and command-line overrides.
//!
//! Settings are resolved in order of precedence: explicit command-line flags,
//! then the `--config` JSON file, then [`SynthesisConfig::default`].

use std::path::{Path, PathBuf};

use str2dtmf_synth::{BitDepth, SynthesisConfig};

/// Synthesis settings passed explicitly on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// `--duration`
    pub tone_duration_ms: Option<u32>,
    /// `--silence-duration`
    pub silence_duration_ms: Option<u32>,
    /// `--sample-rate`
    pub sample_rate: Option<u32>,
    /// `--pcm8`
    pub pcm8: bool,
}

impl ConfigOverrides {
    /// Applies these overrides on top of `base`.
    pub fn apply(&self, base: SynthesisConfig) -> SynthesisConfig {
        let mut config = base;
        if let Some(ms) = self.tone_duration_ms {
            config.tone_duration_ms = ms;
        }
        if let Some(ms) = self.silence_duration_ms {
            config.silence_duration_ms = ms;
        }
        if let Some(hz) = self.sample_rate {
            config.sample_rate = hz;
        }
        if self.pcm8 {
            config.bit_depth = BitDepth::Pcm8;
        }
        config
    }
}

/// Errors that can occur while loading a config file.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { path: PathBuf, message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read config file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { path, message } => {
                write!(f, "invalid config file '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result of loading a config file.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Parsed config; fields missing from the file hold their defaults.
    pub config: SynthesisConfig,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Loads a [`SynthesisConfig`] from a JSON file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use str2dtmf_cli::input::load_config;
///
/// let loaded = load_config(Path::new("tones.json")).unwrap();
/// println!("sample rate: {}", loaded.config.sample_rate);
/// ```
pub fn load_config(path: &Path) -> Result<LoadResult, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let config = serde_json::from_str(&content).map_err(|e| InputError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        config,
        source_hash,
    })
}

/// Effective synthesis settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Settings after applying the file and the overrides.
    pub config: SynthesisConfig,
    /// BLAKE3 hash of the config file, if one was given.
    pub source_hash: Option<String>,
}

/// Resolves the effective config from an optional file plus overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ResolvedConfig, InputError> {
    let (base, source_hash) = match config_path {
        Some(path) => {
            let loaded = load_config(path)?;
            (loaded.config, Some(loaded.source_hash))
        }
        None => (SynthesisConfig::default(), None),
    };
    Ok(ResolvedConfig {
        config: overrides.apply(base),
        source_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("tones.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_file_no_overrides_gives_defaults() {
        let resolved = resolve_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(resolved.config, SynthesisConfig::default());
        assert_eq!(resolved.source_hash, None);
    }

    #[test]
    fn test_overrides_apply_over_defaults() {
        let overrides = ConfigOverrides {
            tone_duration_ms: Some(200),
            silence_duration_ms: Some(0),
            sample_rate: Some(44100),
            pcm8: true,
        };
        let config = resolve_config(None, &overrides).unwrap().config;
        assert_eq!(
            config,
            SynthesisConfig {
                tone_duration_ms: 200,
                silence_duration_ms: 0,
                sample_rate: 44100,
                bit_depth: BitDepth::Pcm8,
            }
        );
    }

    #[test]
    fn test_file_values_fill_in_missing_flags() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(
            &tmp,
            r#"{"tone_duration_ms": 100, "sample_rate": 16000, "bit_depth": "pcm8"}"#,
        );
        let overrides = ConfigOverrides {
            sample_rate: Some(22050),
            ..ConfigOverrides::default()
        };

        let resolved = resolve_config(Some(&path), &overrides).unwrap();
        assert!(resolved.source_hash.is_some());
        let config = resolved.config;
        assert_eq!(config.tone_duration_ms, 100);
        assert_eq!(config.silence_duration_ms, 25);
        assert_eq!(config.sample_rate, 22050);
        assert_eq!(config.bit_depth, BitDepth::Pcm8);
    }

    #[test]
    fn test_load_config_hashes_source() {
        let tmp = tempfile::tempdir().unwrap();
        let content = r#"{"silence_duration_ms": 10}"#;
        let path = write_config(&tmp, content);

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.config.silence_duration_ms, 10);
        assert_eq!(
            loaded.source_hash,
            blake3::hash(content.as_bytes()).to_hex().to_string()
        );
    }

    #[test]
    fn test_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_config(&tmp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_malformed_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, "{ not json");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert!(err.to_string().contains("tones.json"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, r#"{"volume": 11}"#);
        assert!(matches!(
            load_config(&path),
            Err(InputError::JsonParse { .. })
        ));
    }
}
