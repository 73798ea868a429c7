//! Test harness utilities for running the generate command and reading WAV output.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tempfile::TempDir;

use str2dtmf_cli::commands::generate::{self, GenerateArgs};
use str2dtmf_cli::input::ConfigOverrides;

/// A decoded WAV file.
#[derive(Debug, Clone)]
pub struct WavFile {
    /// Header fields.
    pub spec: hound::WavSpec,
    /// Interleaved samples as signed integers.
    pub samples: Vec<i32>,
}

impl WavFile {
    /// Decodes WAV bytes held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, hound::Error> {
        Self::from_reader(hound::WavReader::new(Cursor::new(bytes))?)
    }

    /// Reads a WAV file from disk.
    pub fn open(path: &Path) -> Result<Self, hound::Error> {
        Self::from_reader(hound::WavReader::open(path)?)
    }

    fn from_reader<R: std::io::Read>(reader: hound::WavReader<R>) -> Result<Self, hound::Error> {
        let spec = reader.spec();
        let samples = reader.into_samples::<i32>().collect::<Result<_, _>>()?;
        Ok(Self { spec, samples })
    }

    /// Number of sample frames.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.spec.channels as usize
    }

    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Vec<i32> {
        self.samples
            .iter()
            .skip(index)
            .step_by(self.spec.channels as usize)
            .copied()
            .collect()
    }
}

/// A scratch directory for generate command runs.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Path of a file inside the working directory.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Writes a config file into the working directory.
    pub fn write_config(&self, name: &str, json: &str) -> PathBuf {
        let path = self.output_path(name);
        std::fs::write(&path, json).expect("Failed to write config file");
        path
    }

    /// Arguments for a mono run writing to `output` with default settings.
    pub fn args(&self, digits: &str, output: &str) -> GenerateArgs {
        GenerateArgs {
            digits: digits.to_string(),
            overrides: ConfigOverrides::default(),
            config_path: None,
            output_file: self.output_path(output),
            channels: 1,
        }
    }

    /// Runs the generate command with human output.
    pub fn generate(&self, args: &GenerateArgs) -> ExitCode {
        generate::run(args, false).expect("generate command returned an error")
    }

    /// Runs the generate command with JSON output.
    pub fn generate_json(&self, args: &GenerateArgs) -> ExitCode {
        generate::run(args, true).expect("generate command returned an error")
    }

    /// Reads a WAV file written by a previous run.
    pub fn read_wav(&self, name: &str) -> WavFile {
        let path = self.output_path(name);
        WavFile::open(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}
