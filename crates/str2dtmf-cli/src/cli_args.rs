//! CLI argument definitions for the `str2dtmf` command-line interface.
//!
//! The `#[derive(Parser)]` type lives here, keeping `main.rs` focused on
//! dispatch and exit codes.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::generate::GenerateArgs;
use crate::input::ConfigOverrides;

/// Generate DTMF tones and save them to a WAV file.
#[derive(Debug, Parser)]
#[command(name = "str2dtmf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Sequence of digits to generate DTMF tones (0-9, A-D, *, #, ',' for a pause)
    pub digits: String,

    /// Duration of each tone in milliseconds [default: 500]
    #[arg(long, value_name = "MS")]
    pub duration: Option<u32>,

    /// Duration of silence between tones in milliseconds [default: 25]
    #[arg(long, value_name = "MS")]
    pub silence_duration: Option<u32>,

    /// Sample rate in Hz [default: 8000]
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<u32>,

    /// Output WAV file name
    #[arg(long, value_name = "PATH", default_value = "output.wav")]
    pub output_file: PathBuf,

    /// Generate stereo audio instead of mono
    #[arg(long)]
    pub stereo: bool,

    /// Generate PCM-8 bit instead of PCM-16
    #[arg(long)]
    pub pcm8: bool,

    /// JSON file with synthesis settings; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Synthesis settings given explicitly on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tone_duration_ms: self.duration,
            silence_duration_ms: self.silence_duration,
            sample_rate: self.sample_rate,
            pcm8: self.pcm8,
        }
    }

    /// Arguments for the generate command.
    pub fn generate_args(&self) -> GenerateArgs {
        GenerateArgs {
            digits: self.digits.clone(),
            overrides: self.overrides(),
            config_path: self.config.clone(),
            output_file: self.output_file.clone(),
            channels: if self.stereo { 2 } else { 1 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["str2dtmf", "123"]).unwrap();
        assert_eq!(cli.digits, "123");
        assert_eq!(cli.duration, None);
        assert_eq!(cli.silence_duration, None);
        assert_eq!(cli.sample_rate, None);
        assert_eq!(cli.output_file, PathBuf::from("output.wav"));
        assert!(!cli.stereo);
        assert!(!cli.pcm8);
        assert!(!cli.json);
        assert_eq!(cli.generate_args().channels, 1);
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::try_parse_from([
            "str2dtmf",
            "*0#",
            "--duration",
            "200",
            "--silence-duration",
            "50",
            "--sample-rate",
            "44100",
            "--output-file",
            "dial.wav",
            "--stereo",
            "--pcm8",
            "--config",
            "tones.json",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.digits, "*0#");
        assert_eq!(
            cli.overrides(),
            ConfigOverrides {
                tone_duration_ms: Some(200),
                silence_duration_ms: Some(50),
                sample_rate: Some(44100),
                pcm8: true,
            }
        );
        let args = cli.generate_args();
        assert_eq!(args.output_file, PathBuf::from("dial.wav"));
        assert_eq!(args.config_path, Some(PathBuf::from("tones.json")));
        assert_eq!(args.channels, 2);
        assert!(cli.json);
    }

    #[test]
    fn test_cli_requires_digits() {
        assert!(Cli::try_parse_from(["str2dtmf"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_duration() {
        assert!(Cli::try_parse_from(["str2dtmf", "1", "--duration", "-5"]).is_err());
    }

    #[test]
    fn test_cli_verify_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
