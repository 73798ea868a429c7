//! Generate command implementation
//!
//! Renders the dial string to DTMF tones and writes them to a WAV file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use str2dtmf_synth::wav::read_wav_info;
use str2dtmf_synth::{synthesize, DtmfError, SampleBuffer, WavWriter};

use super::exit_codes;
use super::json_output::{
    dtmf_error_to_json, input_error_to_json, skipped_char_to_json, GenerateOutput,
    GenerateResult, JsonWarning,
};
use crate::input::{resolve_config, ConfigOverrides};

/// Inputs to the generate command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Characters to dial
    pub digits: String,
    /// Settings given as flags
    pub overrides: ConfigOverrides,
    /// Optional JSON config file
    pub config_path: Option<PathBuf>,
    /// Destination WAV file
    pub output_file: PathBuf,
    /// 1 for mono, 2 for stereo
    pub channels: u16,
}

/// Run the generate command
///
/// # Arguments
/// * `args` - Dial string, settings and output location
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 invalid input, 2 write failure
pub fn run(args: &GenerateArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(args: &GenerateArgs) -> Result<ExitCode> {
    let output_file = args.output_file.display().to_string();

    println!("{} {}", "Generating DTMF for:".cyan().bold(), args.digits);

    let resolved = resolve_config(args.config_path.as_deref(), &args.overrides)
        .context("Failed to load config file")?;
    if let (Some(path), Some(hash)) = (&args.config_path, &resolved.source_hash) {
        println!("{} {} ({})", "Config:".dimmed(), path.display(), &hash[..16]);
    }
    let config = resolved.config;

    println!(
        "{} {} ms tone, {} ms silence, {} Hz, {}, {}",
        "Settings:".dimmed(),
        config.tone_duration_ms,
        config.silence_duration_ms,
        config.sample_rate,
        config.bit_depth,
        if args.channels == 2 { "stereo" } else { "mono" }
    );

    let buffer = synthesize(&args.digits, &config).context("Failed to synthesize tones")?;

    for skipped in buffer.skipped() {
        println!("  {} {}", "!".yellow(), skipped);
    }

    if let Err(e) = write_buffer(&buffer, args) {
        println!(
            "\n{} could not save the data into {}: {}",
            "GENERATION FAILED".red().bold(),
            output_file,
            e
        );
        return Ok(ExitCode::from(failure_code(&e)));
    }

    let info = read_wav_info(&args.output_file)
        .with_context(|| format!("Failed to read back {}", output_file))?;

    println!("\nDTMF tones generated and saved to {}", output_file.green());
    println!(
        "  {} {} ch, {}-bit, {} Hz, {} frames, {:.3}s, peak {}",
        "Audio:".dimmed(),
        info.channels,
        info.bits_per_sample,
        info.sample_rate,
        info.frames,
        buffer.duration_seconds(),
        buffer.peak()
    );
    println!("  {} {}", "PCM hash:".dimmed(), &buffer.pcm_hash()[..16]);

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(args: &GenerateArgs) -> Result<ExitCode> {
    let resolved = match resolve_config(args.config_path.as_deref(), &args.overrides) {
        Ok(resolved) => resolved,
        Err(e) => {
            let output = GenerateOutput::failure(vec![input_error_to_json(&e)], vec![]);
            print_json(&output)?;
            return Ok(ExitCode::from(exit_codes::INVALID_INPUT));
        }
    };
    let config = resolved.config;

    let buffer = match synthesize(&args.digits, &config) {
        Ok(buffer) => buffer,
        Err(e) => {
            let output = GenerateOutput::failure(vec![dtmf_error_to_json(&e)], vec![]);
            print_json(&output)?;
            return Ok(ExitCode::from(failure_code(&e)));
        }
    };

    let warnings: Vec<JsonWarning> = buffer.skipped().iter().map(skipped_char_to_json).collect();

    if let Err(e) = write_buffer(&buffer, args) {
        let output = GenerateOutput::failure(vec![dtmf_error_to_json(&e)], warnings);
        print_json(&output)?;
        return Ok(ExitCode::from(failure_code(&e)));
    }

    let mut result = GenerateResult::from_buffer(
        &buffer,
        config,
        &args.output_file.display().to_string(),
        args.channels,
    );
    result.config_hash = resolved.source_hash;

    print_json(&GenerateOutput::success(result, warnings))?;
    Ok(ExitCode::SUCCESS)
}

fn write_buffer(buffer: &SampleBuffer, args: &GenerateArgs) -> Result<(), DtmfError> {
    WavWriter::for_buffer(buffer)
        .channels(args.channels)
        .write_to_file(buffer, &args.output_file)
}

fn failure_code(err: &DtmfError) -> u8 {
    if err.is_io() {
        exit_codes::IO_FAILURE
    } else {
        exit_codes::INVALID_INPUT
    }
}

fn print_json(output: &GenerateOutput) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
