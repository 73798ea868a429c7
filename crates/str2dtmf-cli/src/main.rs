//! str2dtmf - Generate DTMF tones and save them to a WAV file
//!
//! Exit codes: 0 success, 1 invalid arguments or configuration, 2 the WAV
//! file could not be written.

use std::process::ExitCode;

use clap::Parser;

use str2dtmf_cli::cli_args::Cli;
use str2dtmf_cli::commands::{self, exit_codes};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here as well
            let code = if e.use_stderr() {
                exit_codes::INVALID_INPUT
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match commands::generate::run(&cli.generate_args(), cli.json) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(exit_codes::INVALID_INPUT)
        }
    }
}
