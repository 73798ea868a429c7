//! str2dtmf CLI library.
//!
//! Argument definitions, config file loading and the generate command behind
//! the `str2dtmf` binary.

pub mod cli_args;
pub mod commands;
pub mod input;
