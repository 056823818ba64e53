//! Command-line interface for generating and verifying random graph files.
//!
//! `generate` samples a random directed weighted graph and writes it to disk;
//! `verify` parses an existing file and checks it against the generator's
//! invariants.

mod commands;

pub use commands::{
    Cli, CliError, Command, DEFAULT_OUTPUT_FILE, ExecutionSummary, GenerateCommand,
    VerifyCommand, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
