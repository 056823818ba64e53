//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_generate;
use super::{Cli, CliError, GenerateCommand, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_graph_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn generate_command(
    output: PathBuf,
    num_vertices: usize,
    num_edges: usize,
    weight_range: u64,
) -> GenerateCommand {
    GenerateCommand {
        num_vertices,
        num_edges,
        weight_range,
        output,
        seed: Some(17),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_generate_expecting_error(cmd: GenerateCommand, panic_msg: &str) -> CliError {
    match run_generate(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
