//! Behavioural tests for the `randigraph` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use randigraph_test_support::graph::assert_graph_text;
use rstest::rstest;
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_randigraph"));
    command
        .current_dir(dir)
        .args(args)
        .env("RUST_LOG", "info")
        .env_remove("RANDIGRAPH_LOG_FORMAT");
    match command.output() {
        Ok(output) => output,
        Err(error) => panic!("failed to run randigraph: {error}"),
    }
}

fn workdir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

#[test]
fn generate_writes_default_output_and_confirms() {
    let dir = workdir();
    let output = run(dir.path(), &["generate", "--vertices", "3", "--edges", "3", "--weight-range", "5"]);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("expected success, got failure: {stderr}");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Graph with 3 vertices and 3 edges saved to graph_input.txt.\n"
    );

    let text = match fs::read_to_string(dir.path().join("graph_input.txt")) {
        Ok(text) => text,
        Err(err) => panic!("default output file must exist: {err}"),
    };
    let _ = assert_graph_text(&text, 3, 3, 5);
}

#[test]
fn too_many_edges_fails_without_creating_output() {
    let dir = workdir();
    let output = run(dir.path(), &["generate", "--vertices", "2", "--edges", "3"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GENERATOR_INVALID_CONFIGURATION"), "stderr: {stderr}");
    assert!(stderr.contains("at most 2"), "stderr: {stderr}");
    assert!(!dir.path().join("graph_input.txt").exists());
}

#[rstest]
#[case::human(None)]
#[case::json(Some("json"))]
fn seeded_generation_then_verify(#[case] log_format: Option<&str>) {
    let dir = workdir();
    let mut generate = Command::new(env!("CARGO_BIN_EXE_randigraph"));
    generate.current_dir(dir.path()).args([
        "generate",
        "--vertices",
        "50",
        "--edges",
        "80",
        "--output",
        "graph5.txt",
        "--seed",
        "5",
    ]);
    if let Some(format) = log_format {
        generate.env("RANDIGRAPH_LOG_FORMAT", format);
    }
    let generated = match generate.output() {
        Ok(output) => output,
        Err(error) => panic!("failed to run randigraph: {error}"),
    };
    assert!(generated.status.success());

    let verified = run(dir.path(), &["verify", "graph5.txt", "--weight-range", "100"]);
    assert!(verified.status.success());
    assert_eq!(
        String::from_utf8_lossy(&verified.stdout),
        "graph5.txt: 50 vertices, 80 edges, ok\n"
    );
}

#[test]
fn unsupported_log_format_fails_early() {
    let dir = workdir();
    let output = match Command::new(env!("CARGO_BIN_EXE_randigraph"))
        .current_dir(dir.path())
        .args(["generate", "--vertices", "3", "--edges", "1"])
        .env("RANDIGRAPH_LOG_FORMAT", "xml")
        .output()
    {
        Ok(output) => output,
        Err(error) => panic!("failed to run randigraph: {error}"),
    };
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported log format"), "stderr: {stderr}");
    assert!(!dir.path().join("graph_input.txt").exists());
}
