//! Command implementations and argument parsing for the randigraph CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use randigraph_core::{
    DEFAULT_WEIGHT_RANGE, GeneratorBuilder, GeneratorError, GraphError, GraphIoError, ReadError,
    read_graph_file, write_graph_file,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Output path used when `--output` is omitted.
pub const DEFAULT_OUTPUT_FILE: &str = "graph_input.txt";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randigraph",
    about = "Generate random directed weighted graphs as plain-text edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random graph and write it to a file.
    Generate(GenerateCommand),
    /// Check an existing graph file against the generator invariants.
    Verify(VerifyCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices, identified as `0..vertices`.
    #[arg(long = "vertices", value_parser = clap::value_parser!(usize))]
    pub num_vertices: usize,

    /// Number of unique directed edges to generate.
    #[arg(long = "edges", value_parser = clap::value_parser!(usize))]
    pub num_edges: usize,

    /// Inclusive upper bound for edge weights; weights start at 1.
    #[arg(long = "weight-range", default_value_t = DEFAULT_WEIGHT_RANGE)]
    pub weight_range: u64,

    /// Destination file, overwritten if it exists.
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Seed for reproducible output. A random seed is chosen and logged when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `verify` command.
#[derive(Debug, Args, Clone)]
pub struct VerifyCommand {
    /// Graph file to check.
    pub path: PathBuf,

    /// Also require every weight to be at most this bound.
    #[arg(long = "weight-range")]
    pub weight_range: Option<u64>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The generator configuration was rejected.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Writing the graph file failed.
    #[error(transparent)]
    Write(#[from] GraphIoError),
    /// Reading or parsing a graph file failed.
    #[error(transparent)]
    Read(#[from] ReadError),
    /// A parsed graph broke an invariant.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Stable machine-readable code of the underlying error, when it has one.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Generator(err) => Some(err.code().as_str()),
            Self::Write(err) => Some(err.code().as_str()),
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Read(ReadError::Io(err)) => Some(err.code().as_str()),
            Self::Read(ReadError::Format(err)) => Some(err.code().as_str()),
            Self::Read(_) => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// A graph was generated and written.
    Generated {
        /// File the graph was written to.
        output: PathBuf,
        /// Vertex count.
        num_vertices: usize,
        /// Edge count.
        num_edges: usize,
        /// Seed that reproduces the graph.
        seed: u64,
    },
    /// A graph file passed verification.
    Verified {
        /// File that was checked.
        path: PathBuf,
        /// Vertex count from the header.
        num_vertices: usize,
        /// Edge count.
        num_edges: usize,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when validation, generation, or file I/O fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randigraph_cli::cli::{Cli, Command, ExecutionSummary, GenerateCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output = dir.path().join("graph.txt");
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         num_vertices: 3,
///         num_edges: 3,
///         weight_range: 5,
///         output: output.clone(),
///         seed: Some(1),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(matches!(summary, ExecutionSummary::Generated { num_edges: 3, .. }));
/// assert!(std::fs::read_to_string(&output)?.starts_with("3 3\n"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(command)
        }
        Command::Verify(command) => {
            span.record("command", field::display("verify"));
            run_verify(command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        num_vertices = command.num_vertices,
        num_edges = command.num_edges,
        weight_range = command.weight_range,
        output = field::Empty,
        seed = field::Empty,
    ),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let GenerateCommand {
        num_vertices,
        num_edges,
        weight_range,
        output,
        seed,
    } = command;
    let span = Span::current();
    span.record("output", field::display(output.display()));

    let mut builder = GeneratorBuilder::new()
        .with_num_vertices(num_vertices)
        .with_num_edges(num_edges)
        .with_weight_range(weight_range);
    if let Some(value) = seed {
        builder = builder.with_seed(value);
    }
    let generator = builder.build()?;

    let generation = generator.generate();
    span.record("seed", generation.seed);
    write_graph_file(&generation.graph, &output)?;

    info!(
        output = %output.display(),
        seed = generation.seed,
        attempts = generation.stats.attempts,
        "command completed"
    );
    Ok(ExecutionSummary::Generated {
        output,
        num_vertices: generation.graph.num_vertices(),
        num_edges: generation.graph.num_edges(),
        seed: generation.seed,
    })
}

#[instrument(
    name = "cli.verify",
    err,
    skip(command),
    fields(path = field::Empty, weight_range = field::Empty),
)]
pub(super) fn run_verify(command: VerifyCommand) -> Result<ExecutionSummary, CliError> {
    let VerifyCommand { path, weight_range } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    if let Some(bound) = weight_range {
        span.record("weight_range", bound);
    }

    let graph = read_graph_file(&path)?.verify(weight_range)?;

    info!(
        path = %path.display(),
        num_vertices = graph.num_vertices(),
        num_edges = graph.num_edges(),
        "command completed"
    );
    Ok(ExecutionSummary::Verified {
        path,
        num_vertices: graph.num_vertices(),
        num_edges: graph.num_edges(),
    })
}

/// Renders `summary` to `writer` as a one-line confirmation.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use randigraph_cli::cli::{ExecutionSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Generated {
///     output: PathBuf::from("graph5.txt"),
///     num_vertices: 50_000,
///     num_edges: 80_000,
///     seed: 9,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "Graph with 50000 vertices and 80000 edges saved to graph5.txt.\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated {
            output,
            num_vertices,
            num_edges,
            ..
        } => writeln!(
            writer,
            "Graph with {num_vertices} vertices and {num_edges} edges saved to {}.",
            output.display()
        ),
        ExecutionSummary::Verified {
            path,
            num_vertices,
            num_edges,
        } => writeln!(
            writer,
            "{}: {num_vertices} vertices, {num_edges} edges, ok",
            path.display()
        ),
    }
}
