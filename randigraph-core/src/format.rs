//! Plain-text graph file codec.
//!
//! The layout is a header line `<num_vertices> <num_edges>` followed by
//! exactly `num_edges` lines of `<source> <destination> <weight>`. Fields are
//! base-10 integers separated by single spaces, each line ends in `\n`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::{Span, field, info, instrument};

use crate::{
    edge::{Edge, MAX_PREALLOCATED_EDGES},
    error::{FormatError, GraphError, GraphIoError, ReadError},
    graph::Graph,
};

/// Writes `graph` to `writer` in the graph file layout.
///
/// Edges are written in [`crate::EdgeSet`] iteration order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use randigraph_core::{Edge, Graph, write_graph};
///
/// let graph = Graph::from_edges(3, [Edge::new(0, 1, 4), Edge::new(2, 0, 1)])?;
/// let mut buffer = Vec::new();
/// write_graph(&graph, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "3 2\n0 1 4\n2 0 1\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_graph(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{} {}", graph.num_vertices(), graph.num_edges())?;
    for edge in graph.edges() {
        writeln!(writer, "{} {} {}", edge.source, edge.destination, edge.weight)?;
    }
    Ok(())
}

/// Creates or truncates `path` and writes `graph` to it.
///
/// A failure part-way through leaves a truncated file behind.
///
/// # Errors
/// Returns [`GraphIoError::Create`] when the file cannot be opened for writing
/// and [`GraphIoError::Write`] when writing or flushing fails.
#[instrument(
    name = "format.write_graph_file",
    err,
    skip(graph),
    fields(path = field::Empty, num_vertices = graph.num_vertices(), num_edges = graph.num_edges()),
)]
pub fn write_graph_file(graph: &Graph, path: &Path) -> Result<(), GraphIoError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::create(path).map_err(|source| GraphIoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_graph(graph, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| GraphIoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "graph written");
    Ok(())
}

/// A graph file decoded without checking graph invariants.
///
/// Convert it with [`ParsedGraph::into_graph`] to validate the edges.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedGraph {
    /// Vertex count from the header.
    pub num_vertices: usize,
    /// Edge lines in file order.
    pub edges: Vec<Edge>,
}

impl ParsedGraph {
    /// Validates the edges and builds a [`Graph`].
    ///
    /// # Errors
    /// Returns [`GraphError`] for the first edge that breaks an invariant.
    pub fn into_graph(self) -> Result<Graph, GraphError> {
        Graph::from_edges(self.num_vertices, self.edges)
    }

    /// Validates the edges and, when `weight_range` is given, checks every
    /// weight against it.
    ///
    /// # Errors
    /// Returns [`GraphError`] for the first edge that breaks an invariant.
    ///
    /// # Examples
    /// ```
    /// use randigraph_core::read_graph;
    ///
    /// let parsed = read_graph("2 1\n0 1 9\n".as_bytes())?;
    /// assert!(parsed.clone().verify(None).is_ok());
    /// assert!(parsed.verify(Some(5)).is_err());
    /// # Ok::<(), randigraph_core::FormatError>(())
    /// ```
    pub fn verify(self, weight_range: Option<u64>) -> Result<Graph, GraphError> {
        let graph = self.into_graph()?;
        if let Some(bound) = weight_range {
            graph.check_weights(bound)?;
        }
        Ok(graph)
    }
}

/// Reads a graph file from `reader`.
///
/// Parsing is strict: the header must hold two integers, each of the
/// announced edge lines must hold three, fields are unsigned base-10 digits
/// separated by single spaces, and only blank lines may follow the last edge. Graph invariants are not checked here.
///
/// # Errors
/// Returns [`FormatError`] describing the first malformed line.
///
/// # Examples
/// ```
/// use randigraph_core::{Edge, read_graph};
///
/// let parsed = read_graph("3 1\n2 0 9\n".as_bytes())?;
/// assert_eq!(parsed.num_vertices, 3);
/// assert_eq!(parsed.edges, vec![Edge::new(2, 0, 9)]);
/// # Ok::<(), randigraph_core::FormatError>(())
/// ```
pub fn read_graph(reader: impl BufRead) -> Result<ParsedGraph, FormatError> {
    let mut lines = reader.lines().enumerate().map(|(index, line)| (index + 1, line));

    let (header_line, header) = lines.next().ok_or(FormatError::MissingHeader)?;
    let [num_vertices, num_edges] = parse_fields::<usize, 2>(header_line, &header?)?;

    let mut edges = Vec::with_capacity(num_edges.min(MAX_PREALLOCATED_EDGES));
    while edges.len() < num_edges {
        let Some((number, line)) = lines.next() else {
            return Err(FormatError::MissingEdges {
                expected: num_edges,
                found: edges.len(),
            });
        };
        let [source, destination, weight] = parse_fields::<u64, 3>(number, &line?)?;
        edges.push(Edge::new(
            to_vertex(number, source)?,
            to_vertex(number, destination)?,
            weight,
        ));
    }

    for (number, line) in lines {
        if !line?.trim().is_empty() {
            return Err(FormatError::TrailingContent { line: number });
        }
    }

    Ok(ParsedGraph {
        num_vertices,
        edges,
    })
}

/// Opens `path` and reads a graph file from it.
///
/// # Errors
/// Returns [`ReadError::Io`] when the file cannot be opened and
/// [`ReadError::Format`] when its contents are malformed.
#[instrument(name = "format.read_graph_file", err, fields(path = field::Empty))]
pub fn read_graph_file(path: &Path) -> Result<ParsedGraph, ReadError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| GraphIoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = read_graph(BufReader::new(file))?;
    info!(
        num_vertices = parsed.num_vertices,
        num_edges = parsed.edges.len(),
        "graph file parsed"
    );
    Ok(parsed)
}

fn to_vertex(line: usize, value: u64) -> Result<usize, FormatError> {
    usize::try_from(value).map_err(|_| FormatError::InvalidInteger {
        line,
        value: value.to_string(),
    })
}

fn parse_fields<T, const N: usize>(line: usize, text: &str) -> Result<[T; N], FormatError>
where
    T: FromStr + Copy + Default,
{
    let tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() != N {
        return Err(FormatError::FieldCount {
            line,
            expected: N,
            found: tokens.len(),
        });
    }
    let mut values = [T::default(); N];
    for (slot, token) in values.iter_mut().zip(tokens) {
        let invalid = || FormatError::InvalidInteger {
            line,
            value: token.to_owned(),
        };
        if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = token.parse().map_err(|_| invalid())?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn write_graph_emits_header_only_for_empty_graph() -> TestResult {
        let graph = Graph::from_edges(5, Vec::<Edge>::new())?;
        let mut buffer = Vec::new();
        write_graph(&graph, &mut buffer)?;
        assert_eq!(String::from_utf8(buffer)?, "5 0\n");
        Ok(())
    }

    #[test]
    fn read_graph_preserves_written_edges() -> TestResult {
        let graph = Graph::from_edges(
            4,
            [Edge::new(3, 0, 12), Edge::new(0, 3, 1), Edge::new(1, 2, 100)],
        )?;
        let mut buffer = Vec::new();
        write_graph(&graph, &mut buffer)?;
        let parsed = read_graph(buffer.as_slice())?;
        assert_eq!(parsed.num_vertices, 4);
        assert_eq!(
            parsed.edges,
            graph.edges().iter().copied().collect::<Vec<_>>()
        );
        Ok(())
    }

    #[test]
    fn read_graph_tolerates_trailing_blank_lines_and_missing_newline() -> TestResult {
        let parsed = read_graph("2 1\n0 1 3".as_bytes())?;
        assert_eq!(parsed.edges, vec![Edge::new(0, 1, 3)]);
        let parsed = read_graph("2 1\n1 0 3\n\n  \n".as_bytes())?;
        assert_eq!(parsed.edges, vec![Edge::new(1, 0, 3)]);
        Ok(())
    }

    #[rstest]
    #[case::empty("", "FORMAT_MISSING_HEADER")]
    #[case::short_header("3\n", "FORMAT_FIELD_COUNT")]
    #[case::negative_header("-3 1\n", "FORMAT_INVALID_INTEGER")]
    #[case::short_edge("3 1\n0 1\n", "FORMAT_FIELD_COUNT")]
    #[case::long_edge("3 1\n0 1 2 3\n", "FORMAT_FIELD_COUNT")]
    #[case::text_weight("3 1\n0 1 heavy\n", "FORMAT_INVALID_INTEGER")]
    #[case::missing_edges("3 2\n0 1 2\n", "FORMAT_MISSING_EDGES")]
    #[case::trailing_edge("3 1\n0 1 2\n1 2 3\n", "FORMAT_TRAILING_CONTENT")]
    #[case::tab_separator("3 1\n0\t1 2\n", "FORMAT_FIELD_COUNT")]
    #[case::double_space("3 1\n0  1 2\n", "FORMAT_FIELD_COUNT")]
    #[case::leading_space("3 1\n 0 1 2\n", "FORMAT_FIELD_COUNT")]
    #[case::trailing_space("3 1 \n0 1 2\n", "FORMAT_FIELD_COUNT")]
    #[case::plus_sign("3 1\n+0 1 2\n", "FORMAT_INVALID_INTEGER")]
    #[case::plus_header("+3 1\n0 1 2\n", "FORMAT_INVALID_INTEGER")]
    fn read_graph_rejects_malformed_input(#[case] text: &str, #[case] code: &str) {
        let err = read_graph(text.as_bytes()).expect_err("input must be rejected");
        assert_eq!(err.code().as_str(), code);
    }

    #[test]
    fn read_graph_reports_line_numbers() {
        let err = read_graph("3 2\n0 1 2\n2 x 1\n".as_bytes()).expect_err("x is not a vertex");
        match err {
            FormatError::InvalidInteger { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parsed_graph_validation_catches_duplicates() -> TestResult {
        let parsed = read_graph("3 2\n0 1 2\n0 1 7\n".as_bytes())?;
        let err = parsed.into_graph().expect_err("duplicate must be rejected");
        assert_eq!(
            err,
            GraphError::DuplicateEdge {
                edge: Edge::new(0, 1, 7)
            }
        );
        Ok(())
    }

    #[test]
    fn write_graph_file_overwrites_existing_file() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("graph.txt");
        std::fs::write(&path, "stale contents that are longer than the graph\n")?;
        let graph = Graph::from_edges(2, [Edge::new(1, 0, 8)])?;
        write_graph_file(&graph, &path)?;
        assert_eq!(std::fs::read_to_string(&path)?, "2 1\n1 0 8\n");
        Ok(())
    }

    #[test]
    fn write_graph_file_reports_path_when_directory_is_missing() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("missing").join("graph.txt");
        let graph = Graph::from_edges(2, Vec::<Edge>::new())?;
        let err = write_graph_file(&graph, &path).expect_err("parent directory is missing");
        match err {
            GraphIoError::Create { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn read_graph_file_reports_missing_file() -> TestResult {
        let dir = TempDir::new()?;
        let err = read_graph_file(&dir.path().join("absent.txt")).expect_err("file is absent");
        assert!(matches!(err, ReadError::Io(GraphIoError::Open { .. })));
        Ok(())
    }
}
