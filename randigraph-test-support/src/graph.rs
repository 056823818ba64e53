//! Assertions over graph file text.
//!
//! These work on the raw text rather than on `randigraph-core` types so the
//! core crate can use them from its own tests.

use std::collections::HashSet;

/// One `<source> <destination> <weight>` line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EdgeLine {
    /// Source vertex.
    pub source: u64,
    /// Destination vertex.
    pub destination: u64,
    /// Edge weight.
    pub weight: u64,
}

/// Asserts that `text` is a well-formed graph file for the given counts and
/// weight bound, returning its edge lines.
///
/// Checks the header, the exact number of edge lines, single-space field
/// separators, the trailing newline, in-range vertices, no self-loops, no
/// repeated endpoint pairs, and weights in `[1, weight_range]`.
///
/// # Panics
/// Panics with a description of the first violation.
///
/// # Examples
/// ```
/// use randigraph_test_support::graph::assert_graph_text;
///
/// let edges = assert_graph_text("3 2\n0 1 5\n1 0 2\n", 3, 2, 5);
/// assert_eq!(edges.len(), 2);
/// ```
#[must_use]
pub fn assert_graph_text(
    text: &str,
    num_vertices: u64,
    num_edges: usize,
    weight_range: u64,
) -> Vec<EdgeLine> {
    assert!(text.ends_with('\n'), "graph text must end with a newline");
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();
    assert_eq!(
        header,
        format!("{num_vertices} {num_edges}"),
        "header must announce the vertex and edge counts"
    );

    let edges: Vec<EdgeLine> = lines.map(parse_edge_line).collect();
    assert_eq!(edges.len(), num_edges, "edge line count must match the header");

    let mut pairs = HashSet::new();
    for edge in &edges {
        assert!(
            edge.source < num_vertices && edge.destination < num_vertices,
            "vertex out of range in {edge:?}"
        );
        assert_ne!(edge.source, edge.destination, "self-loop {edge:?}");
        assert!(
            (1..=weight_range).contains(&edge.weight),
            "weight out of range in {edge:?}"
        );
        assert!(
            pairs.insert((edge.source, edge.destination)),
            "duplicate endpoints in {edge:?}"
        );
    }
    edges
}

fn parse_edge_line(line: &str) -> EdgeLine {
    let fields: Vec<u64> = line
        .split(' ')
        .map(|field| match field.parse() {
            Ok(value) => value,
            Err(err) => panic!("invalid field {field:?} in line {line:?}: {err}"),
        })
        .collect();
    match fields.as_slice() {
        [source, destination, weight] => EdgeLine {
            source: *source,
            destination: *destination,
            weight: *weight,
        },
        _ => panic!("edge line must hold exactly three fields: {line:?}"),
    }
}
