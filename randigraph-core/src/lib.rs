//! Random directed weighted graph generation.
//!
//! [`GeneratorBuilder`] validates a request, [`Generator`] produces a
//! [`Graph`] by rejection sampling, and the [`write_graph`] and
//! [`read_graph`] functions move graphs to and from the plain-text layout:
//!
//! ```text
//! <num_vertices> <num_edges>
//! <source> <destination> <weight>
//! ...
//! ```

mod builder;
mod edge;
mod error;
mod format;
mod generator;
mod graph;

pub use crate::{
    builder::{DEFAULT_NUM_EDGES, DEFAULT_NUM_VERTICES, DEFAULT_WEIGHT_RANGE, GeneratorBuilder},
    edge::{Edge, EdgeSet},
    error::{
        FormatError, FormatErrorCode, GeneratorError, GeneratorErrorCode, GraphError,
        GraphErrorCode, GraphIoError, GraphIoErrorCode, ReadError,
    },
    format::{ParsedGraph, read_graph, read_graph_file, write_graph, write_graph_file},
    generator::{Generation, GenerationStats, Generator},
    graph::Graph,
};
