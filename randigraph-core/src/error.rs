//! Error types for the randigraph core library.
//!
//! Each concern gets its own enum: configuration validation, file I/O, text
//! parsing, and graph invariant checks. Every enum exposes a stable
//! machine-readable code so the CLI can log failures consistently.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::edge::Edge;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Invalid generator configuration, detected before any sampling begins.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// The graph must contain at least one vertex.
    #[error("num_vertices must be at least 1 (got 0)")]
    ZeroVertices,
    /// Weights are drawn from `[1, weight_range]`, so the bound must be positive.
    #[error("weight_range must be at least 1 (got 0)")]
    ZeroWeightRange,
    /// `num_vertices * (num_vertices - 1)` does not fit in `usize`.
    #[error("maximum edge count for {num_vertices} vertices overflows usize")]
    Overflow {
        /// Vertex count that triggered the overflow.
        num_vertices: usize,
    },
    /// More edges were requested than distinct directed edges exist.
    #[error(
        "too many edges: requested {requested} but {num_vertices} vertices allow at most {max}"
    )]
    TooManyEdges {
        /// Number of edges requested by the caller.
        requested: usize,
        /// Number of vertices in the graph.
        num_vertices: usize,
        /// Maximum number of directed edges without self-loops.
        max: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The graph must contain at least one vertex.
        ZeroVertices => ZeroVertices => "GENERATOR_ZERO_VERTICES",
        /// The weight bound must be positive.
        ZeroWeightRange => ZeroWeightRange => "GENERATOR_ZERO_WEIGHT_RANGE",
        /// The maximum edge count overflowed.
        Overflow => Overflow { .. } => "GENERATOR_OVERFLOW",
        /// More edges were requested than the vertex count permits.
        TooManyEdges => TooManyEdges { .. } => "GENERATOR_INVALID_CONFIGURATION",
    }
}

/// Filesystem failure while persisting a graph.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphIoError {
    /// The destination file could not be created or truncated.
    #[error("failed to create `{path}`: {source}")]
    Create {
        /// Destination path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing or flushing the destination file failed.
    #[error("failed to write `{path}`: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The source file could not be opened for reading.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Source path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphIoError`] variants.
    enum GraphIoErrorCode for GraphIoError {
        /// The destination file could not be created.
        Create => Create { .. } => "GRAPH_IO_CREATE",
        /// Writing the destination file failed.
        Write => Write { .. } => "GRAPH_IO_WRITE",
        /// The source file could not be opened.
        Open => Open { .. } => "GRAPH_IO_OPEN",
    }
}

/// The text did not follow the graph file layout.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FormatError {
    /// The input ended before the header line.
    #[error("missing header line")]
    MissingHeader,
    /// A line had the wrong number of whitespace-separated fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of fields the line must contain.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },
    /// A field was not a base-10 unsigned integer.
    #[error("line {line}: `{value}` is not a valid unsigned integer")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        value: String,
    },
    /// Fewer edge lines were present than the header announced.
    #[error("header announces {expected} edges but only {found} edge lines are present")]
    MissingEdges {
        /// Edge count from the header.
        expected: usize,
        /// Edge lines actually read.
        found: usize,
    },
    /// Non-blank content followed the last announced edge line.
    #[error("line {line}: unexpected content after the last edge")]
    TrailingContent {
        /// 1-based line number of the first extra line.
        line: usize,
    },
    /// Reading from the underlying stream failed.
    #[error("failed to read graph data: {source}")]
    Io {
        /// Underlying read failure.
        #[from]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`FormatError`] variants.
    enum FormatErrorCode for FormatError {
        /// The header line is missing.
        MissingHeader => MissingHeader => "FORMAT_MISSING_HEADER",
        /// A line had the wrong number of fields.
        FieldCount => FieldCount { .. } => "FORMAT_FIELD_COUNT",
        /// A field was not an unsigned integer.
        InvalidInteger => InvalidInteger { .. } => "FORMAT_INVALID_INTEGER",
        /// Fewer edges than announced.
        MissingEdges => MissingEdges { .. } => "FORMAT_MISSING_EDGES",
        /// Content after the last edge.
        TrailingContent => TrailingContent { .. } => "FORMAT_TRAILING_CONTENT",
        /// The stream could not be read.
        Io => Io { .. } => "FORMAT_IO",
    }
}

/// An edge list violated one of the graph invariants.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An endpoint was outside `[0, num_vertices)`.
    #[error("edge {edge} references a vertex outside [0, {num_vertices})")]
    VertexOutOfRange {
        /// Offending edge.
        edge: Edge,
        /// Vertex count of the graph.
        num_vertices: usize,
    },
    /// The edge connects a vertex to itself.
    #[error("edge {edge} is a self-loop")]
    SelfLoop {
        /// Offending edge.
        edge: Edge,
    },
    /// Another edge already uses the same endpoint pair.
    #[error("edge {edge} duplicates an earlier edge with the same endpoints")]
    DuplicateEdge {
        /// Offending edge.
        edge: Edge,
    },
    /// The weight was zero.
    #[error("edge {edge} has weight 0; weights start at 1")]
    ZeroWeight {
        /// Offending edge.
        edge: Edge,
    },
    /// The weight was above the configured bound.
    #[error("edge {edge} has a weight above {weight_range}")]
    WeightOutOfRange {
        /// Offending edge.
        edge: Edge,
        /// Inclusive upper bound the weight was checked against.
        weight_range: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Vertex identifier out of range.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Self-loop.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// Duplicate endpoint pair.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// Zero weight.
        ZeroWeight => ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
        /// Weight above the bound.
        WeightOutOfRange => WeightOutOfRange { .. } => "GRAPH_WEIGHT_OUT_OF_RANGE",
    }
}

/// Failure while loading a graph file from disk.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened.
    #[error(transparent)]
    Io(#[from] GraphIoError),
    /// The file contents were malformed.
    #[error(transparent)]
    Format(#[from] FormatError),
}
