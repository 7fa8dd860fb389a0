use std::{io, path::PathBuf};

use thiserror::Error;

use crate::indexes::VertexId;

/// Enumeration of all the possible errors.
#[derive(Debug, Error)]
pub enum KgCoreError {
    /// Error when the hypergraph source file couldn't be opened.
    #[error("Hypergraph source {path:?} couldn't be opened")]
    InputOpen {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Error when a vertex is not part of the hypergraph.
    #[error("Vertex {0} was not found")]
    UnknownVertex(VertexId),

    /// Error when an internal invariant of the index machinery is broken.
    /// This is a bug, never a user condition.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// Error when an index snapshot couldn't be serialized.
    #[error("Index snapshot couldn't be serialized")]
    Serialization,

    /// Error when an index snapshot couldn't be deserialized.
    #[error("Index snapshot couldn't be deserialized")]
    Deserialization,

    /// Any other I/O failure, propagated unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),
}
