//! Error types for the checked graph operations.

use thiserror::Error;

/// Errors reported by the checked graph APIs.
///
/// The core operations never fail: unknown vertices there just mean empty results.
/// Vertices are rendered with their `Debug` form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex was never added to the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// An edge points to a vertex the graph does not know.
    #[error("Edge {from} -> {to} points to an unknown vertex")]
    DanglingEdge { from: String, to: String },

    /// An undirected edge lacks its reverse twin.
    #[error("Edge {from} -> {to} has no mirrored edge")]
    MissingMirror { from: String, to: String },
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, GraphError>;
