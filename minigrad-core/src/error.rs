use crate::autograd::NodeId;
use thiserror::Error;

/// Custom error type for the minigrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MinigradError {
    /// `pow` only differentiates with respect to its base; the exponent must be a fixed number.
    #[error("Invalid exponent: expected a fixed number, got graph node {exponent}")]
    InvalidExponent { exponent: NodeId },

    #[error("Node {id} not found: graph holds {len} nodes")]
    NodeNotFound { id: NodeId, len: usize },

    #[error("Node {id} was discarded by a rewind and its slot now holds another node")]
    StaleNode { id: NodeId },

    #[error("Node {id} belongs to another graph (this graph is #{graph})")]
    ForeignNode { id: NodeId, graph: usize },

    #[error("Node {id} is not a leaf; only leaf values can be overwritten")]
    NotALeaf { id: NodeId },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
