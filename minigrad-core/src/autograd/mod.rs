//! Dynamic computation graph and reverse-mode differentiation.
//!
//! Nodes live in a [`Graph`] arena and reference their operands by [`NodeId`].
//! Each node records an [`Op`] tag; [`Graph::backward`] orders the sub-graph
//! reachable from a root topologically and applies each tag's chain rule in
//! reverse order.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{Checkpoint, Graph, Node, NodeId, Operand};
