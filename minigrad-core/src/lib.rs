// Declares the main modules of the crate
pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod utils;

// Re-exports so that the common types are reachable as `minigrad_core::Graph` etc.
pub use autograd::{check_grad, Checkpoint, GradCheckError, Graph, Node, NodeId, Op, Operand};
pub use error::MinigradError;
pub use model::{Network, NetworkConfig, NetworkOutput};
pub use nn::{Init, Layer, Module, Neuron, Parameter};
pub use ops::traits::Numeric;
// Re-export traits required by public functions/structs
pub use num_traits;
