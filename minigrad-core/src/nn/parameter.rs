use crate::autograd::{Graph, NodeId, Operand};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;
use std::fmt;
use std::ops::Deref;

/// A leaf node of a [`Graph`] marked as a learnable parameter of a module.
///
/// Trainability is a property of the holder, not of the node: a `Parameter` is
/// a plain [`NodeId`] that modules hand out through `parameters()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter(NodeId);

impl Parameter {
    /// Creates a new leaf in `graph` holding `value` and wraps it.
    pub fn new<T: Numeric>(graph: &mut Graph<T>, value: T) -> Self {
        Parameter(graph.scalar(value))
    }

    /// Wraps an existing leaf node.
    ///
    /// # Errors
    /// `NotALeaf` if `id` was produced by an operation.
    pub fn from_leaf<T: Numeric>(graph: &Graph<T>, id: NodeId) -> Result<Self, MinigradError> {
        if graph.node(id)?.is_leaf() {
            Ok(Parameter(id))
        } else {
            Err(MinigradError::NotALeaf { id })
        }
    }

    pub fn node(&self) -> NodeId {
        self.0
    }

    pub fn value<T: Numeric>(&self, graph: &Graph<T>) -> Result<T, MinigradError> {
        graph.value(self.0)
    }

    pub fn grad<T: Numeric>(&self, graph: &Graph<T>) -> Result<T, MinigradError> {
        graph.grad(self.0)
    }

    pub fn set_value<T: Numeric>(
        &self,
        graph: &mut Graph<T>,
        value: T,
    ) -> Result<(), MinigradError> {
        graph.set_value(self.0, value)
    }
}

// Allow using a Parameter wherever a NodeId is expected.
impl Deref for Parameter {
    type Target = NodeId;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({})", self.0)
    }
}

impl<T> From<Parameter> for Operand<T> {
    fn from(param: Parameter) -> Self {
        Operand::Node(param.0)
    }
}

impl<T> From<&Parameter> for Operand<T> {
    fn from(param: &Parameter) -> Self {
        Operand::Node(param.0)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
