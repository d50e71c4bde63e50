// minigrad-core/src/ops/activation/tanh.rs

use crate::autograd::{Graph, NodeId, Op, Operand};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;

impl<T: Numeric> Graph<T> {
    /// Hyperbolic tangent, computed directly as a single node.
    ///
    /// Backward: `da += (1 - out^2) * grad`.
    pub fn tanh(&mut self, a: impl Into<Operand<T>>) -> Result<NodeId, MinigradError> {
        let a = self.resolve(a.into())?;
        let value = self.value_at(a).tanh();
        Ok(self.push(value, Op::Tanh(a)))
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
