// minigrad-core/src/ops/math_elem/exp.rs

use crate::autograd::{Graph, NodeId, Op, Operand};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;

impl<T: Numeric> Graph<T> {
    /// `e^a`.
    ///
    /// Backward: `da += out * grad`, reusing the forward value.
    /// Overflow yields `inf` rather than an error.
    pub fn exp(&mut self, a: impl Into<Operand<T>>) -> Result<NodeId, MinigradError> {
        let a = self.resolve(a.into())?;
        let value = self.value_at(a).exp();
        Ok(self.push(value, Op::Exp(a)))
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
