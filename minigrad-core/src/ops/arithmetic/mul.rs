// minigrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::{Graph, NodeId, Op, Operand};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;

impl<T: Numeric> Graph<T> {
    /// `a * b`.
    ///
    /// Backward: `da += b * grad`, `db += a * grad`.
    pub fn mul(
        &mut self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, MinigradError> {
        let (a, b) = self.resolve_pair(a.into(), b.into())?;
        let value = self.value_at(a) * self.value_at(b);
        Ok(self.push(value, Op::Mul(a, b)))
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
