// minigrad-core/src/ops/arithmetic/sub.rs

use crate::autograd::{Graph, NodeId, Operand};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;

impl<T: Numeric> Graph<T> {
    /// `a - b`, recorded as `a + (-b)`.
    pub fn sub(
        &mut self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, MinigradError> {
        let a = a.into();
        self.check_operand(&a)?;
        let neg_b = self.neg(b)?;
        self.add(a, neg_b)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
