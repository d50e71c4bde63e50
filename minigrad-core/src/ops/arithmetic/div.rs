// minigrad-core/src/ops/arithmetic/div.rs

use crate::autograd::{Graph, NodeId, Operand};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;

impl<T: Numeric> Graph<T> {
    /// `a / b`, recorded as `a * b**-1`.
    ///
    /// Division by zero is not trapped; it yields IEEE infinities/NaN.
    pub fn div(
        &mut self,
        a: impl Into<Operand<T>>,
        b: impl Into<Operand<T>>,
    ) -> Result<NodeId, MinigradError> {
        let a = a.into();
        self.check_operand(&a)?;
        let inv_b = self.pow(b, Operand::Constant(-T::one()))?;
        self.mul(a, inv_b)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
