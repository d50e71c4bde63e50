// minigrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::{Graph, NodeId, Op, Operand};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;

impl<T: Numeric> Graph<T> {
    /// `base ** exponent` for a fixed exponent.
    ///
    /// Backward: `dbase += exponent * base^(exponent - 1) * grad`.
    ///
    /// # Errors
    /// `InvalidExponent` if `exponent` is a graph node: differentiating with respect
    /// to the exponent is not supported. The graph is left unchanged in that case.
    pub fn pow(
        &mut self,
        base: impl Into<Operand<T>>,
        exponent: impl Into<Operand<T>>,
    ) -> Result<NodeId, MinigradError> {
        let exponent = match exponent.into() {
            Operand::Constant(k) => k,
            Operand::Node(id) => return Err(MinigradError::InvalidExponent { exponent: id }),
        };
        let base = self.resolve(base.into())?;
        let value = self.value_at(base).powf(exponent);
        Ok(self.push(value, Op::Pow { base, exponent }))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
