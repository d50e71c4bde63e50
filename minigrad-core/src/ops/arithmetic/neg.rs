// minigrad-core/src/ops/arithmetic/neg.rs

use crate::autograd::{Graph, NodeId, Operand};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;

impl<T: Numeric> Graph<T> {
    /// `-a`, recorded as `a * -1`.
    pub fn neg(&mut self, a: impl Into<Operand<T>>) -> Result<NodeId, MinigradError> {
        self.mul(a, Operand::Constant(-T::one()))
    }
}

#[cfg(test)]
mod tests {
    use crate::autograd::{Graph, Op};

    #[test]
    fn test_neg_forward_and_backward() {
        let mut graph = Graph::<f64>::new();
        let a = graph.scalar(4.0);
        let n = graph.neg(a).unwrap();
        assert_eq!(graph.value(n).unwrap(), -4.0);
        assert!(matches!(graph.op(n).unwrap(), Op::Mul(lhs, _) if *lhs == a));

        graph.backward(n).unwrap();
        assert_eq!(graph.grad(a).unwrap(), -1.0);
    }

    #[test]
    fn test_double_negation() {
        let mut graph = Graph::<f64>::new();
        let a = graph.scalar(-2.5);
        let n = graph.neg(a).unwrap();
        let nn = graph.neg(n).unwrap();
        graph.backward(nn).unwrap();
        assert_eq!(graph.value(nn).unwrap(), -2.5);
        assert_eq!(graph.grad(a).unwrap(), 1.0);
    }
}
