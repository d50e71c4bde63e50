use crate::autograd::NodeId;
use crate::ops::traits::Numeric;
use std::fmt;

/// The operation that produced a node, together with its operands.
///
/// The tag replaces a captured backward closure: the backward engine dispatches
/// on it to apply the chain rule of the operation. Negation, subtraction and
/// division are built from these primitives and have no tag of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T> {
    /// Input, parameter or promoted constant.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// `base ** exponent` with a fixed exponent.
    Pow { base: NodeId, exponent: T },
    Exp(NodeId),
    Tanh(NodeId),
}

impl<T: Numeric> Op<T> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Operand ids in operand order (0, 1 or 2 entries).
    pub fn operands(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow { base, .. } => vec![base],
            Op::Exp(a) | Op::Tanh(a) => vec![a],
        }
    }

    /// Applies the local chain rule.
    ///
    /// Given the forward value `out` and accumulated gradient `grad` of the node
    /// this op produced, returns the contribution to add to each operand's gradient,
    /// in operand order. `value_of` reads an operand's forward value.
    pub(crate) fn local_gradients<F>(&self, out: T, grad: T, value_of: F) -> Vec<(NodeId, T)>
    where
        F: Fn(NodeId) -> T,
    {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) => vec![(a, grad), (b, grad)],
            Op::Mul(a, b) => vec![(a, value_of(b) * grad), (b, value_of(a) * grad)],
            Op::Pow { base, exponent } => {
                let local = exponent * value_of(base).powf(exponent - T::one());
                vec![(base, local * grad)]
            }
            Op::Exp(a) => vec![(a, out * grad)],
            Op::Tanh(a) => vec![(a, (T::one() - out * out) * grad)],
        }
    }
}

impl<T: fmt::Display> fmt::Display for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add(..) => write!(f, "+"),
            Op::Mul(..) => write!(f, "*"),
            Op::Pow { exponent, .. } => write!(f, "**{}", exponent),
            Op::Exp(_) => write!(f, "exp"),
            Op::Tanh(_) => write!(f, "tanh"),
        }
    }
}
