use num_traits::{Float, NumAssignOps, NumOps};
use std::fmt::{Debug, Display};

/// Floating point types a [`Graph`](crate::autograd::Graph) can store.
///
/// `Float` already provides `zero()`, `one()`, `powf()`, `exp()`, `tanh()`
/// and the `NumCast` conversions used by the initializers.
pub trait Numeric:
    Float
    + NumAssignOps // AddAssign is what gradient accumulation relies on
    + NumOps
    + PartialOrd
    + Debug
    + Display
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Converts an `f64` literal into `Self`.
    ///
    /// Returns `None` if the value is not representable.
    fn from_literal(value: f64) -> Option<Self> {
        <Self as num_traits::NumCast>::from(value)
    }
}

impl Numeric for f32 {}
impl Numeric for f64 {}
