//! Arithmetic graph operations, implemented as methods on [`Graph`](crate::autograd::Graph).
//!
//! `add`, `mul` and `pow` record their own [`Op`](crate::autograd::Op) tag;
//! `neg`, `sub` and `div` are compositions of them.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;
