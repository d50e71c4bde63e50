//! # Scalar Operations Module (`ops`)
//!
//! Differentiable scalar operations on a [`Graph`](crate::autograd::Graph).
//!
//! ## Structure:
//!
//! - Each operation is an inherent method on `Graph<T>` defined in its own file.
//!   It validates its operands, appends exactly one node tagged with an
//!   [`Op`](crate::autograd::Op) and returns the new [`NodeId`](crate::autograd::NodeId).
//!   Literal constants are promoted to leaf nodes first.
//! - The chain rule for each tag lives in
//!   [`backward_op`](crate::autograd::backward_op), next to the tag definitions.
//! - Composite operations (`neg`, `sub`, `div`) are expressed through the primitives
//!   and inherit their gradients.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow, div.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh.
//! - [`traits`]: the [`Numeric`](traits::Numeric) bound on stored values.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod traits;
