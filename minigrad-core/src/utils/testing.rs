use crate::autograd::{Graph, NodeId};
use crate::ops::traits::Numeric;

/// Checks that the values of `ids` are within `tolerance` of `expected`.
/// Panics with the first offending index otherwise.
pub fn check_values_near<T: Numeric>(
    graph: &Graph<T>,
    ids: &[NodeId],
    expected: &[T],
    tolerance: T,
) {
    assert_eq!(ids.len(), expected.len(), "Length mismatch");
    for (i, (id, e)) in ids.iter().zip(expected).enumerate() {
        let actual = graph.value(*id).expect("Invalid node in check_values_near");
        let diff = (actual - *e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Value mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}

/// Same as [`check_values_near`] for accumulated gradients.
pub fn check_grads_near<T: Numeric>(
    graph: &Graph<T>,
    ids: &[NodeId],
    expected: &[T],
    tolerance: T,
) {
    assert_eq!(ids.len(), expected.len(), "Length mismatch");
    for (i, (id, e)) in ids.iter().zip(expected).enumerate() {
        let actual = graph.grad(*id).expect("Invalid node in check_grads_near");
        let diff = (actual - *e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tol={:?}",
                i, actual, e, diff, tolerance
            );
        }
    }
}
