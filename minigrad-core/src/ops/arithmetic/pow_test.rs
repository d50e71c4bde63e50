use crate::autograd::{Graph, Op};
use crate::error::MinigradError;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let mut graph = Graph::<f64>::new();
    let a = graph.scalar(2.0);
    let cube = graph.pow(a, 3.0).unwrap();
    let root = graph.pow(a, 0.5).unwrap();
    assert_eq!(graph.value(cube).unwrap(), 8.0);
    assert_relative_eq!(graph.value(root).unwrap(), 2.0_f64.sqrt());
    assert_eq!(graph.op(cube).unwrap(), &Op::Pow { base: a, exponent: 3.0 });
    assert_eq!(graph.op(cube).unwrap().to_string(), "**3");
}

#[test]
fn test_pow_backward_matches_power_rule() {
    for &(x, k) in &[(2.0, 3.0), (3.0, 2.0), (4.0, 0.5), (1.5, -1.0), (-2.0, 2.0), (0.7, -2.5)] {
        let mut graph = Graph::<f64>::new();
        let a = graph.scalar(x);
        let y = graph.pow(a, k).unwrap();
        graph.backward(y).unwrap();
        let expected: f64 = k * f64::powf(x, k - 1.0);
        assert_relative_eq!(graph.grad(a).unwrap(), expected, max_relative = 1e-12);
    }
}

#[test]
fn test_pow_node_exponent_is_rejected() {
    let mut graph = Graph::<f64>::new();
    let a = graph.scalar(2.0);
    let k = graph.scalar(3.0);
    let len_before = graph.len();

    let result = graph.pow(a, k);
    assert_eq!(result, Err(MinigradError::InvalidExponent { exponent: k }));
    assert_eq!(graph.len(), len_before);
    assert_eq!(graph.grad(a).unwrap(), 0.0);
    assert_eq!(graph.grad(k).unwrap(), 0.0);
}

#[test]
fn test_pow_node_exponent_rejected_before_promoting_base() {
    let mut graph = Graph::<f64>::new();
    let k = graph.scalar(3.0);
    let result = graph.pow(2.0, k);
    assert!(matches!(result, Err(MinigradError::InvalidExponent { .. })));
    assert_eq!(graph.len(), 1);
}

#[test]
fn test_pow_f32() {
    let mut graph = Graph::<f32>::new();
    let a = graph.scalar(3.0);
    let y = graph.pow(a, 2.0f32).unwrap();
    graph.backward(y).unwrap();
    assert_relative_eq!(graph.value(y).unwrap(), 9.0f32);
    assert_relative_eq!(graph.grad(a).unwrap(), 6.0f32);
}
