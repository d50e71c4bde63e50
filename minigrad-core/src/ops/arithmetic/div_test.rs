use crate::autograd::Graph;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let mut graph = Graph::<f64>::new();
    let a = graph.scalar(3.0);
    let b = graph.scalar(4.0);
    let c = graph.div(a, b).unwrap();
    assert_relative_eq!(graph.value(c).unwrap(), 0.75);
}

#[test]
fn test_div_backward() {
    // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
    let mut graph = Graph::<f64>::new();
    let a = graph.scalar(3.0);
    let b = graph.scalar(4.0);
    let c = graph.div(a, b).unwrap();
    graph.backward(c).unwrap();
    assert_relative_eq!(graph.grad(a).unwrap(), 0.25);
    assert_relative_eq!(graph.grad(b).unwrap(), -3.0 / 16.0);
}

#[test]
fn test_div_by_constant() {
    let mut graph = Graph::<f64>::new();
    let a = graph.scalar(9.0);
    let c = graph.div(a, 2.0).unwrap();
    graph.backward(c).unwrap();
    assert_relative_eq!(graph.value(c).unwrap(), 4.5);
    assert_relative_eq!(graph.grad(a).unwrap(), 0.5);
}

#[test]
fn test_div_by_zero_is_infinite() {
    let mut graph = Graph::<f64>::new();
    let a = graph.scalar(1.0);
    let b = graph.scalar(0.0);
    let c = graph.div(a, b).unwrap();
    assert!(graph.value(c).unwrap().is_infinite());
}
