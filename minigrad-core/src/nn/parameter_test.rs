use crate::autograd::Graph;
use crate::error::MinigradError;
use crate::nn::parameter::Parameter;

#[test]
fn test_parameter_creation_is_leaf() {
    let mut graph = Graph::<f64>::new();
    let param = Parameter::new(&mut graph, 0.25);
    assert!(graph.node(param.node()).unwrap().is_leaf());
    assert_eq!(param.value(&graph).unwrap(), 0.25);
    assert_eq!(param.grad(&graph).unwrap(), 0.0);
}

#[test]
fn test_parameter_deref_to_node_id() {
    let mut graph = Graph::<f64>::new();
    let param = Parameter::new(&mut graph, 1.0);
    assert_eq!(param.index(), 0);
    assert_eq!(*param, param.node());
}

#[test]
fn test_parameter_as_operand() {
    let mut graph = Graph::<f64>::new();
    let w = Parameter::new(&mut graph, 3.0);
    let x = graph.scalar(2.0);
    let y = graph.mul(w, x).unwrap();
    graph.backward(y).unwrap();
    assert_eq!(w.grad(&graph).unwrap(), 2.0);
}

#[test]
fn test_parameter_from_leaf() {
    let mut graph = Graph::<f64>::new();
    let x = graph.scalar(1.0);
    let y = graph.exp(x).unwrap();
    assert_eq!(Parameter::from_leaf(&graph, x).unwrap().node(), x);
    assert_eq!(
        Parameter::from_leaf(&graph, y),
        Err(MinigradError::NotALeaf { id: y })
    );
}

#[test]
fn test_parameter_set_value() {
    let mut graph = Graph::<f64>::new();
    let param = Parameter::new(&mut graph, 1.0);
    param.set_value(&mut graph, -0.5).unwrap();
    assert_eq!(param.value(&graph).unwrap(), -0.5);
}

#[test]
fn test_parameter_debug() {
    let mut graph = Graph::<f64>::new();
    let param = Parameter::new(&mut graph, 1.0);
    assert_eq!(
        format!("{:?}", param),
        format!("Parameter(NodeId({}:0))", graph.id())
    );
}
