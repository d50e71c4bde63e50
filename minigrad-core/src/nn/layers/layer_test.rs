use crate::autograd::Graph;
use crate::error::MinigradError;
use crate::nn::init::{xavier_limit, Init};
use crate::nn::layers::{Layer, Neuron};
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_layer_creation_uses_xavier_bounds() {
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(3);
    let layer = Layer::new(
        &mut graph,
        3,
        4,
        true,
        Init::XavierUniform,
        Init::Zeros,
        &mut rng,
    )
    .unwrap();

    assert_eq!(layer.input_dim(), 3);
    assert_eq!(layer.output_dim(), 4);
    assert_eq!(layer.num_parameters(), 4 * (3 + 1));

    let limit = xavier_limit(3, 4);
    for neuron in layer.neurons() {
        assert!(neuron.is_nonlinear());
        for w in neuron.weights() {
            assert!(w.value(&graph).unwrap().abs() <= limit);
        }
        assert_eq!(neuron.bias().value(&graph).unwrap(), 0.0);
    }
}

#[test]
fn test_layer_forward_one_output_per_neuron() {
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(0);
    let layer = Layer::new(
        &mut graph,
        2,
        3,
        false,
        Init::Constant(1.0),
        Init::Constant(0.5),
        &mut rng,
    )
    .unwrap();
    let x0 = graph.scalar(1.0);
    let x1 = graph.scalar(-2.0);
    let outs = layer.forward(&mut graph, &[x0, x1]).unwrap();
    assert_eq!(outs.len(), 3);
    for out in &outs {
        assert_relative_eq!(graph.value(*out).unwrap(), 0.5 + 1.0 - 2.0);
    }
}

#[test]
fn test_single_neuron_layer_still_returns_vec() {
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(0);
    let layer = Layer::new(
        &mut graph,
        1,
        1,
        true,
        Init::Constant(1.0),
        Init::Zeros,
        &mut rng,
    )
    .unwrap();
    let x = graph.scalar(0.5);
    assert_eq!(layer.forward(&mut graph, &[x]).unwrap().len(), 1);
}

#[test]
fn test_shared_input_receives_gradient_from_every_neuron() {
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(0);
    let layer = Layer::new(
        &mut graph,
        1,
        3,
        false,
        Init::Constant(2.0),
        Init::Zeros,
        &mut rng,
    )
    .unwrap();
    let x = graph.scalar(1.0);
    let outs = layer.forward(&mut graph, &[x]).unwrap();
    let s = graph.add(outs[0], outs[1]).unwrap();
    let total = graph.add(s, outs[2]).unwrap();
    graph.backward(total).unwrap();
    assert_relative_eq!(graph.grad(x).unwrap(), 6.0);
}

#[test]
fn test_layer_parameters_in_neuron_order() {
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(11);
    let layer = Layer::new(
        &mut graph,
        2,
        2,
        true,
        Init::XavierUniform,
        Init::Zeros,
        &mut rng,
    )
    .unwrap();
    let expected: Vec<Parameter> = layer
        .neurons()
        .iter()
        .flat_map(|n| n.parameters())
        .collect();
    assert_eq!(layer.parameters(), expected);

    let names: Vec<String> = layer.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec![
            "neurons.0.weight.0",
            "neurons.0.weight.1",
            "neurons.0.bias",
            "neurons.1.weight.0",
            "neurons.1.weight.1",
            "neurons.1.bias",
        ]
    );
}

#[test]
fn test_layer_rejects_zero_neurons() {
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Layer::new(&mut graph, 2, 0, true, Init::XavierUniform, Init::Zeros, &mut rng),
        Err(MinigradError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_layer_from_neurons_checks_dimensions() {
    let mut graph = Graph::<f64>::new();
    let a = Neuron::from_parameters(
        vec![Parameter::new(&mut graph, 1.0)],
        Parameter::new(&mut graph, 0.0),
        true,
    );
    let b = Neuron::from_parameters(
        vec![Parameter::new(&mut graph, 1.0), Parameter::new(&mut graph, 1.0)],
        Parameter::new(&mut graph, 0.0),
        true,
    );
    assert_eq!(
        Layer::from_neurons(vec![a.clone(), b]).unwrap_err(),
        MinigradError::DimensionMismatch { expected: 1, actual: 2 }
    );
    assert!(Layer::from_neurons(Vec::new()).is_err());
    assert_eq!(Layer::from_neurons(vec![a]).unwrap().input_dim(), 1);
}
