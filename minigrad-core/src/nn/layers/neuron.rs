use crate::autograd::{Graph, NodeId};
use crate::error::MinigradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::traits::Numeric;
use rand::Rng;

/// A single unit computing `bias + sum(w_i * x_i)`, optionally followed by tanh.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn from `weight_init` and a bias from `bias_init`.
    ///
    /// Initializers see `fan_in = nin` and `fan_out = 1`; see [`Neuron::with_fans`].
    pub fn new<T: Numeric, R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        nin: usize,
        nonlinear: bool,
        weight_init: Init,
        bias_init: Init,
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        Self::with_fans(graph, nin, 1, nonlinear, weight_init, bias_init, rng)
    }

    /// Like [`Neuron::new`] but with an explicit `fan_out` for the initializers,
    /// as used by a layer of `fan_out` neurons.
    pub fn with_fans<T: Numeric, R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        nin: usize,
        fan_out: usize,
        nonlinear: bool,
        weight_init: Init,
        bias_init: Init,
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        weight_init.validate()?;
        bias_init.validate()?;
        let mut weights = Vec::with_capacity(nin);
        for _ in 0..nin {
            let value = weight_init.sample_as::<T, R>(nin, fan_out, rng)?;
            weights.push(Parameter::new(graph, value));
        }
        let bias = Parameter::new(graph, bias_init.sample_as::<T, R>(nin, fan_out, rng)?);
        Ok(Neuron {
            weights,
            bias,
            nonlinear,
        })
    }

    /// Assembles a neuron from existing parameters.
    pub fn from_parameters(weights: Vec<Parameter>, bias: Parameter, nonlinear: bool) -> Self {
        Neuron {
            weights,
            bias,
            nonlinear,
        }
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> Parameter {
        self.bias
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }

    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    type Output = NodeId;

    fn forward<T: Numeric>(
        &self,
        graph: &mut Graph<T>,
        inputs: &[NodeId],
    ) -> Result<NodeId, MinigradError> {
        if inputs.len() != self.weights.len() {
            return Err(MinigradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        for input in inputs {
            graph.node(*input)?;
        }

        // w * x + b, accumulated starting from the bias
        let mut act = self.bias.node();
        for (weight, input) in self.weights.iter().zip(inputs) {
            let wx = graph.mul(weight, input)?;
            act = graph.add(act, wx)?;
        }
        if self.nonlinear {
            graph.tanh(act)
        } else {
            Ok(act)
        }
    }

    /// Weights followed by the bias.
    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut params: Vec<(String, Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), *w))
            .collect();
        params.push(("bias".to_string(), self.bias));
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
