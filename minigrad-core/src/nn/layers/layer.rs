use crate::autograd::{Graph, NodeId};
use crate::error::MinigradError;
use crate::nn::init::Init;
use crate::nn::layers::Neuron;
use crate::nn::module::{prefixed, Module};
use crate::nn::parameter::Parameter;
use crate::ops::traits::Numeric;
use log::debug;
use rand::Rng;

/// A fully connected layer: `nout` neurons, each seeing the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `nout` neurons with `nin` inputs each.
    ///
    /// Initializers see `fan_in = nin` and `fan_out = nout`.
    pub fn new<T: Numeric, R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        nin: usize,
        nout: usize,
        nonlinear: bool,
        weight_init: Init,
        bias_init: Init,
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        if nout == 0 {
            return Err(MinigradError::InvalidConfiguration(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let mut neurons = Vec::with_capacity(nout);
        for _ in 0..nout {
            neurons.push(Neuron::with_fans(
                graph,
                nin,
                nout,
                nonlinear,
                weight_init,
                bias_init,
                rng,
            )?);
        }
        debug!(
            "Layer: {} -> {} ({}), {} parameters",
            nin,
            nout,
            if nonlinear { "tanh" } else { "linear" },
            nout * (nin + 1)
        );
        Ok(Layer { neurons })
    }

    /// Assembles a layer from existing neurons.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `neurons` is empty, `DimensionMismatch` if the
    /// neurons do not share the same input dimension.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, MinigradError> {
        let first = neurons.first().ok_or_else(|| {
            MinigradError::InvalidConfiguration("a layer needs at least one neuron".to_string())
        })?;
        let nin = first.input_dim();
        if let Some(other) = neurons.iter().find(|n| n.input_dim() != nin) {
            return Err(MinigradError::DimensionMismatch {
                expected: nin,
                actual: other.input_dim(),
            });
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn input_dim(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::input_dim)
    }

    pub fn output_dim(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Output = Vec<NodeId>;

    fn forward<T: Numeric>(
        &self,
        graph: &mut Graph<T>,
        inputs: &[NodeId],
    ) -> Result<Vec<NodeId>, MinigradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
