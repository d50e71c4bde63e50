use crate::autograd::{Graph, NodeId};
use crate::error::MinigradError;
use crate::nn::init::Init;
use crate::nn::layers::Layer;
use crate::nn::module::{prefixed, Module};
use crate::nn::parameter::Parameter;
use crate::ops::traits::Numeric;
use log::debug;
use rand::Rng;

/// Shape and initialization of a [`Network`].
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    /// Number of inputs fed to the first layer.
    pub input_dim: usize,
    /// Neuron count of every layer after the input, in order.
    pub layer_sizes: Vec<usize>,
    pub weight_init: Init,
    pub bias_init: Init,
}

impl NetworkConfig {
    /// Xavier-uniform weights and zero biases.
    pub fn new(input_dim: usize, layer_sizes: Vec<usize>) -> Self {
        NetworkConfig {
            input_dim,
            layer_sizes,
            weight_init: Init::XavierUniform,
            bias_init: Init::Zeros,
        }
    }

    pub fn with_weight_init(mut self, init: Init) -> Self {
        self.weight_init = init;
        self
    }

    pub fn with_bias_init(mut self, init: Init) -> Self {
        self.bias_init = init;
        self
    }

    pub fn validate(&self) -> Result<(), MinigradError> {
        if self.input_dim == 0 {
            return Err(MinigradError::InvalidConfiguration(
                "input dimension must be at least 1".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(MinigradError::InvalidConfiguration(
                "a network needs at least one layer".to_string(),
            ));
        }
        if let Some(i) = self.layer_sizes.iter().position(|&n| n == 0) {
            return Err(MinigradError::InvalidConfiguration(format!(
                "layer {} has no neurons",
                i
            )));
        }
        self.weight_init.validate()?;
        self.bias_init.validate()
    }
}

/// Result of a network forward pass.
///
/// A final layer with a single neuron yields a `Scalar`; anything wider a `Vector`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkOutput {
    Scalar(NodeId),
    Vector(Vec<NodeId>),
}

impl NetworkOutput {
    pub fn as_scalar(&self) -> Option<NodeId> {
        match self {
            NetworkOutput::Scalar(id) => Some(*id),
            NetworkOutput::Vector(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NetworkOutput::Scalar(_) => 1,
            NetworkOutput::Vector(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<NodeId> {
        match self {
            NetworkOutput::Scalar(id) => vec![id],
            NetworkOutput::Vector(ids) => ids,
        }
    }
}

/// A multi-layer perceptron.
///
/// Every layer applies tanh except the last, whose outputs are the raw
/// weighted sums.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    pub fn new<T: Numeric, R: Rng + ?Sized>(
        graph: &mut Graph<T>,
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Self, MinigradError> {
        config.validate()?;
        let sizes: Vec<usize> = std::iter::once(config.input_dim)
            .chain(config.layer_sizes.iter().copied())
            .collect();
        let last = config.layer_sizes.len() - 1;

        let mut layers = Vec::with_capacity(config.layer_sizes.len());
        for (i, pair) in sizes.windows(2).enumerate() {
            layers.push(Layer::new(
                graph,
                pair[0],
                pair[1],
                i != last,
                config.weight_init,
                config.bias_init,
                rng,
            )?);
        }
        let network = Network { layers };
        debug!(
            "Network: sizes {:?}, {} parameters",
            sizes,
            network.num_parameters()
        );
        Ok(network)
    }

    /// Assembles a network from existing layers.
    ///
    /// The caller is responsible for the nonlinearity of each layer.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `layers` is empty, `DimensionMismatch` if a layer's
    /// input dimension differs from the previous layer's output dimension.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, MinigradError> {
        if layers.is_empty() {
            return Err(MinigradError::InvalidConfiguration(
                "a network needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[0].output_dim() != pair[1].input_dim() {
                return Err(MinigradError::DimensionMismatch {
                    expected: pair[0].output_dim(),
                    actual: pair[1].input_dim(),
                });
            }
        }
        Ok(Network { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_dim(&self) -> usize {
        self.layers.first().map_or(0, Layer::input_dim)
    }

    pub fn output_dim(&self) -> usize {
        self.layers.last().map_or(0, Layer::output_dim)
    }

    /// Promotes `values` to leaf nodes and runs [`Module::forward`] on them.
    pub fn forward_values<T: Numeric>(
        &self,
        graph: &mut Graph<T>,
        values: &[T],
    ) -> Result<NetworkOutput, MinigradError> {
        if values.len() != self.input_dim() {
            return Err(MinigradError::DimensionMismatch {
                expected: self.input_dim(),
                actual: values.len(),
            });
        }
        let inputs: Vec<NodeId> = values.iter().map(|v| graph.scalar(*v)).collect();
        self.forward(graph, &inputs)
    }
}

impl Module for Network {
    type Output = NetworkOutput;

    fn forward<T: Numeric>(
        &self,
        graph: &mut Graph<T>,
        inputs: &[NodeId],
    ) -> Result<NetworkOutput, MinigradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        if current.len() == 1 {
            Ok(NetworkOutput::Scalar(current[0]))
        } else {
            Ok(NetworkOutput::Vector(current))
        }
    }

    fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
