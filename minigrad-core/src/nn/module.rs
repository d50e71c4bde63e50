use crate::autograd::{Graph, NodeId};
use crate::error::MinigradError;
use crate::nn::Parameter;
use crate::ops::traits::Numeric;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module owns parameter nodes living in a [`Graph`] and builds new nodes in
/// that same graph on every forward pass.
pub trait Module: std::fmt::Debug {
    /// What a forward pass produces (a single node, or one node per output).
    type Output;

    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `graph`: The graph holding the module's parameters; new nodes are appended to it.
    /// * `inputs`: Input nodes, one per input dimension.
    ///
    /// # Returns
    /// The output node(s), or a `MinigradError` if the inputs do not match the
    /// module's input dimension or do not belong to `graph`.
    fn forward<T: Numeric>(
        &self,
        graph: &mut Graph<T>,
        inputs: &[NodeId],
    ) -> Result<Self::Output, MinigradError>;

    /// Returns all learnable parameters of the module, including those of sub-modules,
    /// in a stable order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. "layers.0.neurons.1.weight.2").
    fn named_parameters(&self) -> Vec<(String, Parameter)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to zero.
    ///
    /// Gradients accumulate across backward passes, so this must be called before
    /// each new forward/backward cycle.
    fn zero_grad<T: Numeric>(&self, graph: &mut Graph<T>) -> Result<(), MinigradError> {
        let ids: Vec<NodeId> = self.parameters().iter().map(Parameter::node).collect();
        graph.zero_grad_nodes(&ids)
    }
}

/// Prefixes the names of a child's parameters with `prefix.`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Parameter)>) -> Vec<(String, Parameter)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}", prefix, name), param))
        .collect()
}
