use crate::autograd::{Graph, NodeId};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;
use log::{debug, warn};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient mismatch for input {input_index}: {analytical_grad} vs {numerical_grad}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Non-finite numerical gradient for input {input_index}: {loss_plus} / {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Gradient check input {input_index} must be a leaf node")]
    InputNotLeaf { input_index: usize },

    #[error("Invalid gradient check settings: {0}")]
    InvalidSettings(String),

    #[error("Graph error during gradient check: {0}")]
    Graph(#[from] MinigradError),
}

/// Checks analytical gradients against centered finite differences.
///
/// `func` rebuilds the expression from the current values of `inputs` and returns
/// its output node. For every input `x`, the numerical gradient
/// `(f(x + eps) - f(x - eps)) / (2 eps)` must match the gradient produced by a
/// backward pass within `tolerance` (absolute or relative).
///
/// All nodes created by `func` are discarded again and input values are restored,
/// also when `func` or a backward pass fails. The gradients of nodes that existed
/// before the call are reset to zero.
pub fn check_grad<T, F>(
    graph: &mut Graph<T>,
    inputs: &[NodeId],
    func: F,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: Numeric,
    F: Fn(&mut Graph<T>) -> Result<NodeId, MinigradError>,
{
    if !(epsilon > 0.0) || !(tolerance > 0.0) {
        return Err(GradCheckError::InvalidSettings(format!(
            "epsilon and tolerance must be positive, got {} and {}",
            epsilon, tolerance
        )));
    }
    for (i, id) in inputs.iter().enumerate() {
        if !graph.node(*id)?.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }
    let eps = T::from_literal(epsilon).ok_or_else(|| {
        GradCheckError::InvalidSettings(format!("epsilon {} is not representable", epsilon))
    })?;
    let mark = graph.checkpoint();

    // --- 1. Analytical gradients ---
    graph.zero_grad();
    let analytical = analytical_grads(graph, inputs, &func);
    graph.rewind(mark)?;
    graph.zero_grad();
    let analytical = analytical?;

    // --- 2. Numerical gradients ---
    let evaluate = |graph: &mut Graph<T>, id: NodeId, value: T| -> Result<f64, GradCheckError> {
        // Rewinds before propagating any error from `func`.
        graph.set_value(id, value)?;
        let result = func(graph).and_then(|output| graph.value(output));
        graph.rewind(mark)?;
        Ok(to_f64(result?))
    };

    for (i, id) in inputs.iter().enumerate() {
        let original = graph.value(*id)?;
        let loss_plus = evaluate(graph, *id, original + eps);
        let loss_minus = evaluate(graph, *id, original - eps);
        graph.set_value(*id, original)?;
        let (loss_plus, loss_minus) = (loss_plus?, loss_minus?);

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        let analytical = to_f64(analytical[i]);
        let close = approx::abs_diff_eq!(analytical, numerical, epsilon = tolerance)
            || approx::relative_eq!(analytical, numerical, max_relative = tolerance);
        if !close {
            warn!(
                "check_grad: input {} analytical={} numerical={}",
                i, analytical, numerical
            );
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }
    debug!("check_grad: {} inputs passed", inputs.len());
    Ok(())
}

// Forward and backward once; the caller rewinds whatever this leaves behind.
fn analytical_grads<T, F>(
    graph: &mut Graph<T>,
    inputs: &[NodeId],
    func: &F,
) -> Result<Vec<T>, MinigradError>
where
    T: Numeric,
    F: Fn(&mut Graph<T>) -> Result<NodeId, MinigradError>,
{
    let output = func(graph)?;
    graph.backward(output)?;
    inputs.iter().map(|id| graph.grad(*id)).collect()
}

fn to_f64<T: Numeric>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
