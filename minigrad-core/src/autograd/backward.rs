use crate::autograd::{Graph, NodeId};
use crate::error::MinigradError;
use crate::ops::traits::Numeric;
use log::{debug, trace, warn};

impl<T: Numeric> Graph<T> {
    /// Returns the nodes reachable from `root` in topological order.
    ///
    /// Post-order depth-first traversal with a visited set: every reachable node
    /// appears exactly once, after all of its operands. `root` is always last.
    pub fn topological_order(&self, root: NodeId) -> Result<Vec<NodeId>, MinigradError> {
        self.index_of(root)?;

        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        // (node, operands_pushed)
        let mut stack = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            if visited[id.index()] {
                continue;
            }
            visited[id.index()] = true;
            stack.push((id, true));
            // Reversed so that the first operand is visited first.
            for operand in self.nodes[id.index()].op.operands().into_iter().rev() {
                if !visited[operand.index()] {
                    stack.push((operand, false));
                }
            }
        }
        Ok(order)
    }

    /// Back-propagates from `root`, accumulating `d root / d node` into the gradient
    /// of every node reachable from it.
    ///
    /// The root's gradient is seeded to one; no other gradient is reset, so callers
    /// must zero gradients (see [`Graph::zero_grad`]) between passes.
    pub fn backward(&mut self, root: NodeId) -> Result<(), MinigradError> {
        let root_index = self.index_of(root)?;
        let order = self.topological_order(root)?;
        let graph_id = self.id();
        debug!(
            "Graph #{}: backward from {} over {} nodes",
            graph_id,
            root,
            order.len()
        );

        let seed = &mut self.nodes[root_index].grad;
        if !seed.is_zero() {
            warn!(
                "Graph #{}: root {} already had gradient {}; overwriting with the seed",
                graph_id,
                root,
                seed
            );
        }
        *seed = T::one();

        for id in order.iter().rev() {
            let node = &self.nodes[id.index()];
            if node.is_leaf() {
                continue;
            }
            trace!("backward: {} ({}) grad={}", id, node.op, node.grad);
            let contributions = node
                .op
                .local_gradients(node.value, node.grad, |operand| self.value_at(operand));
            for (operand, delta) in contributions {
                self.nodes[operand.index()].grad += delta;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
