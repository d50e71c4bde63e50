use crate::autograd::backward_op::Op;
use crate::error::MinigradError;
use crate::ops::traits::Numeric;
use log::debug;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

// Unique id generator for graphs, so that ids from one arena are rejected by another.
static GRAPH_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_graph_id() -> usize {
    GRAPH_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Handle to a node stored in a [`Graph`].
///
/// A `NodeId` is a plain, copyable index into the arena of the graph that created it.
/// It does not keep the node alive and is only meaningful for that graph.
/// It also records the arena generation it was created in, so an id whose node was
/// discarded by [`Graph::rewind`] is rejected even after its slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    graph: usize,
    index: usize,
    generation: usize,
}

impl NodeId {
    /// Position of the node in its graph's arena.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Id of the graph that created this node.
    pub fn graph(&self) -> usize {
        self.graph
    }

    /// Arena generation the node was created in; bumped by every rewind that
    /// discards nodes.
    pub fn generation(&self) -> usize {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}:{})", self.graph, self.index)
    }
}

/// An argument to a graph operation: either an existing node or a literal
/// that gets promoted to a fresh leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T> {
    Node(NodeId),
    Constant(T),
}

impl<T> From<NodeId> for Operand<T> {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl<T> From<&NodeId> for Operand<T> {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<f64> for Operand<f64> {
    fn from(value: f64) -> Self {
        Operand::Constant(value)
    }
}

impl From<f32> for Operand<f32> {
    fn from(value: f32) -> Self {
        Operand::Constant(value)
    }
}

/// Marks the arena length at some point in time; see [`Graph::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    graph: usize,
    len: usize,
}

impl Checkpoint {
    /// Number of nodes that survive a rewind to this checkpoint.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A scalar value in the computation graph together with its accumulated gradient
/// and the operation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) grad: T,
    pub(crate) op: Op<T>,
    generation: usize,
}

impl<T: Numeric> Node<T> {
    pub fn value(&self) -> T {
        self.value
    }

    pub fn grad(&self) -> T {
        self.grad
    }

    pub fn op(&self) -> &Op<T> {
        &self.op
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_leaf()
    }

    pub fn operands(&self) -> Vec<NodeId> {
        self.op.operands()
    }
}

impl<T: Numeric> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.value, self.grad)
    }
}

/// Arena owning every node of a dynamic computation graph.
///
/// Operations append exactly one node and reference their operands by [`NodeId`].
/// Operands are always created before the node using them, so the graph is a DAG
/// by construction. Gradients accumulate across backward passes until the caller
/// resets them with [`Graph::zero_grad`] or [`Graph::zero_grad_nodes`].
#[derive(Debug)]
pub struct Graph<T: Numeric = f64> {
    id: usize,
    generation: usize,
    pub(crate) nodes: Vec<Node<T>>,
}

impl<T: Numeric> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> Graph<T> {
    pub fn new() -> Self {
        Self {
            id: next_graph_id(),
            generation: 0,
            nodes: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: next_graph_id(),
            generation: 0,
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf node holding `value`.
    pub fn scalar(&mut self, value: T) -> NodeId {
        self.push(value, Op::Leaf)
    }

    pub(crate) fn push(&mut self, value: T, op: Op<T>) -> NodeId {
        let id = NodeId {
            graph: self.id,
            index: self.nodes.len(),
            generation: self.generation,
        };
        self.nodes.push(Node {
            value,
            grad: T::zero(),
            op,
            generation: self.generation,
        });
        id
    }

    /// Validates `id` against this arena and returns its index.
    pub(crate) fn index_of(&self, id: NodeId) -> Result<usize, MinigradError> {
        if id.graph != self.id {
            return Err(MinigradError::ForeignNode { id, graph: self.id });
        }
        if id.index >= self.nodes.len() {
            return Err(MinigradError::NodeNotFound {
                id,
                len: self.nodes.len(),
            });
        }
        if self.nodes[id.index].generation != id.generation {
            return Err(MinigradError::StaleNode { id });
        }
        Ok(id.index)
    }

    /// Value of a node already validated by `index_of`.
    pub(crate) fn value_at(&self, id: NodeId) -> T {
        self.nodes[id.index].value
    }

    pub(crate) fn check_operand(&self, operand: &Operand<T>) -> Result<(), MinigradError> {
        match operand {
            Operand::Node(id) => self.index_of(*id).map(|_| ()),
            Operand::Constant(_) => Ok(()),
        }
    }

    /// Turns an operand into a node id, promoting constants to new leaves.
    pub(crate) fn resolve(&mut self, operand: Operand<T>) -> Result<NodeId, MinigradError> {
        match operand {
            Operand::Node(id) => {
                self.index_of(id)?;
                Ok(id)
            }
            Operand::Constant(value) => Ok(self.scalar(value)),
        }
    }

    /// Resolves two operands, validating both before any constant is promoted.
    pub(crate) fn resolve_pair(
        &mut self,
        a: Operand<T>,
        b: Operand<T>,
    ) -> Result<(NodeId, NodeId), MinigradError> {
        self.check_operand(&a)?;
        self.check_operand(&b)?;
        Ok((self.resolve(a)?, self.resolve(b)?))
    }

    pub fn node(&self, id: NodeId) -> Result<&Node<T>, MinigradError> {
        let index = self.index_of(id)?;
        Ok(&self.nodes[index])
    }

    pub fn value(&self, id: NodeId) -> Result<T, MinigradError> {
        self.node(id).map(Node::value)
    }

    pub fn grad(&self, id: NodeId) -> Result<T, MinigradError> {
        self.node(id).map(Node::grad)
    }

    pub fn op(&self, id: NodeId) -> Result<&Op<T>, MinigradError> {
        self.node(id).map(Node::op)
    }

    pub fn operands(&self, id: NodeId) -> Result<Vec<NodeId>, MinigradError> {
        self.node(id).map(Node::operands)
    }

    /// Overwrites the value of a leaf node, e.g. a parameter updated by an optimizer.
    ///
    /// Nodes produced by operations keep the value computed at creation time.
    pub fn set_value(&mut self, id: NodeId, value: T) -> Result<(), MinigradError> {
        let index = self.index_of(id)?;
        let node = &mut self.nodes[index];
        if !node.is_leaf() {
            return Err(MinigradError::NotALeaf { id });
        }
        node.value = value;
        Ok(())
    }

    /// Resets the gradient of every node in the graph to zero.
    pub fn zero_grad(&mut self) {
        for node in self.nodes.iter_mut() {
            node.grad = T::zero();
        }
    }

    /// Resets the gradient of the listed nodes to zero.
    ///
    /// All ids are validated first; on error no gradient is touched.
    pub fn zero_grad_nodes(&mut self, ids: &[NodeId]) -> Result<(), MinigradError> {
        let indices = ids
            .iter()
            .map(|id| self.index_of(*id))
            .collect::<Result<Vec<_>, _>>()?;
        for index in indices {
            self.nodes[index].grad = T::zero();
        }
        Ok(())
    }

    /// Records the current arena length.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            graph: self.id,
            len: self.nodes.len(),
        }
    }

    /// Discards every node created after `checkpoint`.
    ///
    /// Surviving nodes never reference discarded ones, since operands always precede
    /// their users. Ids of discarded nodes are invalid afterwards: they fail with
    /// `NodeNotFound` while their slot is empty and with `StaleNode` once a newer
    /// node occupies it.
    pub fn rewind(&mut self, checkpoint: Checkpoint) -> Result<(), MinigradError> {
        if checkpoint.graph != self.id {
            return Err(MinigradError::InvalidConfiguration(format!(
                "checkpoint belongs to graph #{}, not #{}",
                checkpoint.graph, self.id
            )));
        }
        if checkpoint.len < self.nodes.len() {
            debug!(
                "Graph #{}: rewinding {} -> {} nodes",
                self.id,
                self.nodes.len(),
                checkpoint.len
            );
            self.nodes.truncate(checkpoint.len);
            self.generation += 1;
        }
        Ok(())
    }

    /// Iterates over all nodes with their ids, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> + '_ {
        let graph = self.id;
        self.nodes.iter().enumerate().map(move |(index, node)| {
            let id = NodeId {
                graph,
                index,
                generation: node.generation,
            };
            (id, node)
        })
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
