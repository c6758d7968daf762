use std::ops::Index;

use serde::Serialize;

use crate::error::GraphError;
use crate::types::{NodeId, Weight};

/// Result of a single-source query: one entry per node, `None` when the node
/// cannot be reached from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distances {
    source: NodeId,
    weights: Vec<Option<Weight>>,
}

impl Distances {
    pub(crate) fn new(source: NodeId, weights: Vec<Option<Weight>>) -> Self {
        Distances { source, weights }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `node`, `Ok(None)` when it is unreachable.
    pub fn get(&self, node: NodeId) -> Result<Option<Weight>, GraphError> {
        self.weights
            .get(node)
            .copied()
            .ok_or(GraphError::InvalidNode {
                node,
                node_count: self.weights.len(),
            })
    }

    pub fn is_reachable(&self, node: NodeId) -> Result<bool, GraphError> {
        Ok(self.get(node)?.is_some())
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<Weight>)> + '_ {
        self.weights.iter().copied().enumerate()
    }

    pub fn as_slice(&self) -> &[Option<Weight>] {
        &self.weights
    }

    pub fn into_vec(self) -> Vec<Option<Weight>> {
        self.weights
    }
}

/// Panics when `node` is out of range, use [`Distances::get`] for a checked
/// lookup.
impl Index<NodeId> for Distances {
    type Output = Option<Weight>;

    fn index(&self, node: NodeId) -> &Self::Output {
        &self.weights[node]
    }
}
