use std::ops::Index;

use serde::Serialize;

use crate::error::GraphError;
use crate::types::{NodeId, Weight};

/// Square matrix of shortest distances, `None` for unreachable pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMatrix {
    entries: Vec<Vec<Option<Weight>>>,
}

impl DistanceMatrix {
    pub fn new(nodes: usize) -> Self {
        DistanceMatrix {
            entries: vec![vec![None; nodes]; nodes],
        }
    }

    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if node < self.entries.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                node,
                node_count: self.entries.len(),
            })
        }
    }

    /// Distance from `source` to `target`, `Ok(None)` when unreachable.
    pub fn weight(&self, source: NodeId, target: NodeId) -> Result<Option<Weight>, GraphError> {
        self.check_node(source)?;
        self.check_node(target)?;
        Ok(self.entries[source][target])
    }

    pub fn row(&self, source: NodeId) -> Result<&[Option<Weight>], GraphError> {
        self.check_node(source)?;
        Ok(&self.entries[source])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Weight>]> {
        self.entries.iter().map(Vec::as_slice)
    }

    pub(crate) fn entry(&self, source: NodeId, target: NodeId) -> Option<Weight> {
        self.entries[source][target]
    }

    pub(crate) fn update_entry(&mut self, source: NodeId, target: NodeId, weight: Weight) {
        self.entries[source][target] = Some(weight);
    }

    pub(crate) fn set_row(&mut self, source: NodeId, row: Vec<Option<Weight>>) {
        self.entries[source] = row;
    }
}

/// Panics when either node is out of range, use [`DistanceMatrix::weight`]
/// for a checked lookup.
impl Index<(NodeId, NodeId)> for DistanceMatrix {
    type Output = Option<Weight>;

    fn index(&self, (source, target): (NodeId, NodeId)) -> &Self::Output {
        &self.entries[source][target]
    }
}
