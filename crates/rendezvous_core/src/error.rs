use thiserror::Error;

use crate::types::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {node} is out of range for a graph of {node_count} nodes")]
    InvalidNode { node: NodeId, node_count: usize },
    #[error("Edge ({from}, {to}) has a negative weight {weight}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: i64,
    },
}
