use std::path::Path;

use anyhow::Context;
use rendezvous_core::{Graph, NodeId};
use serde::Deserialize;

#[derive(Deserialize)]
struct EdgeRecord {
    from: NodeId,
    to: NodeId,
    weight: i64,
}

/// JSON road map: a node count and an undirected edge list.
#[derive(Deserialize)]
pub struct GraphFile {
    nodes: usize,
    edges: Vec<EdgeRecord>,
}

impl GraphFile {
    pub fn into_graph(self) -> Result<Graph, anyhow::Error> {
        let edges: Vec<(NodeId, NodeId, i64)> = self
            .edges
            .iter()
            .map(|edge| (edge.from, edge.to, edge.weight))
            .collect();

        Ok(Graph::from_edges(self.nodes, &edges)?)
    }
}

pub fn read_graph(path: &Path) -> Result<Graph, anyhow::Error> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph file {}", path.display()))?;
    let file: GraphFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse graph file {}", path.display()))?;

    file.into_graph()
        .with_context(|| format!("Invalid graph in {}", path.display()))
}
