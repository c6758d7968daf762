use crate::error::GraphError;
use crate::types::{EdgeId, NodeId, Weight};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    start_node: NodeId,
    end_node: NodeId,
    weight: Weight,
}

impl GraphEdge {
    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Opposite endpoint of the edge when entered from `node`.
    pub fn adj_node(&self, node: NodeId) -> NodeId {
        if self.start_node == node {
            self.end_node
        } else {
            self.start_node
        }
    }
}

/// Undirected weighted road graph.
///
/// The node count is fixed at construction. Every edge is stored once and
/// referenced from the adjacency list of both endpoints, so a self-loop shows
/// up twice in its node's list. Parallel edges are kept as inserted.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: usize,
    edges: Vec<GraphEdge>,
    adjacency_list: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new(nodes: usize) -> Self {
        Graph {
            nodes,
            edges: Vec::new(),
            adjacency_list: vec![vec![]; nodes],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, stopping at the first
    /// invalid edge.
    pub fn from_edges(nodes: usize, edges: &[(NodeId, NodeId, i64)]) -> Result<Self, GraphError> {
        let mut graph = Graph::new(nodes);
        graph.edges.reserve(edges.len());

        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }

        Ok(graph)
    }

    /// Inserts an undirected edge. Nothing is mutated when validation fails.
    pub fn add_edge(&mut self, from_node: NodeId, to_node: NodeId, weight: i64) -> Result<(), GraphError> {
        self.check_node(from_node)?;
        self.check_node(to_node)?;

        let weight = Weight::try_from(weight).map_err(|_| GraphError::NegativeWeight {
            from: from_node,
            to: to_node,
            weight,
        })?;

        let edge_id = self.edges.len();
        self.edges.push(GraphEdge {
            start_node: from_node,
            end_node: to_node,
            weight,
        });
        self.adjacency_list[from_node].push(edge_id);
        self.adjacency_list[to_node].push(edge_id);

        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node < self.nodes
    }

    pub fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                node,
                node_count: self.nodes,
            })
        }
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&GraphEdge> {
        self.edges.get(edge)
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_edges(&self, node: NodeId) -> Result<&[EdgeId], GraphError> {
        self.check_node(node)?;
        Ok(&self.adjacency_list[node])
    }

    /// `(neighbor, weight)` pairs of `node` in insertion order.
    pub fn neighbors(
        &self,
        node: NodeId,
    ) -> Result<impl Iterator<Item = (NodeId, Weight)> + '_, GraphError> {
        self.check_node(node)?;
        Ok(self.adjacent(node))
    }

    /// Unchecked variant of [`Graph::neighbors`] for searches that only
    /// reach nodes through stored edges.
    pub(crate) fn adjacent(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.adjacency_list[node].iter().map(move |&edge_id| {
            let edge = &self.edges[edge_id];
            (edge.adj_node(node), edge.weight)
        })
    }
}
