use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::routing::distances::Distances;
use crate::types::{NodeId, Weight};

#[derive(Eq, Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    weight: Weight,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.weight == other.weight && self.node_id == other.node_id
    }
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Single-source shortest distances over a [`Graph`].
///
/// The heap has no decrease-key: an improved node is pushed again and the
/// outdated entry is dropped when popped. The heap allocation is kept between
/// queries so one instance can serve many sources.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
}

impl Dijkstra {
    pub fn new(graph: &Graph) -> Self {
        Dijkstra {
            heap: BinaryHeap::with_capacity(graph.node_count()),
        }
    }

    pub fn calc_distances(&mut self, graph: &Graph, source: NodeId) -> Result<Distances, GraphError> {
        graph.check_node(source)?;
        Ok(self.search(graph, source))
    }

    /// `source` must be a node of `graph`.
    pub(crate) fn search(&mut self, graph: &Graph, source: NodeId) -> Distances {
        self.heap.clear();

        let mut weights: Vec<Option<Weight>> = vec![None; graph.node_count()];
        weights[source] = Some(0);
        self.heap.push(HeapItem {
            node_id: source,
            weight: 0,
        });

        let mut iterations = 0;
        let mut stale_entries = 0;

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            // A shorter weight was recorded after this entry was pushed
            if weights[node_id].is_some_and(|best| weight > best) {
                stale_entries += 1;
                continue;
            }

            iterations += 1;

            for (adj_node, edge_weight) in graph.adjacent(node_id) {
                let next_weight = weight.saturating_add(edge_weight);

                if weights[adj_node].is_none_or(|current| next_weight < current) {
                    trace!(node_id, adj_node, next_weight, "relaxed");
                    weights[adj_node] = Some(next_weight);
                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        weight: next_weight,
                    });
                }
            }
        }

        let distances = Distances::new(source, weights);

        debug!(
            source,
            iterations,
            stale_entries,
            reachable = distances.iter().filter(|(_, weight)| weight.is_some()).count(),
            "Dijkstra finished"
        );

        distances
    }
}

/// Distances from `source` to every node of `graph`.
///
/// Path weights saturate at [`Weight::MAX`], see [`Weight`].
pub fn shortest_distances(graph: &Graph, source: NodeId) -> Result<Distances, GraphError> {
    Dijkstra::new(graph).calc_distances(graph, source)
}
