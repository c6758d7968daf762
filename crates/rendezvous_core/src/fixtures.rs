//! Reference city graph shared by the CLI demo, tests and benchmarks.

use crate::graph::Graph;
use crate::types::NodeId;

/// Six-node city map used by the demo. Node 2 is the hub between the
/// driver at 0 and the chain 3 - 4 - 5.
pub const CITY_EDGES: [(NodeId, NodeId, i64); 7] = [
    (0, 1, 4),
    (0, 2, 2),
    (2, 1, 1),
    (1, 3, 7),
    (2, 3, 3),
    (3, 4, 2),
    (4, 5, 3),
];

pub const CITY_NODES: usize = 6;

pub const CITY_DRIVER: NodeId = 0;

pub const CITY_PASSENGERS: [NodeId; 5] = [1, 2, 3, 4, 5];

pub fn city_graph() -> Graph {
    let mut graph = Graph::new(CITY_NODES);
    for (from, to, weight) in CITY_EDGES {
        graph
            .add_edge(from, to, weight)
            .expect("city fixture edges are valid");
    }
    graph
}
