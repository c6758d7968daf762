use serde::Serialize;
use tracing::debug;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::routing::dijkstra::shortest_distances;
use crate::types::{NodeId, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pickup {
    pub node: NodeId,
    pub cost: Weight,
}

/// Cheapest passenger node to reach from `driver`.
///
/// All candidates are scored from a single search rooted at the driver. On a
/// tie the candidate listed first wins. Returns `None` when `candidates` is
/// empty or none of them can be reached.
pub fn best_pickup(
    graph: &Graph,
    driver: NodeId,
    candidates: &[NodeId],
) -> Result<Option<Pickup>, GraphError> {
    graph.check_node(driver)?;
    for &candidate in candidates {
        graph.check_node(candidate)?;
    }

    if candidates.is_empty() {
        return Ok(None);
    }

    let distances = shortest_distances(graph, driver)?;

    let mut best: Option<Pickup> = None;
    for &candidate in candidates {
        let Some(cost) = distances.get(candidate)? else {
            continue;
        };

        if best.is_none_or(|pickup| cost < pickup.cost) {
            best = Some(Pickup {
                node: candidate,
                cost,
            });
        }
    }

    debug!(driver, candidates = candidates.len(), ?best, "Best pickup selected");

    Ok(best)
}
