use tracing::debug;

use crate::graph::Graph;
use crate::stopwatch::Stopwatch;
use crate::types::Weight;

use super::{
    matrix::DistanceMatrix,
    matrix_algorithm::{MatrixAlgorithm, MatrixAlgorithmResult},
};

/// https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
///
/// O(V³) time and O(V²) memory, only meant for modest node counts. Path
/// weights saturate at [`Weight::MAX`] like the single-source search.
pub struct FloydWarshall;

impl FloydWarshall {
    fn init_matrix(graph: &Graph) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::new(graph.node_count());

        for node in 0..graph.node_count() {
            matrix.update_entry(node, node, 0);
        }

        for edge in graph.edges() {
            let (start, end) = (edge.start_node(), edge.end_node());

            // Parallel edges keep the cheapest weight, self-loops never beat 0
            if matrix
                .entry(start, end)
                .is_none_or(|current| edge.weight() < current)
            {
                matrix.update_entry(start, end, edge.weight());
                matrix.update_entry(end, start, edge.weight());
            }
        }

        matrix
    }
}

impl MatrixAlgorithm for FloydWarshall {
    fn calc_matrix(&mut self, graph: &Graph) -> MatrixAlgorithmResult {
        let stopwatch = Stopwatch::start("floyd_warshall/calc_matrix");
        let nodes = graph.node_count();
        let mut matrix = Self::init_matrix(graph);

        // k must stay fixed for a full (i, j) sweep
        for k in 0..nodes {
            for i in 0..nodes {
                let Some(i_k) = matrix.entry(i, k) else {
                    continue;
                };

                for j in 0..nodes {
                    let Some(k_j) = matrix.entry(k, j) else {
                        continue;
                    };

                    let through_k: Weight = i_k.saturating_add(k_j);
                    if matrix.entry(i, j).is_none_or(|current| through_k < current) {
                        matrix.update_entry(i, j, through_k);
                    }
                }
            }
        }

        debug!(nodes, edges = graph.edge_count(), "Floyd-Warshall finished");

        MatrixAlgorithmResult {
            matrix,
            duration: stopwatch.finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::city_graph;
    use crate::routing::dijkstra::shortest_distances;

    use super::*;

    #[test]
    fn test_city_matrix() {
        let graph = city_graph();
        let matrix = FloydWarshall.calc_matrix(&graph).matrix;

        assert_eq!(matrix.node_count(), 6);
        assert_eq!(matrix.row(0).unwrap(), &[Some(0), Some(3), Some(2), Some(5), Some(7), Some(10)]);
        assert_eq!(matrix[(1, 4)], Some(6));
        assert_eq!(matrix[(5, 1)], Some(9));
    }

    #[test]
    fn test_diagonal_is_zero() {
        let graph = Graph::from_edges(3, &[(0, 0, 5), (1, 1, 0), (0, 1, 2)]).unwrap();
        let matrix = FloydWarshall.calc_matrix(&graph).matrix;

        for node in 0..graph.node_count() {
            assert_eq!(matrix[(node, node)], Some(0));
        }
    }

    #[test]
    fn test_matches_dijkstra() {
        let graph = city_graph();
        let matrix = FloydWarshall.calc_matrix(&graph).matrix;

        for source in 0..graph.node_count() {
            let distances = shortest_distances(&graph, source).unwrap();
            assert_eq!(matrix.row(source).unwrap(), distances.as_slice());
        }
    }

    #[test]
    fn test_parallel_edges_keep_minimum() {
        let graph = Graph::from_edges(2, &[(0, 1, 4), (1, 0, 9)]).unwrap();
        let matrix = FloydWarshall.calc_matrix(&graph).matrix;

        assert_eq!(matrix[(0, 1)], Some(4));
        assert_eq!(matrix[(1, 0)], Some(4));
    }

    #[test]
    fn test_unreachable_pairs() {
        let graph = Graph::from_edges(4, &[(0, 1, 3), (2, 3, 1)]).unwrap();
        let matrix = FloydWarshall.calc_matrix(&graph).matrix;

        assert_eq!(matrix[(0, 2)], None);
        assert_eq!(matrix[(3, 1)], None);
        assert_eq!(matrix[(2, 3)], Some(1));
    }

    #[test]
    fn test_path_weight_saturates_like_dijkstra() {
        let graph = Graph::from_edges(
            4,
            &[(0, 1, i64::MAX), (1, 2, i64::MAX), (2, 3, i64::MAX)],
        )
        .unwrap();
        let matrix = FloydWarshall.calc_matrix(&graph).matrix;

        assert_eq!(matrix[(0, 3)], Some(Weight::MAX));
        assert_eq!(
            matrix.row(0).unwrap(),
            shortest_distances(&graph, 0).unwrap().as_slice()
        );
    }

    #[test]
    fn test_large_weights_do_not_wrap() {
        let graph = Graph::from_edges(3, &[(0, 1, i64::MAX), (1, 2, i64::MAX)]).unwrap();
        let matrix = FloydWarshall.calc_matrix(&graph).matrix;

        assert_eq!(matrix[(0, 2)], Some(Weight::MAX - 1));
    }
}
