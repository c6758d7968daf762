use crate::graph::Graph;
use crate::routing::dijkstra::Dijkstra;
use crate::stopwatch::Stopwatch;

use super::{
    matrix::DistanceMatrix,
    matrix_algorithm::{MatrixAlgorithm, MatrixAlgorithmResult},
};

/// Fills the matrix one row at a time with a single-source search from every
/// node. Cheaper than Floyd-Warshall on sparse road graphs.
pub struct RepeatedDijkstra {
    dijkstra: Dijkstra,
}

impl RepeatedDijkstra {
    pub fn new(graph: &Graph) -> Self {
        RepeatedDijkstra {
            dijkstra: Dijkstra::new(graph),
        }
    }
}

impl MatrixAlgorithm for RepeatedDijkstra {
    fn calc_matrix(&mut self, graph: &Graph) -> MatrixAlgorithmResult {
        let stopwatch = Stopwatch::start("repeated_dijkstra/calc_matrix");
        let mut matrix = DistanceMatrix::new(graph.node_count());

        for source in 0..graph.node_count() {
            let distances = self.dijkstra.search(graph, source);
            matrix.set_row(source, distances.into_vec());
        }

        MatrixAlgorithmResult {
            matrix,
            duration: stopwatch.finish(),
        }
    }
}
