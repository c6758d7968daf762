use crate::graph::Graph;

pub mod floyd_warshall;
#[allow(clippy::module_inception)]
pub mod matrix;
pub mod matrix_algorithm;
pub mod repeated_dijkstra;

use floyd_warshall::FloydWarshall;
use matrix::DistanceMatrix;
use matrix_algorithm::MatrixAlgorithm;

/// All-pairs distances computed with Floyd-Warshall.
pub fn all_pairs_distances(graph: &Graph) -> DistanceMatrix {
    FloydWarshall.calc_matrix(graph).matrix
}
