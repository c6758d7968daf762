use std::{fmt, str::FromStr, time::Duration};

use crate::graph::Graph;

use super::{floyd_warshall::FloydWarshall, matrix::DistanceMatrix, repeated_dijkstra::RepeatedDijkstra};

pub struct MatrixAlgorithmResult {
    pub matrix: DistanceMatrix,
    pub duration: Duration,
}

pub trait MatrixAlgorithm {
    fn calc_matrix(&mut self, graph: &Graph) -> MatrixAlgorithmResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixAlgorithmKind {
    #[default]
    FloydWarshall,
    Dijkstra,
}

impl MatrixAlgorithmKind {
    pub fn calc_matrix(self, graph: &Graph) -> MatrixAlgorithmResult {
        match self {
            MatrixAlgorithmKind::FloydWarshall => FloydWarshall.calc_matrix(graph),
            MatrixAlgorithmKind::Dijkstra => RepeatedDijkstra::new(graph).calc_matrix(graph),
        }
    }
}

impl fmt::Display for MatrixAlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixAlgorithmKind::FloydWarshall => write!(f, "floyd-warshall"),
            MatrixAlgorithmKind::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

impl FromStr for MatrixAlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floyd-warshall" => Ok(MatrixAlgorithmKind::FloydWarshall),
            "dijkstra" => Ok(MatrixAlgorithmKind::Dijkstra),
            _ => Err(format!("Unknown matrix algorithm {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::city_graph;

    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(
            "floyd-warshall".parse::<MatrixAlgorithmKind>(),
            Ok(MatrixAlgorithmKind::FloydWarshall)
        );
        assert_eq!(
            "dijkstra".parse::<MatrixAlgorithmKind>(),
            Ok(MatrixAlgorithmKind::Dijkstra)
        );
        assert!("bellman-ford".parse::<MatrixAlgorithmKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [MatrixAlgorithmKind::FloydWarshall, MatrixAlgorithmKind::Dijkstra] {
            assert_eq!(kind.to_string().parse::<MatrixAlgorithmKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kinds_agree() {
        let graph = city_graph();
        let floyd_warshall = MatrixAlgorithmKind::FloydWarshall.calc_matrix(&graph).matrix;
        let dijkstra = MatrixAlgorithmKind::Dijkstra.calc_matrix(&graph).matrix;
        assert_eq!(floyd_warshall, dijkstra);
    }
}
