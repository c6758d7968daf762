use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rendezvous_core::{FloydWarshall, Graph, MatrixAlgorithm, RepeatedDijkstra, shortest_distances};

/// Grid-like road network with a few random shortcuts.
fn road_graph(side: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let nodes = side * side;
    let mut graph = Graph::new(nodes);

    for row in 0..side {
        for col in 0..side {
            let node = row * side + col;
            if col + 1 < side {
                graph.add_edge(node, node + 1, rng.random_range(1..100)).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(node, node + side, rng.random_range(1..100)).unwrap();
            }
        }
    }

    for _ in 0..side {
        let from = rng.random_range(0..nodes);
        let to = rng.random_range(0..nodes);
        graph.add_edge(from, to, rng.random_range(50..500)).unwrap();
    }

    graph
}

fn matrix_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");

    for side in [5, 10, 15] {
        let graph = road_graph(side);
        let nodes = graph.node_count();

        group.bench_with_input(BenchmarkId::new("floyd_warshall", nodes), &graph, |b, graph| {
            b.iter(|| FloydWarshall.calc_matrix(black_box(graph)))
        });
        group.bench_with_input(
            BenchmarkId::new("repeated_dijkstra", nodes),
            &graph,
            |b, graph| b.iter(|| RepeatedDijkstra::new(graph).calc_matrix(black_box(graph))),
        );
    }

    group.finish();
}

fn dijkstra_benchmark(c: &mut Criterion) {
    let graph = road_graph(100);

    c.bench_function("dijkstra 10k nodes", |b| {
        b.iter(|| shortest_distances(black_box(&graph), black_box(0)))
    });
}

criterion_group!(benches, matrix_benchmark, dijkstra_benchmark);
criterion_main!(benches);
