use rendezvous_core::{
    FloydWarshall, MatrixAlgorithm, best_pickup,
    fixtures::{CITY_DRIVER, CITY_PASSENGERS, city_graph},
    shortest_distances,
};
use tracing::info;

use crate::output::{distances_lines, matrix_table};

pub fn run() -> Result<(), anyhow::Error> {
    let graph = city_graph();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Loaded demo city map"
    );

    println!("===== DIJKSTRA: Shortest path from Node {CITY_DRIVER} =====");
    let distances = shortest_distances(&graph, CITY_DRIVER)?;
    for line in distances_lines(&distances) {
        println!("{line}");
    }

    println!();
    println!("===== BEST PICKUP POINT FOR DRIVER AT NODE {CITY_DRIVER} =====");
    match best_pickup(&graph, CITY_DRIVER, &CITY_PASSENGERS)? {
        Some(pickup) => println!("Best pickup node: {} (cost {})", pickup.node, pickup.cost),
        None => println!("No passenger reachable"),
    }

    println!();
    println!("===== FLOYD-WARSHALL: All pairs =====");
    let result = FloydWarshall.calc_matrix(&graph);
    println!("{}", matrix_table(&result.matrix));
    info!("Computed all pairs in {:?}", result.duration);

    Ok(())
}
