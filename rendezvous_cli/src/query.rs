use std::path::PathBuf;

use clap::Args;
use rendezvous_core::{MatrixAlgorithmKind, NodeId, best_pickup, shortest_distances};
use tracing::info;

use crate::{
    graph_file::read_graph,
    output::{distances_lines, matrix_table, to_json},
};

#[derive(Args)]
pub struct DistancesArgs {
    /// JSON graph file
    #[arg(short, long)]
    graph: PathBuf,

    #[arg(short, long)]
    source: NodeId,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct MatrixArgs {
    /// JSON graph file
    #[arg(short, long)]
    graph: PathBuf,

    /// "floyd-warshall" or "dijkstra"
    #[arg(short, long, default_value_t = MatrixAlgorithmKind::FloydWarshall)]
    algorithm: MatrixAlgorithmKind,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct PickupArgs {
    /// JSON graph file
    #[arg(short, long)]
    graph: PathBuf,

    /// Node where the driver is waiting
    #[arg(long)]
    driver: NodeId,

    /// Comma separated passenger nodes, in priority order
    #[arg(short, long, value_delimiter = ',')]
    candidates: Vec<NodeId>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn distances(args: DistancesArgs) -> Result<(), anyhow::Error> {
    println!("{}", render_distances(&args)?);
    Ok(())
}

pub fn matrix(args: MatrixArgs) -> Result<(), anyhow::Error> {
    println!("{}", render_matrix(&args)?);
    Ok(())
}

pub fn pickup(args: PickupArgs) -> Result<(), anyhow::Error> {
    println!("{}", render_pickup(&args)?);
    Ok(())
}

fn render_distances(args: &DistancesArgs) -> Result<String, anyhow::Error> {
    let graph = read_graph(&args.graph)?;
    let distances = shortest_distances(&graph, args.source)?;

    if args.json {
        return to_json(&distances);
    }

    Ok(distances_lines(&distances).join("\n"))
}

fn render_matrix(args: &MatrixArgs) -> Result<String, anyhow::Error> {
    let graph = read_graph(&args.graph)?;
    let result = args.algorithm.calc_matrix(&graph);
    info!(
        "Computed {} matrix for {} nodes in {:?}",
        args.algorithm,
        graph.node_count(),
        result.duration
    );

    if args.json {
        return to_json(&result.matrix);
    }

    Ok(matrix_table(&result.matrix).to_string())
}

fn render_pickup(args: &PickupArgs) -> Result<String, anyhow::Error> {
    let graph = read_graph(&args.graph)?;
    let pickup = best_pickup(&graph, args.driver, &args.candidates)?;

    if args.json {
        return to_json(&pickup);
    }

    Ok(match pickup {
        Some(pickup) => format!("Best pickup node: {} (cost {})", pickup.node, pickup.cost),
        None => String::from("No passenger reachable"),
    })
}
