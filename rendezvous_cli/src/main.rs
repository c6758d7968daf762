use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::query::{DistancesArgs, MatrixArgs, PickupArgs};

mod demo;
mod graph_file;
mod output;
mod query;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the engine on the built-in six-node city map
    Demo,
    /// Shortest distances from one node to every other node
    #[command(visible_alias = "d")]
    Distances {
        #[command(flatten)]
        args: DistancesArgs,
    },
    /// Distances between every pair of nodes
    #[command(visible_alias = "m")]
    Matrix {
        #[command(flatten)]
        args: MatrixArgs,
    },
    /// Cheapest passenger to reach from a driver
    #[command(visible_alias = "p")]
    Pickup {
        #[command(flatten)]
        args: PickupArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Demo) | None => demo::run()?,
        Some(Commands::Distances { args }) => query::distances(args)?,
        Some(Commands::Matrix { args }) => query::matrix(args)?,
        Some(Commands::Pickup { args }) => query::pickup(args)?,
    }

    Ok(())
}
