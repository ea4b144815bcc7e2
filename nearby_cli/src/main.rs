use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;
use tracing::debug;

use crate::{directions::DirectionsArgs, generate::GenerateSubcommands, list::ListArgs};

mod directions;
mod fix_cache;
mod generate;
mod list;
mod parsers;
mod render;
mod source;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show locations ranked by distance from the configured position
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },
    /// Print the navigation link for one location
    Directions {
        #[command(flatten)]
        args: DirectionsArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::List { args }) => list::run(args).await?,
        Some(Commands::Directions { args }) => directions::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {
            debug!("No command provided");
        }
    }

    Ok(())
}
