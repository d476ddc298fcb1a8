mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check::CheckArgs, list::ListArgs, remove::RemoveArgs, schema::SchemaArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tagcheck", about = "Check and edit typed entities in a tag tree")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify every entity record against its registered schema
    Check(CheckArgs),
    /// List typed entities
    List(ListArgs),
    /// Remove every entity with a given id
    Remove(RemoveArgs),
    /// Print the schema registered for an id
    Schema(SchemaArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Remove(args) => args.run(),
        Commands::Schema(args) => args.run(),
    }
}
