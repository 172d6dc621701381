use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "bioschemas",
    about = "Map PubMed Central OAI-PMH records to Bioschemas JSON-LD",
    long_about = "Reads a PMC OAI-PMH GetRecord response (JATS XML) or a parsed record tree \
                  (JSON) and emits a Bioschemas CreativeWork/ScholarlyArticle document"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a record to JSON-LD
    Map(commands::map::Map),
    /// Print the parsed record tree as JSON
    Tree(commands::tree::Tree),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    match &cli.command {
        Commands::Map(cmd) => cmd.execute(),
        Commands::Tree(cmd) => cmd.execute(),
    }
}
