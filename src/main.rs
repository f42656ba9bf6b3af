mod cli;
mod commands;
mod infra;
mod server;
mod shared;
mod submission;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Cli { command } = Cli::parse();

    match command {
        Commands::Serve(args) => args.run().await?,
        Commands::Completions { shell } => cli::print_completions(shell),
    }

    Ok(())
}
