//! Snowforge CLI - build, round-trip, and deploy Snowflake schema objects

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{deploy, describe, ls, pull, render};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Ls(args) => ls::execute(args, &cli.global).await,
        cli::Commands::Describe(args) => describe::execute(args, &cli.global).await,
        cli::Commands::Render(args) => render::execute(args, &cli.global).await,
        cli::Commands::Pull(args) => pull::execute(args, &cli.global).await,
        cli::Commands::Deploy(args) => deploy::execute(args, &cli.global).await,
    }
}
