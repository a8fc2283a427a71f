use clap::Parser;

mod cli;
mod config;
mod core;
mod plugins;
mod utils;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Handle the command
    cli.run()?;

    Ok(())
}
