//! menugen CLI - Menu generator for static sites.
//!
//! Provides commands for:
//! - `build`: Publish the generated menu as JSON
//! - `render`: Render the menu markup for one page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, RenderArgs};
use output::Output;

/// menugen - Menu generator for static sites.
#[derive(Parser)]
#[command(name = "menugen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate menus and write them as JSON.
    Build(BuildArgs),
    /// Render the menu for a page.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Render(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
