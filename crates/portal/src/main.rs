//! Portal CLI - documentation navigation checks.
//!
//! Provides commands for:
//! - `check`: Validate sidebars and landing sections against the docs
//! - `nav`: Print normalized navigation trees as JSON
//! - `landing`: Print composed landing sections as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, LandingArgs, NavArgs};
use output::Output;

/// Portal - documentation navigation.
#[derive(Parser)]
#[command(name = "portal", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate sidebars, document references, and landing sections.
    Check(CheckArgs),
    /// Print normalized navigation trees.
    Nav(NavArgs),
    /// Print composed landing sections.
    Landing(LandingArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Check(args) => args.common.verbose,
            Self::Nav(args) => args.common.verbose,
            Self::Landing(args) => args.common.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Landing(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
