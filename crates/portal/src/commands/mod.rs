//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod landing;
pub(crate) mod nav;
mod project;

use std::path::PathBuf;

use clap::Args;

pub(crate) use check::CheckArgs;
pub(crate) use landing::LandingArgs;
pub(crate) use nav::NavArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover portal.toml).
    #[arg(short, long, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Sidebars specification file (overrides config).
    #[arg(long)]
    sidebars: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
