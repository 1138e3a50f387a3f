//! Float: web project scaffolding CLI.
//!
//! # Usage
//!
//! ```text
//! float new [PATH] [--answers FILE] [--yes] [--site-name NAME] [--no-bourbon]
//!           [--feature TOKEN]... [--icon-font ID] [--web-font ID]
//!           [--test-framework mocha|jasmine|none] [--templates DIR]
//!           [--skip-install] [--skip-install-message] [--skip-welcome-message]
//!           [--dry-run]
//! float features
//! ```

mod banner;
mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::new::NewArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "float",
    version,
    about = "Scaffold a gulp + Sass static site",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask the setup questions and generate a new project.
    New(NewArgs),

    /// List the optional features and their font choices.
    Features,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::New(args) => args.run(),
        Commands::Features => commands::features::run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
