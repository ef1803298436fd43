//! Folio CLI - step-by-step portfolio site generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Step-by-step portfolio site generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create folio.toml and a sample profile
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Fill in a portfolio step by step
    Wizard {
        /// Where to write the archive (defaults to config or ".")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Package a profile file into a site archive
    Build {
        /// Profile to build (defaults to config or "portfolio.yaml")
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Output directory (defaults to config or ".")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Render a profile and serve it locally
    Preview {
        /// Profile to preview (defaults to config or "portfolio.yaml")
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Port to listen on
        #[arg(long, default_value = "4000")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Wizard { output } => {
            commands::wizard::run(&cli.config, output).await?;
        }
        Commands::Build {
            profile,
            output,
            no_minify,
        } => {
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(&cli.config, profile, output, minify).await?;
        }
        Commands::Preview {
            profile,
            port,
            no_open,
        } => {
            commands::preview::run(&cli.config, profile, port, !no_open).await?;
        }
    }

    Ok(())
}
