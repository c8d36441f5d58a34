//! Folio CLI - build a portfolio website from structured content.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Build a portfolio website from structured content")]
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
    /// Create folio.toml and a sample portfolio
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Export the portfolio as a website archive
    Export {
        /// Portfolio data file (defaults to config or "portfolio.yaml")
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Theme preset id, overriding the data file
        #[arg(short, long)]
        theme: Option<String>,

        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the layout CSS
        #[arg(long)]
        minify: bool,
    },

    /// Start the live preview server
    Preview {
        /// Port to listen on (defaults to config or 7777)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// List the built-in themes
    Themes,
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
        Commands::Export {
            data,
            theme,
            output,
            minify,
        } => {
            let config = config::load_config(&cli.config)?;
            let options = commands::export::ExportOptions {
                data,
                theme,
                output,
                minify: if minify { Some(true) } else { None },
            };
            commands::export::run(config, options).await?;
        }
        Commands::Preview { port, no_open } => {
            let config = config::load_config(&cli.config)?;
            let open = if no_open { Some(false) } else { None };
            commands::preview::run(config, port, open).await?;
        }
        Commands::Themes => {
            commands::themes::run();
        }
    }

    Ok(())
}
