//! Handbook CLI - LLM-ready exports of a documentation site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "handbook")]
#[command(about = "Plain-text exports of a documentation handbook for language models")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to handbook.toml config file
    #[arg(short, long, default_value = "handbook.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a config file and sample pages
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Write llms.txt, llms-full.txt and per-page exports
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include draft pages
        #[arg(long)]
        drafts: bool,
    },

    /// Serve the exports straight from the docs directory
    Dev {
        /// Port to listen on
        #[arg(short, long, default_value = "7777")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,

        /// Include draft pages
        #[arg(long)]
        drafts: bool,
    },

    /// Preview built exports
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = "dist")]
        dir: PathBuf,
    },

    /// Copy CHANGELOG.md into the docs as a page
    SyncChangelog {
        /// Root changelog to read
        #[arg(long, default_value = "CHANGELOG.md")]
        source: PathBuf,

        /// Page to write
        #[arg(long, default_value = "docs/changelog.md")]
        dest: PathBuf,
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

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Build { output, drafts } => {
            let config = config::load_config(&cli.config)?;
            commands::build::run(&config, output, drafts).await?;
        }
        Commands::Dev {
            port,
            no_open,
            drafts,
        } => {
            let config = config::load_config(&cli.config)?;
            commands::dev::run(&config, port, !no_open, drafts).await?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(port, dir).await?;
        }
        Commands::SyncChangelog { source, dest } => {
            let config = config::load_config(&cli.config)?;
            commands::changelog::run(&config, &source, &dest).await?;
        }
    }

    Ok(())
}
