//! # Jotter - A Plain-Text Editor
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the editor
//! cargo run
//!
//! # Open a file
//! cargo run -- notes.txt
//!
//! # More logging (repeat for more detail)
//! cargo run -- -vv notes.txt
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jotter_core::Config;
use jotter_ui::{run, Flags};

/// Jotter - a plain-text editor built in Rust
#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over -v
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(args.log_level()).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();

    tracing::info!("Starting Jotter v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    let flags = Flags { file: args.file };

    run(flags, config).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
