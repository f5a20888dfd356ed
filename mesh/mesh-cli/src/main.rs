//! `mesh-report`: analyze or validate a decoded 3D model scene.
//!
//! # Commands
//!
//! - `mesh-report analyze <SCENE_JSON>` - Volume, area, bounds and estimates
//! - `mesh-report validate <SCENE_JSON>` - Printability issues
//! - `mesh-report formats` - Accepted source formats per operation
//!
//! The scene file holds the vertex and face buffers a format loader
//! produced:
//!
//! ```json
//! {"meshes": [{"name": "body", "vertices": [[0, 0, 0], ...], "faces": [[0, 1, 2], ...]}]}
//! ```
//!
//! Results go to stdout as JSON, logs to stderr.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::commands::RequestArgs;

/// Mesh analysis and print validation
#[derive(Parser)]
#[command(name = "mesh-report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Analyze and validate 3D model geometry", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute volume, surface area, bounding box and print estimates
    Analyze(RequestArgs),

    /// Check watertightness, winding, face count and degenerate faces
    Validate(RequestArgs),

    /// List accepted source formats per operation
    Formats,
}

fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let output = match cli.command {
        Commands::Analyze(args) => commands::analyze(&args)?,
        Commands::Validate(args) => commands::validate(&args)?,
        Commands::Formats => commands::formats(),
    };

    println!("{output}");
    Ok(())
}
