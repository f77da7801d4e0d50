//! Trackport CLI - Migration integrity checks for DAW track structures
//!
//! This binary provides commands for validating, fingerprinting, and mapping
//! track-list snapshots taken before and after a project migration.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use trackport_session::DawFormat;

// Use modules from the library crate
use trackport_cli::commands;

/// Trackport - DAW Track Migration Integrity Checks
#[derive(Parser)]
#[command(name = "trackport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate that a converted snapshot preserves the original track positions
    Validate {
        /// Path to the original (pre-migration) snapshot
        #[arg(short, long)]
        original: String,

        /// Path to the converted (post-migration) snapshot
        #[arg(short, long)]
        converted: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compute the deterministic position fingerprint of a snapshot
    Fingerprint {
        /// Path to the snapshot file
        snapshot: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Emit the position-locked track map for a snapshot
    Map {
        /// Path to the source snapshot file
        snapshot: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Emit the strict migration-request payload for the conversion service
    Plan {
        /// Path to the source snapshot file
        snapshot: String,

        /// Source DAW format (logic_pro, pro_tools)
        #[arg(short, long)]
        source: DawFormat,

        /// Target DAW format (logic_pro, pro_tools)
        #[arg(short, long)]
        target: DawFormat,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            original,
            converted,
            json,
        } => commands::validate::run(&original, &converted, json),
        Commands::Fingerprint { snapshot, json } => commands::fingerprint::run(&snapshot, json),
        Commands::Map { snapshot, output } => commands::map::run(&snapshot, output.as_deref()),
        Commands::Plan {
            snapshot,
            source,
            target,
            output,
        } => commands::plan::run(&snapshot, source, target, output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
