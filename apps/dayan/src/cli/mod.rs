//! # Dayan CLI Module
//!
//! This module implements the CLI interface for Dayan.
//!
//! ## Available Commands
//!
//! - `cast` - Cast a hexagram for a question
//! - `history` - List past casts, newest first
//! - `lookup` - Resolve one catalog entry by its 6-bit key

mod commands;

use clap::{Parser, Subcommand};
use dayan_core::DayanError;
use std::path::PathBuf;

use crate::config::AppConfig;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Dayan - yarrow-stalk divination
///
/// A deterministic simulation of the Great Expansion counting ritual.
/// The engine only counts; it never interprets.
#[derive(Parser, Debug)]
#[command(name = "dayan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner and trace output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Path to the history file (overrides config)
    #[arg(short = 'H', long, global = true)]
    pub history: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cast a hexagram for a question
    Cast {
        /// The question to divine
        #[arg(short, long)]
        question: String,

        /// Seed for the random split provider (reproducible casts)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Explicit split points, comma-separated (18 for a full cast;
        /// missing points fall back to the pool midpoint)
        #[arg(long)]
        splits: Option<String>,

        /// Also print the downstream interpretation prompt
        #[arg(short, long)]
        prompt: bool,

        /// Do not append the cast to the history file
        #[arg(long)]
        no_save: bool,
    },

    /// List past casts, newest first
    History {
        /// Maximum number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Resolve one catalog entry by its 6-bit key (bottom line first)
    Lookup {
        /// The 6-character binary key, e.g. 111111
        #[arg(short, long)]
        key: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), DayanError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let history_path = config.history_path(cli.history);
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Cast {
            question,
            seed,
            splits,
            prompt,
            no_save,
        }) => cmd_cast(
            &history_path,
            json_mode,
            cli.quiet,
            &question,
            seed,
            splits.as_deref(),
            prompt,
            no_save,
        ),
        Some(Commands::History { limit }) => cmd_history(&history_path, json_mode, limit),
        Some(Commands::Lookup { key }) => cmd_lookup(&key, json_mode),
        None => {
            // No subcommand - show recent history by default
            cmd_history(&history_path, json_mode, 20)
        }
    }
}
