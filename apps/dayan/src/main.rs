//! # Dayan - Yarrow-Stalk Divination CLI
//!
//! The main binary for the Dayan divination engine.
//!
//! This application provides:
//! - CLI interface for casting and reviewing hexagrams
//! - JSON history persistence (compatible record format)
//! - Uniform random split points when no explicit splits are given
//!
//! ## Usage
//!
//! ```bash
//! # Cast a hexagram for a question
//! dayan cast -q "问前程"
//!
//! # Reproducible cast
//! dayan cast -q "问前程" --seed 42
//!
//! # Review past casts
//! dayan history --limit 10
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dayan::cli;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — DAYAN_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("DAYAN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dayan=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Dayan startup banner.
fn print_banner() {
    println!(
        r#"
  ██████╗  █████╗ ██╗   ██╗ █████╗ ███╗   ██╗
  ██╔══██╗██╔══██╗╚██╗ ██╔╝██╔══██╗████╗  ██║
  ██║  ██║███████║ ╚████╔╝ ███████║██╔██╗ ██║
  ██║  ██║██╔══██║  ╚██╔╝  ██╔══██║██║╚██╗██║
  ██████╔╝██║  ██║   ██║   ██║  ██║██║ ╚████║
  ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═══╝

  大衍筮法 v{}

  分二 · 挂一 · 揲四 · 归奇
"#,
        env!("CARGO_PKG_VERSION")
    );
}
