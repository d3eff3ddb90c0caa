//! Tidemark CLI - Store dataset management tools.
//!
//! # Usage
//!
//! ```bash
//! # List the stores in a dataset directory
//! tidemark stores list --data-dir crates/storefront/data/stores
//!
//! # Validate every store dataset (types, references, block tags)
//! tidemark stores validate --data-dir crates/storefront/data/stores
//! ```
//!
//! # Commands
//!
//! - `stores list` - List store IDs from the dataset index
//! - `stores validate` - Load every dataset and report problems

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tidemark")]
#[command(author, version, about = "Tidemark CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage store datasets
    Stores {
        #[command(subcommand)]
        action: StoresAction,
    },
}

#[derive(Subcommand)]
enum StoresAction {
    /// List store IDs from the dataset index
    List {
        /// Dataset root directory
        #[arg(long, default_value = "crates/storefront/data/stores")]
        data_dir: PathBuf,
    },
    /// Load and validate every store dataset
    Validate {
        /// Dataset root directory
        #[arg(long, default_value = "crates/storefront/data/stores")]
        data_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tidemark_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Stores { action } => match action {
            StoresAction::List { data_dir } => commands::stores::list(&data_dir),
            StoresAction::Validate { data_dir } => commands::stores::validate(&data_dir),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
