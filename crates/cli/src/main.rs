//! Revendo CLI - data directory management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed a data directory with a demo catalog and one reseller
//! revendo seed
//!
//! # Rewrite every stored file at the current schema version
//! revendo migrate
//!
//! # Summarize the data directory
//! revendo status
//!
//! # Hash a password for REVENDO_ADMIN_PASSWORD_HASH
//! revendo admin hash-password -p "s3cret"
//! ```
//!
//! # Commands
//!
//! - `seed` - Populate an empty data directory with demo data
//! - `migrate` - Upgrade stored files to the current schema
//! - `status` - Print collection counts and pending work
//! - `admin hash-password` - Hash an admin password for configuration
//!
//! The data directory comes from `--data-dir`, then `REVENDO_DATA_DIR`,
//! then `./data`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "revendo")]
#[command(author, version, about = "Revendo management tools")]
struct Cli {
    /// Data directory (overrides `REVENDO_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate an empty data directory with demo data
    Seed {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
    /// Rewrite every stored file at the current schema version
    Migrate,
    /// Print collection counts and pending work
    Status,
    /// Manage the admin account
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Hash a password for `REVENDO_ADMIN_PASSWORD_HASH`
    HashPassword {
        /// Plaintext password to hash
        #[arg(short, long)]
        password: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        std::env::var("REVENDO_DATA_DIR").map_or_else(|_| PathBuf::from("./data"), PathBuf::from)
    });

    match cli.command {
        Commands::Seed { force } => commands::seed::run(&data_dir, force)?,
        Commands::Migrate => commands::migrate::run(&data_dir)?,
        Commands::Status => commands::status::run(&data_dir)?,
        Commands::Admin { action } => match action {
            AdminAction::HashPassword { password } => {
                commands::admin::hash_password(&password)?;
            }
        },
    }
    Ok(())
}
