//! Contato CLI - Postal code lookups and contact management.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a postal code and geocode the address
//! contato lookup 01310-100
//!
//! # Register a contact, resolving address fields from the postal code
//! contato add -n "Ana Souza" -e ana@example.com -c 01310-100 --number 1578
//!
//! # List registered contacts
//! contato list
//! ```
//!
//! # Commands
//!
//! - `lookup` - Resolve a postal code and geocode the address
//! - `add` - Register a contact
//! - `list` - List registered contacts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "contato")]
#[command(author, version, about = "Contato CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a postal code and geocode the resulting address
    Lookup {
        /// Postal code to look up, punctuation allowed
        cep: String,
    },
    /// Register a contact
    Add(commands::add::AddArgs),
    /// List registered contacts
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Lookup { cep } => commands::lookup::run(&cep).await?,
        Commands::Add(args) => commands::add::run(args).await?,
        Commands::List => commands::list::run()?,
    }
    Ok(())
}
