//! CLI administration tool for redirector.
//!
//! Registers, inspects, and removes redirect mappings in the same Redis the
//! server reads from.
//!
//! # Usage
//!
//! ```bash
//! # Register or replace a mapping
//! cargo run --bin redirector-admin -- set blog.example.org site.example.io
//!
//! # Show one mapping
//! cargo run --bin redirector-admin -- get blog.example.org
//!
//! # Remove a mapping
//! cargo run --bin redirector-admin -- delete blog.example.org
//!
//! # List all mappings
//! cargo run --bin redirector-admin -- list
//!
//! # Check store connection
//! cargo run --bin redirector-admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same Redis settings as the server: `REDIS_URL`, or `REDIS_HOST` /
//! `REDIS_PORT` / `REDIS_PASSWORD` / `REDIS_DB`.

use redirector::config::{Config, mask_connection_string};
use redirector::domain::redirect_key;
use redirector::infrastructure::store::RedisStore;
use redirector::utils::destination::validate_destination;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing redirector mappings.
#[derive(Parser)]
#[command(name = "redirector-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register or replace the destination for a source host
    Set {
        /// Source host as clients send it in `Host` (e.g., "blog.example.org")
        source: String,

        /// Destination hostname, without scheme or path (e.g., "site.example.io")
        destination: String,

        /// Skip confirmation prompt when replacing an existing mapping
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the destination for a source host
    Get {
        source: String,
    },

    /// Remove the mapping for a source host
    Delete {
        source: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all mappings
    List,

    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let redis_url = Config::from_env()?.redis_url;

    let store = RedisStore::connect(&redis_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to Redis at {}",
                mask_connection_string(&redis_url)
            )
        })?;

    match cli.command {
        Commands::Set {
            source,
            destination,
            yes,
        } => set_mapping(&store, &source, &destination, yes).await?,
        Commands::Get { source } => get_mapping(&store, &source).await?,
        Commands::Delete { source, yes } => delete_mapping(&store, &source, yes).await?,
        Commands::List => list_mappings(&store).await?,
        Commands::Check => check_store(&store, &redis_url).await?,
    }

    Ok(())
}

/// Registers a mapping, confirming before replacing an existing destination.
async fn set_mapping(store: &RedisStore, source: &str, destination: &str, yes: bool) -> Result<()> {
    println!("{}", "🔀 Set Redirect".bright_blue().bold());
    println!();

    validate_destination(destination)?;

    let existing = store.destination(source).await?;

    println!("  Source:      {}", source.cyan());
    println!("  Destination: {}", destination.bright_yellow().bold());
    println!("  Key:         {}", redirect_key(source).bright_black());
    if let Some(ref current) = existing {
        println!("  Replaces:    {}", current.yellow());
    }
    println!();

    if existing.as_deref() == Some(destination) {
        println!("{}", "Mapping already up to date".green());
        return Ok(());
    }

    if existing.is_some() && !yes {
        let confirmed = Confirm::new()
            .with_prompt("Replace the existing destination?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    store.set_destination(source, destination).await?;

    println!("{}", "✅ Mapping saved".green().bold());
    println!();
    println!(
        "  {} → https://{}/",
        format!("http://{}/", source).bright_black(),
        destination.bright_yellow()
    );
    println!();

    Ok(())
}

async fn get_mapping(store: &RedisStore, source: &str) -> Result<()> {
    match store.destination(source).await? {
        Some(destination) => println!("  {} → {}", source.cyan(), destination.bright_yellow()),
        None => println!("  {} {}", source.cyan(), "not registered".yellow()),
    }

    Ok(())
}

/// Removes a mapping after confirmation (default: No).
async fn delete_mapping(store: &RedisStore, source: &str, yes: bool) -> Result<()> {
    println!("{}", "🗑  Delete Redirect".bright_blue().bold());
    println!();

    let Some(destination) = store.destination(source).await? else {
        println!("{}", "⚠️  No mapping registered for this host".yellow());
        return Ok(());
    };

    println!("  Source:      {}", source.cyan());
    println!("  Destination: {}", destination.bright_yellow());
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    store.remove_destination(source).await?;

    println!("{}", "✅ Mapping deleted".green().bold());
    println!();

    Ok(())
}

/// Lists all mappings.
///
/// # Output Format
///
/// ```text
/// 📋 Redirects
///
///   Source                                   Destination
///   ──────────────────────────────────────────────────────────────────────────
///   blog.example.org                         site.example.io
/// ```
async fn list_mappings(store: &RedisStore) -> Result<()> {
    println!("{}", "📋 Redirects".bright_blue().bold());
    println!();

    let mappings = store.mappings().await?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} redirector-admin -- set <source> <destination>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<40} {}",
        "Source".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (source, destination) in &mappings {
        println!("  {:<40} {}", source.cyan(), destination.bright_yellow());
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn check_store(store: &RedisStore, redis_url: &str) -> Result<()> {
    use redirector::domain::DomainLookup;

    println!("{}", "🔍 Checking store connection...".bright_blue());

    if store.health_check().await {
        println!("{}", "✅ Store connection OK".green().bold());
        println!("  {}", mask_connection_string(redis_url).bright_black());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer PING")
    }
}
