//! # Query Drills
//!
//! Runs the shopping list queries from the command line and prints the
//! result as pretty JSON on stdout. Logs go to stderr.
//!
//! ## Usage
//! ```bash
//! cargo run -p shoplist-db --bin drills -- search fish
//! cargo run -p shoplist-db --bin drills -- page 2
//! cargo run -p shoplist-db --bin drills -- recent 7
//! cargo run -p shoplist-db --bin drills -- total-cost
//! cargo run -p shoplist-db --bin drills -- get 3
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use shoplist_db::{Database, DbConfig, ShoppingListRepository, DEFAULT_LOG_FILTER};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "drills", version, about = "Run shopping list queries")]
struct Cli {
    /// Database URL (defaults to DATABASE_URL)
    #[arg(long, short = 'd', global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Items whose name contains TERM (case-insensitive)
    Search { term: String },
    /// One page of items, 6 per page, starting at 1
    Page { n: u32 },
    /// Items added in the last DAYS days
    Recent { days: u32 },
    /// Sum of prices per category
    TotalCost,
    /// Every item
    List,
    /// One item by id
    Get { id: i64 },
    /// Delete one item by id
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let config = match cli.database_url {
        Some(url) => DbConfig::new(url),
        None => DbConfig::from_env().context("no --database-url given and DATABASE_URL is not usable")?,
    };

    let db = Database::new(config).await.context("failed to open database")?;
    let result = run(&db.items(), cli.command).await;
    db.close().await;

    println!("{}", result?);
    Ok(())
}

async fn run(items: &ShoppingListRepository, command: Command) -> Result<String> {
    match command {
        Command::Search { term } => to_json(&items.search_by_name(&term).await?),
        Command::Page { n } => to_json(&items.get_all_items_paginated(n).await?),
        Command::Recent { days } => to_json(&items.get_recent_items(days).await?),
        Command::TotalCost => to_json(&items.total_cost().await?),
        Command::List => to_json(&items.get_all_items().await?),
        Command::Get { id } => match items.get_by_id(id).await? {
            Some(item) => to_json(&item),
            None => anyhow::bail!("no item with id {id}"),
        },
        Command::Delete { id } => {
            let deleted = items.delete_item(id).await?;
            to_json(&json!({ "id": id, "deleted": deleted }))
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize result")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
