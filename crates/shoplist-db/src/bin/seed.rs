//! # Seed Data Generator
//!
//! Populates the shopping list with sample items for development.
//!
//! ## Usage
//! ```bash
//! # Uses DATABASE_URL (from the environment or .env)
//! cargo run -p shoplist-db --bin seed
//!
//! # Empty the table first, then seed
//! cargo run -p shoplist-db --bin seed -- --reset
//!
//! # Specify the database explicitly
//! cargo run -p shoplist-db --bin seed -- --database-url sqlite://shopping.db
//! ```
//!
//! ## Generated Items
//! A fixed list across the four usual categories (Main, Snack, Lunch,
//! Breakfast), with date_added spread over the last 30 days so that
//! `drills recent <days>` has something to filter.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use shoplist_core::{category, NewItem, Price};
use shoplist_db::{Database, DbConfig, DbResult, ShoppingListRepository, DEFAULT_LOG_FILTER};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Sample items: (category, name, price in cents)
const ITEMS: &[(&str, &str, i64)] = &[
    (category::MAIN, "Fish filet", 1299),
    (category::MAIN, "Chicken breast", 899),
    (category::MAIN, "Tofu", 349),
    (category::MAIN, "Salmon steak", 1549),
    (category::MAIN, "Ground beef", 749),
    (category::SNACK, "Pretzels", 299),
    (category::SNACK, "Goldfish crackers", 379),
    (category::SNACK, "Trail mix", 549),
    (category::SNACK, "Dark chocolate", 425),
    (category::LUNCH, "Sourdough bread", 499),
    (category::LUNCH, "Sliced turkey", 679),
    (category::LUNCH, "Swordfish salad", 1099),
    (category::LUNCH, "Apples", 130),
    (category::BREAKFAST, "Bananas", 350),
    (category::BREAKFAST, "Oatmeal", 429),
    (category::BREAKFAST, "Greek yogurt", 589),
    (category::BREAKFAST, "Eggs dozen", 399),
    (category::BREAKFAST, "Maple syrup", 1149),
];

/// Seed the shopping list with sample items.
#[derive(Debug, Parser)]
#[command(name = "seed", version)]
struct Args {
    /// Database URL (defaults to DATABASE_URL)
    #[arg(long, short = 'd')]
    database_url: Option<String>,

    /// Empty the table before seeding
    #[arg(long)]
    reset: bool,

    /// Insert at most this many items
    #[arg(long, short = 'c')]
    count: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let config = match args.database_url {
        Some(url) => DbConfig::new(url),
        None => DbConfig::from_env().context("no --database-url given and DATABASE_URL is not usable")?,
    };

    let db = Database::new(config).await.context("failed to open database")?;
    let items = db.items();

    if args.reset {
        let removed = items.truncate().await?;
        info!(removed, "Table emptied");
    }

    let existing = items.count().await?;
    if existing > 0 {
        warn!(existing, "Table already has items, skipping seed (use --reset to regenerate)");
        db.close().await;
        return Ok(());
    }

    let limit = args.count.unwrap_or(ITEMS.len());
    let generated = seed_items(&items, limit, Utc::now())
        .await
        .context("seeding stopped at a failed insert")?;

    info!(generated, "Seed complete");

    let fish = items.search_by_name("fish").await?;
    info!(matches = fish.len(), "Search 'fish'");

    for total in items.total_cost().await? {
        info!(category = %total.category, total = %total.total, "Total cost");
    }

    db.close().await;
    Ok(())
}

/// Inserts up to `limit` sample items, stopping at the first failure.
async fn seed_items(
    items: &ShoppingListRepository,
    limit: usize,
    now: DateTime<Utc>,
) -> DbResult<usize> {
    let mut generated = 0;

    for (index, (category, name, cents)) in ITEMS.iter().take(limit).enumerate() {
        let item = generate_item(category, name, *cents, index, now);
        let inserted = items.insert_item(&item).await?;

        generated += 1;
        info!(id = inserted.id, name = %inserted.name, price = %inserted.price, "Inserted");
    }

    Ok(generated)
}

/// Builds one sample item; every third item is already checked off.
fn generate_item(
    category: &str,
    name: &str,
    cents: i64,
    index: usize,
    now: DateTime<Utc>,
) -> NewItem {
    // Spread over the last 30 days, newest first
    let days_ago = (index as i64 * 7) % 30;
    let date_added = now - Duration::days(days_ago) - Duration::hours(index as i64);

    NewItem::new(name, Price::from_cents(cents), category)
        .checked(index % 3 == 0)
        .date_added(date_added)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: [`DEFAULT_LOG_FILTER`]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
