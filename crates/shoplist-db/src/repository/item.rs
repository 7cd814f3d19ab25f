//! # Shopping List Repository
//!
//! Every query and CRUD operation over the `shopping_list` table.
//!
//! ## Key Operations
//! - Case-insensitive name search
//! - Fixed-size pagination (6 per page)
//! - Items added in the last N days
//! - Total cost per category
//! - Get all / get by id / insert / update / delete
//!
//! ## One Statement per Call
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Call Reaches SQLite                            │
//! │                                                                         │
//! │  repo.search_by_name("fish")                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate input (shoplist-core)  ── rejected → DbError::Validation     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  one parameterized statement on a pooled connection                    │
//! │  WHERE name LIKE '%fish%' ESCAPE '\'                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rows → ShoppingListItem (FromRow)   driver error → DbError            │
//! │                                                                         │
//! │  No transactions, no retries: each call stands alone.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, Duration, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use shoplist_core::validation::{validate_new_item, validate_page_number, validate_patch};
use shoplist_core::{CategoryTotal, ItemPatch, NewItem, Price, ShoppingListItem, ITEMS_PER_PAGE};

/// Repository for shopping list database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.items();
///
/// let fish = repo.search_by_name("fish").await?;
/// let first_page = repo.get_all_items_paginated(1).await?;
/// let item = repo.get_by_id(2).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ShoppingListRepository {
    pool: SqlitePool,
}

impl ShoppingListRepository {
    /// Creates a new ShoppingListRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ShoppingListRepository { pool }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Finds items whose name contains `term`, ignoring case.
    ///
    /// ## How It Works
    /// - The term is used as given, surrounding whitespace included
    /// - `%`, `_` and `\` in the term are escaped, so they match literally
    /// - SQLite `LIKE` folds ASCII case: "fish" matches "Fish filet"
    /// - An empty term matches every row
    pub async fn search_by_name(&self, term: &str) -> DbResult<Vec<ShoppingListItem>> {
        let pattern = format!("%{}%", escape_like(term));

        debug!(term = %term, "Searching items by name");

        let items = sqlx::query_as::<_, ShoppingListItem>(
            r#"
            SELECT id, name, price, category, checked, date_added
            FROM shopping_list
            WHERE name LIKE ?1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Search returned items");
        Ok(items)
    }

    /// Returns one page of items in id order.
    ///
    /// ## Paging
    /// ```text
    /// page 1 → rows 1..=6    (OFFSET 0)
    /// page 2 → rows 7..=12   (OFFSET 6)
    /// page n → OFFSET (n - 1) * 6
    /// ```
    /// Pages start at 1; a page past the end is empty.
    pub async fn get_all_items_paginated(&self, page_number: u32) -> DbResult<Vec<ShoppingListItem>> {
        validate_page_number(page_number)?;

        let limit = i64::from(ITEMS_PER_PAGE);
        let offset = i64::from(page_number - 1) * limit;

        debug!(page = page_number, offset, "Listing items page");

        let items = sqlx::query_as::<_, ShoppingListItem>(
            r#"
            SELECT id, name, price, category, checked, date_added
            FROM shopping_list
            ORDER BY id
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Returns items added after `now - days_ago days`, newest first.
    ///
    /// A span reaching back before year 1 returns every row.
    pub async fn get_recent_items(&self, days_ago: u32) -> DbResult<Vec<ShoppingListItem>> {
        let cutoff = Duration::try_days(i64::from(days_ago))
            .and_then(|span| Utc::now().checked_sub_signed(span))
            .filter(|cutoff| cutoff.year() >= 1);

        debug!(days_ago, cutoff = ?cutoff, "Listing recent items");

        let items = sqlx::query_as::<_, ShoppingListItem>(
            r#"
            SELECT id, name, price, category, checked, date_added
            FROM shopping_list
            WHERE ?1 IS NULL OR date_added > ?1
            ORDER BY date_added DESC, id
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Sums prices per category, ordered by category.
    ///
    /// Prices are stored in canonical two-decimal form, so dropping the point
    /// gives integer cents. SQLite sums those exactly ("3.50" + "5.00" is
    /// "8.50") and raises an error instead of wrapping on overflow.
    pub async fn total_cost(&self) -> DbResult<Vec<CategoryTotal>> {
        debug!("Computing total cost per category");

        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT
                category,
                SUM(CAST(REPLACE(price, '.', '') AS INTEGER)) AS total_cents
            FROM shopping_list
            GROUP BY category
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(category, total_cents)| CategoryTotal {
                category,
                total: Price::from_cents(total_cents),
            })
            .collect())
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Returns every item in id order.
    pub async fn get_all_items(&self) -> DbResult<Vec<ShoppingListItem>> {
        let items = sqlx::query_as::<_, ShoppingListItem>(
            r#"
            SELECT id, name, price, category, checked, date_added
            FROM shopping_list
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(item))` - Item found
    /// * `Ok(None)` - No row with this id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<ShoppingListItem>> {
        let item = sqlx::query_as::<_, ShoppingListItem>(
            r#"
            SELECT id, name, price, category, checked, date_added
            FROM shopping_list
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new item and returns the stored row with its generated id.
    ///
    /// `date_added` defaults to the current time when the caller leaves it out.
    pub async fn insert_item(&self, item: &NewItem) -> DbResult<ShoppingListItem> {
        validate_new_item(item)?;

        let date_added = item.date_added.unwrap_or_else(Utc::now);

        debug!(name = %item.name, category = %item.category, "Inserting item");

        let inserted = sqlx::query_as::<_, ShoppingListItem>(
            r#"
            INSERT INTO shopping_list (name, price, category, checked, date_added)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, name, price, category, checked, date_added
            "#,
        )
        .bind(&item.name)
        .bind(item.price)
        .bind(&item.category)
        .bind(item.checked)
        .bind(date_added)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = inserted.id, "Inserted item");
        Ok(inserted)
    }

    /// Updates the fields set in `patch` on the row with `id`.
    ///
    /// ## Returns
    /// Number of rows changed: 1, or 0 when no row has this id.
    pub async fn update_item(&self, id: i64, patch: &ItemPatch) -> DbResult<u64> {
        validate_patch(patch)?;

        debug!(id, "Updating item");

        let result = sqlx::query(
            r#"
            UPDATE shopping_list SET
                name = COALESCE(?2, name),
                price = COALESCE(?3, price),
                category = COALESCE(?4, category),
                checked = COALESCE(?5, checked),
                date_added = COALESCE(?6, date_added)
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.price)
        .bind(patch.category.as_deref())
        .bind(patch.checked)
        .bind(patch.date_added)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the row with `id`.
    ///
    /// ## Returns
    /// Number of rows removed: 1, or 0 when no row has this id.
    pub async fn delete_item(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting item");

        let result = sqlx::query("DELETE FROM shopping_list WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // =========================================================================
    // Maintenance
    // =========================================================================

    /// Counts all items (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shopping_list")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Removes every item. The next insert is assigned id 1.
    pub async fn truncate(&self) -> DbResult<u64> {
        debug!("Truncating shopping_list");

        let result = sqlx::query("DELETE FROM shopping_list")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Escapes LIKE wildcards so the term matches literally (`ESCAPE '\'`).
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
