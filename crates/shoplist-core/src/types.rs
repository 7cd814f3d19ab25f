//! # Domain Types
//!
//! The row type of the `shopping_list` table and the shapes used to create
//! and change rows.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │ ShoppingListItem │   │     NewItem      │   │    ItemPatch     │    │
//! │  │ ──────────────── │   │ ──────────────── │   │ ──────────────── │    │
//! │  │ id (storage)     │   │ name             │   │ name?            │    │
//! │  │ name             │   │ price            │   │ price?           │    │
//! │  │ price  "5.00"    │   │ category         │   │ category?        │    │
//! │  │ category         │   │ checked          │   │ checked?         │    │
//! │  │ checked          │   │ date_added?      │   │ date_added?      │    │
//! │  │ date_added       │   └──────────────────┘   └──────────────────┘    │
//! │  └──────────────────┘        insert_item          update_item          │
//! │                                                                         │
//! │  ┌──────────────────┐                                                  │
//! │  │  CategoryTotal   │  ← total_cost(): one per category                │
//! │  └──────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::price::Price;

// =============================================================================
// Categories
// =============================================================================

/// Well-known category labels.
///
/// The column accepts any label; these are the ones the list ships with.
pub mod category {
    pub const MAIN: &str = "Main";
    pub const SNACK: &str = "Snack";
    pub const LUNCH: &str = "Lunch";
    pub const BREAKFAST: &str = "Breakfast";

    /// All well-known labels, in display order.
    pub const ALL: &[&str] = &[MAIN, SNACK, LUNCH, BREAKFAST];
}

// =============================================================================
// Shopping List Item
// =============================================================================

/// One row of the `shopping_list` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ShoppingListItem {
    /// Assigned by storage on insert.
    pub id: i64,

    pub name: String,

    /// Decimal price, two fractional digits.
    pub price: Price,

    /// Open label set, see [`category`].
    pub category: String,

    pub checked: bool,

    pub date_added: DateTime<Utc>,
}

// =============================================================================
// New Item
// =============================================================================

/// Caller-supplied fields for a new row.
///
/// ## Example
/// ```rust
/// use shoplist_core::{category, NewItem};
///
/// let item = NewItem::new("Fish filet", "12.99".parse().unwrap(), category::MAIN);
/// assert!(!item.checked);
/// assert!(item.date_added.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: Price,
    pub category: String,
    #[serde(default)]
    pub checked: bool,
    /// Stamped with the current time on insert when absent.
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
}

impl NewItem {
    /// Creates an unchecked item with no explicit date.
    pub fn new(name: impl Into<String>, price: Price, category: impl Into<String>) -> Self {
        NewItem {
            name: name.into(),
            price,
            category: category.into(),
            checked: false,
            date_added: None,
        }
    }

    /// Sets the checked flag.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets an explicit date_added.
    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }
}

// =============================================================================
// Item Patch
// =============================================================================

/// Fields to change on an existing row. `None` leaves the column as is.
///
/// ## Example
/// ```rust
/// use shoplist_core::ItemPatch;
///
/// let patch = ItemPatch::new().name("updated name").checked(true);
/// assert!(!patch.is_empty());
/// assert!(patch.price.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
}

impl ItemPatch {
    /// An empty patch.
    pub fn new() -> Self {
        ItemPatch::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.checked.is_none()
            && self.date_added.is_none()
    }

    /// Returns `item` with this patch applied, keeping its id.
    pub fn apply_to(&self, item: &ShoppingListItem) -> ShoppingListItem {
        ShoppingListItem {
            id: item.id,
            name: self.name.clone().unwrap_or_else(|| item.name.clone()),
            price: self.price.unwrap_or(item.price),
            category: self.category.clone().unwrap_or_else(|| item.category.clone()),
            checked: self.checked.unwrap_or(item.checked),
            date_added: self.date_added.unwrap_or(item.date_added),
        }
    }
}

/// A full replacement: every column takes the new item's value.
impl From<NewItem> for ItemPatch {
    fn from(item: NewItem) -> Self {
        ItemPatch {
            name: Some(item.name),
            price: Some(item.price),
            category: Some(item.category),
            checked: Some(item.checked),
            date_added: item.date_added,
        }
    }
}

// =============================================================================
// Category Total
// =============================================================================

/// Sum of prices for one category, as returned by `total_cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Price,
}

// =============================================================================
// Unit Tests
// =============================================================================
