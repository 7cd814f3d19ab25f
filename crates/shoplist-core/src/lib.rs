//! # shoplist-core: Shopping List Domain Types
//!
//! Everything the shopping list knows about itself without touching storage:
//! the row type, the insert and patch shapes, the `Price` value and the input
//! rules applied before any statement is issued.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopping List Workspace                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             seed / drills binaries (shoplist-db)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            shoplist-db (ShoppingListRepository)                 │   │
//! │  │     search, paginate, recent, total cost, CRUD over sqlx        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shoplist-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────┐  ┌──────────────────────┐   │   │
//! │  │   │     types     │  │   price   │  │      validation      │   │   │
//! │  │   │ ShoppingList- │  │   Price   │  │  names, categories,  │   │   │
//! │  │   │ Item, NewItem │  │  "5.00"   │  │  pages, patches      │   │   │
//! │  │   └───────────────┘  └───────────┘  └──────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Row and input types (`ShoppingListItem`, `NewItem`, `ItemPatch`)
//! - [`price`] - Decimal price stored as text, summed in integer cents
//! - [`error`] - Validation error type
//! - [`validation`] - Input rules checked before hitting the database
//!
//! ## Example Usage
//!
//! ```rust
//! use shoplist_core::{NewItem, Price};
//!
//! let price: Price = "3.5".parse().unwrap();
//! assert_eq!(price.to_string(), "3.50");
//!
//! let item = NewItem::new("Bananas", price, "Breakfast").checked(true);
//! assert!(shoplist_core::validation::validate_new_item(&item).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use price::Price;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of rows returned per page by paginated listing.
pub const ITEMS_PER_PAGE: u32 = 6;

/// Maximum length of an item name, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a category label, in characters.
pub const MAX_CATEGORY_LEN: usize = 50;
