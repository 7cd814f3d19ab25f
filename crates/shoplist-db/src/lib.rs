//! # shoplist-db: Database Layer for the Shopping List
//!
//! Storage access for the `shopping_list` table, using SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopping List Data Flow                            │
//! │                                                                         │
//! │  seed / drills binaries, integration tests                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shoplist-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │    Repository      │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │  (item.rs)         │  │ (embedded) │  │   │
//! │  │   │               │    │                    │  │            │  │   │
//! │  │   │ DbConfig      │◄───│ ShoppingList-      │  │ 001_create │  │   │
//! │  │   │ SqlitePool    │    │ Repository         │  │ _shopping_ │  │   │
//! │  │   │               │    │                    │  │ list.sql   │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database named by DATABASE_URL                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Configuration and the `Database` storage handle
//! - [`migrations`] - Embedded schema
//! - [`error`] - Database error types
//! - [`repository`] - Shopping list queries and CRUD
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoplist_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let fish = db.items().search_by_name("fish").await?;
//! let page = db.items().get_all_items_paginated(1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::item::ShoppingListRepository;

/// `EnvFilter` directives the binaries use when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,shoplist_db=debug,sqlx=warn";
