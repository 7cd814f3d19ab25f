//! # Repository Module
//!
//! Database repository for the shopping list.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Caller (binary, test)                                                 │
//! │       │                                                                 │
//! │       │  db.items().search_by_name("fish")                             │
//! │       ▼                                                                 │
//! │  ShoppingListRepository                                                │
//! │  ├── search_by_name / get_all_items_paginated                          │
//! │  ├── get_recent_items / total_cost                                     │
//! │  └── get_all_items / get_by_id / insert / update / delete              │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite: shopping_list                                                 │
//! │                                                                         │
//! │  All SQL for the table lives in one place.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod item;
