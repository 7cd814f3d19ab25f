//! Repository behavior against a fresh in-memory database per test.

use chrono::{DateTime, Duration, Utc};
use shoplist_core::{category, CategoryTotal, ItemPatch, NewItem, Price, ShoppingListItem, ValidationError};
use shoplist_db::{Database, DbConfig, DbError, ShoppingListRepository};

async fn setup() -> (Database, ShoppingListRepository) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let items = db.items();
    items.truncate().await.unwrap();
    (db, items)
}

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap()
}

fn price(s: &str) -> Price {
    s.parse().unwrap()
}

fn avocado() -> NewItem {
    NewItem::new("Avocado", price("5.00"), category::MAIN).date_added(at("2029-01-22T16:28:32.615Z"))
}

fn bananas() -> NewItem {
    NewItem::new("Bananas", price("3.50"), category::BREAKFAST)
        .checked(true)
        .date_added(at("2027-02-22T16:28:32.615Z"))
}

fn apples() -> NewItem {
    NewItem::new("Apples", price("1.30"), category::LUNCH).date_added(at("2023-12-22T16:28:32.615Z"))
}

fn oranges() -> NewItem {
    NewItem::new("Oranges", price("8.00"), category::SNACK).date_added(at("2019-01-17T16:28:32.615Z"))
}

/// Inserts the four fixture rows, which receive ids 1 to 4.
async fn insert_fixtures(items: &ShoppingListRepository) -> Vec<ShoppingListItem> {
    let mut inserted = Vec::new();
    for item in [avocado(), bananas(), apples(), oranges()] {
        inserted.push(items.insert_item(&item).await.unwrap());
    }
    inserted
}

fn names(items: &[ShoppingListItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

// =============================================================================
// CRUD
// =============================================================================

#[tokio::test]
async fn get_all_items_on_empty_table_is_empty() {
    let (_db, items) = setup().await;

    assert!(items.get_all_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_returns_row_with_generated_id() {
    let (_db, items) = setup().await;

    let inserted = items.insert_item(&avocado()).await.unwrap();

    assert_eq!(inserted.id, 1);
    assert_eq!(inserted.name, "Avocado");
    assert_eq!(inserted.price.to_string(), "5.00");
    assert_eq!(inserted.category, "Main");
    assert!(!inserted.checked);
    assert_eq!(inserted.date_added, at("2029-01-22T16:28:32.615Z"));

    assert_eq!(items.get_all_items().await.unwrap(), vec![inserted]);
}

#[tokio::test]
async fn insert_defaults_date_added_to_now() {
    let (_db, items) = setup().await;
    let before = Utc::now();

    let inserted = items
        .insert_item(&NewItem::new("Milk", price("2.49"), category::BREAKFAST))
        .await
        .unwrap();

    assert!(inserted.date_added >= before);
    assert!(inserted.date_added <= Utc::now());
}

#[tokio::test]
async fn insert_stores_name_and_category_as_given() {
    let (_db, items) = setup().await;

    let inserted = items
        .insert_item(&NewItem::new(" Kale", price("2.00"), "Lunch "))
        .await
        .unwrap();

    assert_eq!(inserted.name, " Kale");
    assert_eq!(inserted.category, "Lunch ");

    let stored = items.get_by_id(inserted.id).await.unwrap().unwrap();
    assert_eq!(stored, inserted);
}

#[tokio::test]
async fn update_stores_name_as_given() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;

    let patch = ItemPatch::new().name("Ripe avocado  ");
    assert_eq!(items.update_item(1, &patch).await.unwrap(), 1);

    let updated = items.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(updated.name, "Ripe avocado  ");
}

#[tokio::test]
async fn get_by_id_finds_row_or_none() {
    let (_db, items) = setup().await;
    let fixtures = insert_fixtures(&items).await;

    assert_eq!(items.get_by_id(2).await.unwrap(), Some(fixtures[1].clone()));
    assert_eq!(items.get_by_id(99).await.unwrap(), None);
}

#[tokio::test]
async fn delete_removes_only_that_row_and_keeps_order() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;

    assert_eq!(items.delete_item(2).await.unwrap(), 1);

    let remaining = items.get_all_items().await.unwrap();
    assert_eq!(names(&remaining), vec!["Avocado", "Apples", "Oranges"]);
    assert_eq!(items.get_by_id(2).await.unwrap(), None);
}

#[tokio::test]
async fn delete_missing_id_affects_nothing() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;

    assert_eq!(items.delete_item(42).await.unwrap(), 0);
    assert_eq!(items.count().await.unwrap(), 4);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;

    let replacement = NewItem::new("Blood oranges", price("9.25"), category::LUNCH)
        .checked(true)
        .date_added(at("2024-06-01T08:00:00Z"));

    assert_eq!(items.update_item(4, &ItemPatch::from(replacement)).await.unwrap(), 1);

    let updated = items.get_by_id(4).await.unwrap().unwrap();
    assert_eq!(updated.id, 4);
    assert_eq!(updated.name, "Blood oranges");
    assert_eq!(updated.price, price("9.25"));
    assert_eq!(updated.category, "Lunch");
    assert!(updated.checked);
    assert_eq!(updated.date_added, at("2024-06-01T08:00:00Z"));
}

#[tokio::test]
async fn update_with_partial_patch_keeps_other_fields() {
    let (_db, items) = setup().await;
    let fixtures = insert_fixtures(&items).await;

    let patch = ItemPatch::new().checked(true).price(price("4.75"));
    assert_eq!(items.update_item(1, &patch).await.unwrap(), 1);

    let updated = items.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(updated, patch.apply_to(&fixtures[0]));
    assert_eq!(updated.name, "Avocado");
    assert_eq!(updated.price.to_string(), "4.75");
    assert!(updated.checked);

    // Other rows are untouched
    assert_eq!(items.get_by_id(2).await.unwrap(), Some(fixtures[1].clone()));
}

#[tokio::test]
async fn update_missing_id_affects_nothing() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;

    let patch = ItemPatch::new().name("Ghost");
    assert_eq!(items.update_item(42, &patch).await.unwrap(), 0);
    assert!(items.search_by_name("ghost").await.unwrap().is_empty());
}

#[tokio::test]
async fn truncate_restarts_ids() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;

    assert_eq!(items.truncate().await.unwrap(), 4);
    assert_eq!(items.count().await.unwrap(), 0);

    let inserted = items.insert_item(&apples()).await.unwrap();
    assert_eq!(inserted.id, 1);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;
    items
        .insert_item(&NewItem::new("Fish filet", price("12.99"), category::MAIN))
        .await
        .unwrap();

    let found = items.search_by_name("fish").await.unwrap();
    assert_eq!(names(&found), vec!["Fish filet"]);

    let found = items.search_by_name("AN").await.unwrap();
    assert_eq!(names(&found), vec!["Bananas", "Oranges"]);

    assert!(items.search_by_name("kiwi").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_with_empty_term_matches_everything() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;

    assert_eq!(items.search_by_name("").await.unwrap().len(), 4);
}

#[tokio::test]
async fn search_keeps_surrounding_whitespace_in_term() {
    let (_db, items) = setup().await;
    for name in ["Fish filet", "Swordfish"] {
        items
            .insert_item(&NewItem::new(name, price("9.99"), category::MAIN))
            .await
            .unwrap();
    }

    let found = items.search_by_name("fish ").await.unwrap();
    assert_eq!(names(&found), vec!["Fish filet"]);

    let found = items.search_by_name(" fish").await.unwrap();
    assert_eq!(names(&found), vec!["Swordfish"]);

    assert!(items.search_by_name("   ").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;
    items
        .insert_item(&NewItem::new("Juice 100% orange", price("3.10"), category::BREAKFAST))
        .await
        .unwrap();

    let found = items.search_by_name("%").await.unwrap();
    assert_eq!(names(&found), vec!["Juice 100% orange"]);

    assert!(items.search_by_name("_").await.unwrap().is_empty());
}

// =============================================================================
// Pagination
// =============================================================================

#[tokio::test]
async fn pages_hold_six_items_in_id_order() {
    let (_db, items) = setup().await;
    for n in 1..=8 {
        items
            .insert_item(&NewItem::new(format!("Item {n}"), price("1.00"), category::SNACK))
            .await
            .unwrap();
    }

    let first = items.get_all_items_paginated(1).await.unwrap();
    let ids: Vec<i64> = first.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let second = items.get_all_items_paginated(2).await.unwrap();
    assert_eq!(names(&second), vec!["Item 7", "Item 8"]);

    assert!(items.get_all_items_paginated(3).await.unwrap().is_empty());
}

#[tokio::test]
async fn page_zero_is_rejected() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;

    assert!(matches!(
        items.get_all_items_paginated(0).await,
        Err(DbError::Validation(_))
    ));
}

// =============================================================================
// Recent Items
// =============================================================================

#[tokio::test]
async fn recent_items_are_newer_than_the_cutoff() {
    let (_db, items) = setup().await;
    let now = Utc::now();

    for (name, days_ago) in [("Old bread", 30), ("Yogurt", 5), ("Coffee", 1)] {
        items
            .insert_item(
                &NewItem::new(name, price("2.00"), category::BREAKFAST)
                    .date_added(now - Duration::days(days_ago)),
            )
            .await
            .unwrap();
    }

    let recent = items.get_recent_items(7).await.unwrap();
    assert_eq!(names(&recent), vec!["Coffee", "Yogurt"]);

    let recent = items.get_recent_items(2).await.unwrap();
    assert_eq!(names(&recent), vec!["Coffee"]);

    assert_eq!(items.get_recent_items(365).await.unwrap().len(), 3);
}

#[tokio::test]
async fn recent_items_include_future_dates_newest_first() {
    let (_db, items) = setup().await;
    let now = Utc::now();

    for (name, offset) in [("Yesterday", -1), ("Next week", 7), ("Tomorrow", 1)] {
        items
            .insert_item(
                &NewItem::new(name, price("1.00"), category::LUNCH)
                    .date_added(now + Duration::days(offset)),
            )
            .await
            .unwrap();
    }

    let recent = items.get_recent_items(0).await.unwrap();
    assert_eq!(names(&recent), vec!["Next week", "Tomorrow"]);

    let everything = items.get_recent_items(u32::MAX).await.unwrap();
    assert_eq!(names(&everything), vec!["Next week", "Tomorrow", "Yesterday"]);
}

// =============================================================================
// Total Cost
// =============================================================================

#[tokio::test]
async fn total_cost_sums_per_category() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;
    items
        .insert_item(&NewItem::new("Pasta", price("3.50"), category::MAIN))
        .await
        .unwrap();

    let totals = items.total_cost().await.unwrap();

    let expected: Vec<CategoryTotal> = [
        ("Breakfast", "3.50"),
        ("Lunch", "1.30"),
        ("Main", "8.50"),
        ("Snack", "8.00"),
    ]
    .into_iter()
    .map(|(category, total)| CategoryTotal {
        category: category.to_string(),
        total: price(total),
    })
    .collect();

    assert_eq!(totals, expected);
}

#[tokio::test]
async fn total_cost_has_no_float_drift() {
    let (_db, items) = setup().await;
    for _ in 0..10 {
        items
            .insert_item(&NewItem::new("Gum", price("0.10"), category::SNACK))
            .await
            .unwrap();
    }

    let totals = items.total_cost().await.unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].total.to_string(), "1.00");
}

#[tokio::test]
async fn total_cost_is_exact_for_large_prices() {
    let (_db, items) = setup().await;
    for amount in ["90071992547409.93", "0.01"] {
        items
            .insert_item(&NewItem::new("Yacht", price(amount), category::MAIN))
            .await
            .unwrap();
    }

    let totals = items.total_cost().await.unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].total.cents(), 9_007_199_254_740_994);
    assert_eq!(totals[0].total.to_string(), "90071992547409.94");
}

#[tokio::test]
async fn total_cost_on_empty_table_is_empty() {
    let (_db, items) = setup().await;

    assert!(items.total_cost().await.unwrap().is_empty());
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn invalid_items_are_rejected_before_storage() {
    let (_db, items) = setup().await;

    let blank_name = NewItem::new("  ", price("1.00"), category::MAIN);
    assert!(matches!(
        items.insert_item(&blank_name).await,
        Err(DbError::Validation(ValidationError::Required { .. }))
    ));

    let long_name = NewItem::new("x".repeat(201), price("1.00"), category::MAIN);
    assert!(matches!(
        items.insert_item(&long_name).await,
        Err(DbError::Validation(ValidationError::TooLong { .. }))
    ));

    let negative = NewItem::new("Refund", price("-1.30"), category::MAIN);
    assert!(matches!(
        items.insert_item(&negative).await,
        Err(DbError::Validation(_))
    ));

    assert_eq!(items.count().await.unwrap(), 0);
}

#[tokio::test]
async fn empty_patch_is_rejected() {
    let (_db, items) = setup().await;
    insert_fixtures(&items).await;

    assert!(matches!(
        items.update_item(1, &ItemPatch::new()).await,
        Err(DbError::Validation(ValidationError::EmptyPatch))
    ));
}
