//! # Validation Module
//!
//! Input rules checked by the repository before it issues a statement.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Parsing (Price::from_str, serde)                             │
//! │  └── "1.234" never becomes a Price                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name / category present and bounded                               │
//! │  ├── price not negative                                                │
//! │  └── page numbers start at 1, patches change something                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoplist_core::validation::{validate_item_name, validate_page_number};
//!
//! assert!(validate_item_name("Fish filet").is_ok());
//! assert!(validate_page_number(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::price::Price;
use crate::types::{ItemPatch, NewItem};
use crate::{MAX_CATEGORY_LEN, MAX_NAME_LEN};

pub use crate::error::ValidationResult;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a trimmed value is present and at most `max` characters.
fn validate_bounded(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_bounded("name", name, MAX_NAME_LEN)
}

/// Validates a category label.
///
/// Any label is accepted (see [`crate::types::category`] for the common
/// ones) as long as it is present and at most [`MAX_CATEGORY_LEN`] characters.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_bounded("category", category, MAX_CATEGORY_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price for storage.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use shoplist_core::{validation::validate_price, Price};
///
/// assert!(validate_price(Price::from_cents(500)).is_ok());
/// assert!(validate_price(Price::zero()).is_ok());
/// assert!(validate_price(Price::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Price) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a 1-based page number.
pub fn validate_page_number(page: u32) -> ValidationResult<()> {
    if page == 0 {
        return Err(ValidationError::OutOfRange {
            field: "page".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }

    Ok(())
}

// =============================================================================
// Item Validators
// =============================================================================

/// Validates every caller-supplied field of a new item.
pub fn validate_new_item(item: &NewItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_price(item.price)?;
    validate_category(&item.category)?;
    Ok(())
}

/// Validates the fields a patch would change.
///
/// ## Rules
/// - At least one field must be set
/// - Each set field follows the same rules as on insert
pub fn validate_patch(patch: &ItemPatch) -> ValidationResult<()> {
    if patch.is_empty() {
        return Err(ValidationError::EmptyPatch);
    }

    if let Some(name) = &patch.name {
        validate_item_name(name)?;
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    if let Some(category) = &patch.category {
        validate_category(category)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::category;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Fish filet").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_item_name(&"A".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_category_accepts_any_label() {
        for label in category::ALL {
            assert!(validate_category(label).is_ok());
        }
        assert!(validate_category("Dessert").is_ok());
        assert!(validate_category("").is_err());
        assert!(validate_category(&"c".repeat(MAX_CATEGORY_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_page_number() {
        assert!(validate_page_number(1).is_ok());
        assert!(validate_page_number(42).is_ok());
        assert!(matches!(
            validate_page_number(0),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_new_item() {
        let item = NewItem::new("Avocado", Price::from_cents(500), category::MAIN);
        assert!(validate_new_item(&item).is_ok());

        let nameless = NewItem::new(" ", Price::from_cents(500), category::MAIN);
        assert_eq!(
            validate_new_item(&nameless),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );

        let negative = NewItem::new("Avocado", Price::from_cents(-1), category::MAIN);
        assert!(validate_new_item(&negative).is_err());
    }

    #[test]
    fn test_validate_patch() {
        assert_eq!(
            validate_patch(&ItemPatch::new()),
            Err(ValidationError::EmptyPatch)
        );
        assert!(validate_patch(&ItemPatch::new().checked(true)).is_ok());
        assert!(validate_patch(&ItemPatch::new().category("")).is_err());
        assert!(validate_patch(&ItemPatch::new().price(Price::from_cents(-5))).is_err());
    }
}
