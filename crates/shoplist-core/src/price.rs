//! # Price Module
//!
//! Provides the `Price` type: a decimal amount with two fractional digits,
//! stored as text (`"5.00"`) and held in memory as integer cents.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As f64:   3.50 + 1.30 + 8.00 = 12.799999999999999  ❌                  │
//! │                                                                         │
//! │  As cents:  350 +  130 +  800 = 1280 → "12.80"       ✅                 │
//! │                                                                         │
//! │  The column is text so the stored value reads as a decimal              │
//! │  ("5.00", not 5.0). Arithmetic happens on integer cents.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shoplist_core::price::Price;
//!
//! let price: Price = "5.5".parse().unwrap();
//! assert_eq!(price.cents(), 550);
//! assert_eq!(price.to_string(), "5.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Price Type
// =============================================================================

/// A price in cents, rendered and stored as a two-decimal string.
///
/// ## Accepted Input
/// ```text
/// "5"      → 500   → "5.00"
/// "5.5"    → 550   → "5.50"
/// "5.05"   → 505   → "5.05"
/// "-1.30"  → -130  → "-1.30"
/// "1.234"  → error (more than two decimal places)
/// "abc"    → error
/// ""       → error (required)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(i64);

impl Price {
    /// Creates a price from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero price.
    #[inline]
    pub const fn zero() -> Self {
        Price(0)
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Parses the decimal text form into cents.
fn parse_cents(input: &str) -> Result<i64, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    };

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.is_empty() {
                return Err(invalid("expected digits after the decimal point"));
            }
            (whole, fraction)
        }
        None => (unsigned, ""),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected a decimal number such as 5.00"));
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected a decimal number such as 5.00"));
    }
    if fraction.len() > 2 {
        return Err(invalid("at most two decimal places are allowed"));
    }

    let whole: i64 = whole
        .parse()
        .map_err(|_| invalid("value is out of range"))?;

    // "5" → 0, "5.5" → 50, "5.05" → 5
    let fraction_cents = match fraction.len() {
        0 => 0,
        1 => i64::from(fraction.as_bytes()[0] - b'0') * 10,
        _ => i64::from(fraction.as_bytes()[0] - b'0') * 10 + i64::from(fraction.as_bytes()[1] - b'0'),
    };

    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction_cents))
        .ok_or_else(|| invalid("value is out of range"))?;

    Ok(if negative { -cents } else { cents })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Canonical text form: optional sign, whole part, exactly two decimals.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cents(s.trim()).map(Price)
    }
}

impl TryFrom<String> for Price {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

// =============================================================================
// sqlx Integration
// =============================================================================

/// Stores prices in a TEXT column using the canonical two-decimal form.
#[cfg(feature = "sqlx")]
mod sqlx_impl {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
    use sqlx::{Decode, Encode, Type};

    use super::Price;

    impl Type<Sqlite> for Price {
        fn type_info() -> SqliteTypeInfo {
            <String as Type<Sqlite>>::type_info()
        }

        fn compatible(ty: &SqliteTypeInfo) -> bool {
            <String as Type<Sqlite>>::compatible(ty)
        }
    }

    impl<'q> Encode<'q, Sqlite> for Price {
        fn encode_by_ref(
            &self,
            buf: &mut <Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
        ) -> Result<IsNull, BoxDynError> {
            <String as Encode<'q, Sqlite>>::encode(self.to_string(), buf)
        }
    }

    impl<'r> Decode<'r, Sqlite> for Price {
        fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
            let text = <&str as Decode<'r, Sqlite>>::decode(value)?;
            Ok(text.parse()?)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
