//! Price representation in minor currency units.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A catalog price, stored as an integral amount of the smallest currency
/// unit (e.g. cents, won).
///
/// Arithmetic on prices is deliberately limited: catalog and order code only
/// ever stores and echoes prices, so no currency math beyond construction is
/// exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "postgres", derive(::sqlx::Type))]
#[cfg_attr(feature = "postgres", sqlx(transparent))]
pub struct Price(i64);

impl Price {
    /// Create a price from an amount in minor units.
    #[must_use]
    pub const fn from_minor_units(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_roundtrip() {
        let price = Price::from_minor_units(10_000);
        assert_eq!(price.minor_units(), 10_000);
    }

    #[test]
    fn test_price_serde_is_bare_number() {
        let price = Price::from_minor_units(20_000);
        assert_eq!(serde_json::to_string(&price).expect("serialize"), "20000");
        let back: Price = serde_json::from_str("20000").expect("deserialize");
        assert_eq!(back, price);
    }
}
