//! Catalog entry types.
//!
//! Entries are compiled-in static data, so every field borrows from `'static`
//! storage and prices are whole currency units.

use rust_decimal::Decimal;
use serde::Serialize;

/// A bookable monastery visit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Package {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    /// Base price per booking, whole currency units
    pub price: i64,
    pub rating: f32,
    pub highlights: &'static [&'static str],
}

impl Package {
    pub fn base_price(&self) -> Decimal {
        Decimal::from(self.price)
    }
}

/// Optional extra offered alongside a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddOnService {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: i64,
}

impl AddOnService {
    pub fn unit_price(&self) -> Decimal {
        Decimal::from(self.price)
    }
}

/// Party-size discount tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupSizeBracket {
    pub id: &'static str,
    pub label: &'static str,
    /// Whole percent, 0-100
    pub discount_percent: u32,
}

impl GroupSizeBracket {
    pub fn discount_rate(&self) -> Decimal {
        Decimal::from(self.discount_percent)
    }
}
