use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observation from the reference price dataset. Loaded in bulk at
/// startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRecord {
    pub product_name: String,
    pub market_name: String,
    pub unit: String,
    pub price: Decimal,
    pub observation_date: NaiveDate,
}

impl PriceRecord {
    pub fn new(
        product_name: impl Into<String>,
        market_name: impl Into<String>,
        unit: impl Into<String>,
        price: Decimal,
        observation_date: NaiveDate,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            market_name: market_name.into(),
            unit: unit.into(),
            price,
            observation_date,
        }
    }

    /// Case-insensitive equality against a normalized label.
    pub fn product_matches(&self, normalized_label: &str) -> bool {
        self.product_name.trim().eq_ignore_ascii_case(normalized_label)
    }

    /// Case-insensitive containment of `needle` in the product name.
    pub fn product_contains(&self, needle: &str) -> bool {
        self.product_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Case-insensitive containment of `needle` in the market name.
    pub fn market_contains(&self, needle: &str) -> bool {
        self.market_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}
