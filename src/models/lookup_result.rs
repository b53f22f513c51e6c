use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LookupStatus, MarketChoice};

/// Outcome of a single price lookup. Constructed fresh per query; every
/// failure mode is expressed as a status, never as an error to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupResult {
    pub status: LookupStatus,
    /// Canonical product name of the matched row, when one was found.
    pub product_name: Option<String>,
    pub price: Option<Decimal>,
    pub unit: Option<String>,
    pub market_label: Option<String>,
    pub market_choice: Option<MarketChoice>,
    pub observation_date: Option<NaiveDate>,
}

impl LookupResult {
    pub fn found(
        product_name: impl Into<String>,
        price: Decimal,
        unit: impl Into<String>,
        market_label: impl Into<String>,
        market_choice: MarketChoice,
        observation_date: NaiveDate,
    ) -> Self {
        Self {
            status: LookupStatus::Found,
            product_name: Some(product_name.into()),
            price: Some(price),
            unit: Some(unit.into()),
            market_label: Some(market_label.into()),
            market_choice: Some(market_choice),
            observation_date: Some(observation_date),
        }
    }

    pub fn product_not_found() -> Self {
        Self::with_status(LookupStatus::ProductNotFound)
    }

    pub fn too_generic() -> Self {
        Self::with_status(LookupStatus::TooGeneric)
    }

    pub fn data_unavailable() -> Self {
        Self::with_status(LookupStatus::DataUnavailable)
    }

    pub fn error() -> Self {
        Self::with_status(LookupStatus::Error)
    }

    fn with_status(status: LookupStatus) -> Self {
        Self {
            status,
            product_name: None,
            price: None,
            unit: None,
            market_label: None,
            market_choice: None,
            observation_date: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == LookupStatus::Found
    }

    /// Whether downstream content generation can use a price. `Error` is
    /// treated identically to "no price available".
    pub fn has_price(&self) -> bool {
        self.is_found() && self.price.is_some()
    }

    /// Market label with the fallback annotation, or the N/A placeholder.
    pub fn display_market(&self) -> String {
        match (&self.market_label, self.market_choice) {
            (Some(label), Some(MarketChoice::Fallback)) => format!("{} (fallback market)", label),
            (Some(label), _) => label.clone(),
            (None, _) => "N/A".to_string(),
        }
    }

    /// "3000/kg" style price string, or the N/A placeholder.
    pub fn display_price(&self) -> String {
        match (&self.price, &self.unit) {
            (Some(price), Some(unit)) => format!("{}/{}", price, unit),
            (Some(price), None) => price.to_string(),
            _ => "N/A".to_string(),
        }
    }

    pub fn display_date(&self) -> String {
        self.observation_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}
