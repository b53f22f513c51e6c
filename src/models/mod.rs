use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod campaign;
pub mod identification;
pub mod lookup_result;
pub mod price_record;
pub mod report;
pub mod sales;

// Re-exports for convenience
pub use campaign::*;
pub use identification::*;
pub use lookup_result::*;
pub use price_record::*;
pub use report::*;
pub use sales::*;

// Common enums used across models
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    Found,
    ProductNotFound,
    TooGeneric,
    DataUnavailable,
    Error,
}

/// How the market row was chosen within the latest slice: a preferred market
/// matched, or the selection fell back to the first row in table order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarketChoice {
    Preferred,
    Fallback,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

// Helper function to generate report ids
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
