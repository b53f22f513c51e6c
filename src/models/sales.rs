use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cleaned row from the uploaded sales sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesRecord {
    pub product: String,
    pub revenue: Decimal,
}

impl SalesRecord {
    pub fn new(product: impl Into<String>, revenue: Decimal) -> Self {
        Self {
            product: product.into(),
            revenue,
        }
    }
}

/// Top-N-by-revenue summary of the sales sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesSummary {
    pub top_products: Vec<SalesRecord>,
    pub rows_read: usize,
    /// Rows dropped because the revenue cell was not numeric.
    pub rows_skipped: usize,
}

impl SalesSummary {
    pub fn is_empty(&self) -> bool {
        self.top_products.is_empty()
    }
}
