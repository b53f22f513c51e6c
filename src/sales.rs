use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{SalesRecord, SalesSummary};
use crate::utils::error::{AppError, Result};

const PRODUCT_ALIASES: &[&str] = &["product", "product_name", "item"];
const REVENUE_ALIASES: &[&str] = &["revenue", "sales", "total_revenue", "amount"];

pub const DEFAULT_TOP_N: usize = 3;

/// Summarize an uploaded sales sheet: clean the revenue column and keep the
/// top-N products by revenue. Rows with non-numeric revenue are skipped and
/// counted, never fatal.
pub fn summarize_sales_path(path: impl AsRef<Path>, top_n: usize) -> Result<SalesSummary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AppError::NotFound {
        resource: format!("sales sheet '{}': {}", path.display(), e),
    })?;
    summarize_sales(file, top_n)
}

pub fn summarize_sales(reader: impl Read, top_n: usize) -> Result<SalesSummary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AppError::Parse {
            message: format!("failed to read sales sheet headers: {}", e),
        })?
        .clone();

    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            (
                name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase(),
                idx,
            )
        })
        .collect();

    let find = |aliases: &[&str], canonical: &str| -> Result<usize> {
        aliases
            .iter()
            .find_map(|alias| header_map.get(*alias).copied())
            .ok_or_else(|| AppError::Parse {
                message: format!("sales sheet is missing a '{}' column", canonical),
            })
    };
    let product_idx = find(PRODUCT_ALIASES, "Product")?;
    let revenue_idx = find(REVENUE_ALIASES, "Revenue")?;

    // Same cleaning the original sheet needs: naira sign and separators.
    let cleaner = Regex::new(r"[₦,\s]").expect("static revenue cleaner regex");

    let mut records = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for result in csv_reader.records() {
        rows_read += 1;
        let record = match result {
            Ok(r) => r,
            Err(_) => {
                rows_skipped += 1;
                continue;
            }
        };

        let product = record.get(product_idx).map(str::trim).unwrap_or_default();
        let revenue_raw = record.get(revenue_idx).map(str::trim).unwrap_or_default();
        if product.is_empty() || revenue_raw.is_empty() {
            rows_skipped += 1;
            continue;
        }

        let cleaned = cleaner.replace_all(revenue_raw, "");
        match Decimal::from_str(&cleaned) {
            Ok(revenue) => records.push(SalesRecord::new(product, revenue)),
            Err(_) => {
                rows_skipped += 1;
            }
        }
    }

    if rows_skipped > 0 {
        warn!(rows_skipped, "sales rows skipped for non-numeric revenue");
    }

    // Stable sort: revenue ties keep original sheet order.
    records.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    records.truncate(top_n);

    Ok(SalesSummary {
        top_products: records,
        rows_read,
        rows_skipped,
    })
}
