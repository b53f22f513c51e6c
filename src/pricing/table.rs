use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::StringRecord;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::PriceRecord;
use crate::utils::error::{AppError, Result};

/// Accepted header spellings, normalized to the canonical five columns.
const DATE_ALIASES: &[&str] = &["date", "observation_date", "price_date", "obs_date"];
const MARKET_ALIASES: &[&str] = &["market", "market_name", "location"];
const PRODUCT_ALIASES: &[&str] = &["product", "product_name", "commodity", "item"];
const UNIT_ALIASES: &[&str] = &["unit", "uom", "unit_of_measure", "measure"];
const PRICE_ALIASES: &[&str] = &["price", "unit_price", "avg_price", "price_ngn", "mean_price"];

/// A row dropped during ingest, with enough context to report it.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// The read-only reference price table. Loaded once per process; lookups
/// borrow it for the process lifetime.
#[derive(Debug, Clone)]
pub struct PriceTable {
    records: Vec<PriceRecord>,
    row_errors: Vec<RowError>,
    rows_read: usize,
}

impl PriceTable {
    pub fn from_records(records: Vec<PriceRecord>) -> Self {
        let rows_read = records.len();
        Self {
            records,
            row_errors: Vec::new(),
            rows_read,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AppError::NotFound {
            resource: format!("reference table '{}': {}", path.display(), e),
        })?;
        Self::from_reader(file)
    }

    /// Parse the reference dataset. Malformed rows are dropped and recorded;
    /// only an unreadable file or header row is an error.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| AppError::Parse {
                message: format!("failed to read reference table headers: {}", e),
            })?
            .clone();

        let columns = resolve_columns(&headers)?;
        let price_cleaner = price_cleaner();

        let mut records = Vec::new();
        let mut row_errors = Vec::new();
        let mut rows_read = 0usize;

        for (idx, result) in csv_reader.records().enumerate() {
            // Header row is line 1, first record line 2.
            let line = idx + 2;
            rows_read += 1;

            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    row_errors.push(RowError {
                        line,
                        message: format!("CSV parse error: {}", e),
                    });
                    continue;
                }
            };

            match parse_row(&record, &columns, &price_cleaner) {
                Ok(rec) => records.push(rec),
                Err(message) => row_errors.push(RowError { line, message }),
            }
        }

        if !row_errors.is_empty() {
            warn!(
                dropped = row_errors.len(),
                kept = records.len(),
                "reference table rows dropped during load"
            );
        }
        debug!(rows = records.len(), "reference table loaded");

        Ok(Self {
            records,
            row_errors,
            rows_read,
        })
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn row_errors(&self) -> &[RowError] {
        &self.row_errors
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

struct ColumnIndexes {
    date: usize,
    market: usize,
    product: usize,
    unit: usize,
    price: usize,
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnIndexes> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect();

    let find = |aliases: &[&str], canonical: &str| -> Result<usize> {
        aliases
            .iter()
            .find_map(|alias| header_map.get(*alias).copied())
            .ok_or_else(|| AppError::Parse {
                message: format!(
                    "reference table is missing a '{}' column (accepted: {})",
                    canonical,
                    aliases.join(", ")
                ),
            })
    };

    Ok(ColumnIndexes {
        date: find(DATE_ALIASES, "date")?,
        market: find(MARKET_ALIASES, "market")?,
        product: find(PRODUCT_ALIASES, "product")?,
        unit: find(UNIT_ALIASES, "unit")?,
        price: find(PRICE_ALIASES, "price")?,
    })
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM;
    // strip it or the column appears missing.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(
    record: &StringRecord,
    columns: &ColumnIndexes,
    price_cleaner: &Regex,
) -> std::result::Result<PriceRecord, String> {
    let product_name = get_required(record, columns.product, "product")?.to_string();
    let market_name = get_required(record, columns.market, "market")?.to_string();
    let unit = get_required(record, columns.unit, "unit")?.to_string();

    let price_raw = get_required(record, columns.price, "price")?;
    let price = parse_price(price_raw, price_cleaner)
        .ok_or_else(|| format!("non-numeric price '{}'", price_raw))?;

    let date_raw = get_required(record, columns.date, "date")?;
    let observation_date = parse_date(date_raw)?;

    Ok(PriceRecord {
        product_name,
        market_name,
        unit,
        price,
        observation_date,
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    idx: usize,
    name: &str,
) -> std::result::Result<&'a str, String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("missing '{}' value", name))
}

fn price_cleaner() -> Regex {
    // Currency symbols and thousands separators seen in the source data.
    Regex::new(r"[₦$,\s]").expect("static price cleaner regex")
}

fn parse_price(raw: &str, cleaner: &Regex) -> Option<Decimal> {
    let cleaned = cleaner.replace_all(raw, "");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    // ISO dates are recommended, but market data exports commonly use
    // day-first formats as well.
    const FMTS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];
    for fmt in FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    Err(format!("invalid date '{}'", s))
}
