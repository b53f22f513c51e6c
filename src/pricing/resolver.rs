use tracing::{debug, warn};

use crate::models::{LookupResult, MarketChoice, PriceRecord};
use crate::pricing::synonyms::{SynonymMap, SynonymMatch};
use crate::pricing::table::PriceTable;
use crate::utils::error::{AppError, Result};

/// Best-effort price lookup over the reference table, with a deterministic
/// precedence of match strategies:
///
/// 1. exact product-name match
/// 2. synonym resolution (an explicit "too generic" entry short-circuits)
/// 3. substring match against the canonical name
/// 4. broad substring fallback, only for labels the synonym map knows
/// 5. latest-observation-date slice
/// 6. market-priority selection, else first row of the slice in table order
///
/// Pure and single-threaded; one table, one caller, no shared mutable state.
pub struct PriceResolver {
    synonyms: SynonymMap,
    preferred_markets: Vec<String>,
}

impl PriceResolver {
    pub fn new(synonyms: SynonymMap, preferred_markets: Vec<String>) -> Self {
        Self {
            synonyms,
            preferred_markets,
        }
    }

    /// Resolve a free-text label to a price. Never fails: every failure mode
    /// is converted to a `LookupResult` status at this boundary.
    pub fn resolve(&self, label: &str, table: &PriceTable) -> LookupResult {
        match self.resolve_inner(label, table) {
            Ok(result) => result,
            Err(e) => {
                warn!(label, error = %e, "price lookup failed internally");
                LookupResult::error()
            }
        }
    }

    fn resolve_inner(&self, label: &str, table: &PriceTable) -> Result<LookupResult> {
        if table.is_empty() {
            return Ok(LookupResult::data_unavailable());
        }

        let normalized = label.trim().to_lowercase();

        // An explicit "too generic" marker always wins, even over a literal
        // table row with the same name.
        let canonical = match self.synonyms.resolve(&normalized) {
            SynonymMatch::TooGeneric => {
                debug!(label, "label marked too generic; no further search");
                return Ok(LookupResult::too_generic());
            }
            SynonymMatch::Canonical(name) => Some(name),
            SynonymMatch::Unmapped => None,
        };

        // Exact product-name match wins over synonym redirection.
        let mut matched: Vec<&PriceRecord> = table
            .records()
            .iter()
            .filter(|r| r.product_matches(&normalized))
            .collect();

        if matched.is_empty() {
            // Unknown vocabulary gets no further search.
            let Some(canonical) = canonical else {
                return Ok(LookupResult::product_not_found());
            };
            let canonical_norm = canonical.trim().to_lowercase();

            matched = table
                .records()
                .iter()
                .filter(|r| r.product_matches(&canonical_norm))
                .collect();

            if matched.is_empty() {
                matched = table
                    .records()
                    .iter()
                    .filter(|r| r.product_contains(&canonical_norm))
                    .collect();
            }

            if matched.is_empty() {
                // The label had a mapping entry, so a broad substring pass
                // with the original label is allowed.
                matched = table
                    .records()
                    .iter()
                    .filter(|r| r.product_contains(&normalized))
                    .collect();
            }

            if matched.is_empty() {
                return Ok(LookupResult::product_not_found());
            }
        }

        let latest = matched
            .iter()
            .map(|r| r.observation_date)
            .max()
            .ok_or_else(|| AppError::Internal("empty match set after filtering".to_string()))?;

        // Latest slice keeps original table order.
        let latest_slice: Vec<&PriceRecord> = matched
            .into_iter()
            .filter(|r| r.observation_date == latest)
            .collect();

        for market in &self.preferred_markets {
            if let Some(row) = latest_slice.iter().find(|r| r.market_contains(market)) {
                return Ok(Self::found(row, MarketChoice::Preferred));
            }
        }

        let row = latest_slice.first().ok_or_else(|| {
            AppError::Internal("latest slice unexpectedly empty".to_string())
        })?;
        Ok(Self::found(row, MarketChoice::Fallback))
    }

    fn found(record: &PriceRecord, choice: MarketChoice) -> LookupResult {
        LookupResult::found(
            record.product_name.clone(),
            record.price,
            record.unit.clone(),
            record.market_name.clone(),
            choice,
            record.observation_date,
        )
    }
}
