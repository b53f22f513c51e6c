use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{LookupResult, PriceRecord, PriceTrend, TrendDirection};
use crate::pricing::table::PriceTable;

/// Derive a trend remark for a resolved product by comparing the looked-up
/// price against the most recent earlier observation. Same-market history is
/// preferred; any market is used otherwise. Returns `None` when there is no
/// earlier observation to compare against.
pub fn derive_trend(table: &PriceTable, lookup: &LookupResult) -> Option<PriceTrend> {
    if !lookup.has_price() {
        return None;
    }
    let product = lookup.product_name.as_deref()?;
    let latest_date = lookup.observation_date?;
    let latest_price = lookup.price?;
    let market = lookup.market_label.as_deref();

    let earlier: Vec<&PriceRecord> = table
        .records()
        .iter()
        .filter(|r| r.product_matches(product) && r.observation_date < latest_date)
        .collect();
    if earlier.is_empty() {
        return None;
    }

    let same_market: Vec<&PriceRecord> = earlier
        .iter()
        .filter(|r| Some(r.market_name.as_str()) == market)
        .copied()
        .collect();
    let pool = if same_market.is_empty() {
        earlier
    } else {
        same_market
    };

    // Most recent earlier observation; ties resolve to the first row in
    // original table order.
    let previous_date = pool.iter().map(|r| r.observation_date).max()?;
    let previous = pool
        .into_iter()
        .find(|r| r.observation_date == previous_date)?;

    Some(compare(previous.price, latest_price))
}

fn compare(previous: Decimal, latest: Decimal) -> PriceTrend {
    let direction = if latest > previous {
        TrendDirection::Rising
    } else if latest < previous {
        TrendDirection::Falling
    } else {
        TrendDirection::Stable
    };

    let difference = latest - previous;
    let percent_change = if !previous.is_zero() {
        (difference / previous * Decimal::from(100)).to_f64()
    } else {
        None
    };

    PriceTrend {
        direction,
        percent_change,
    }
}
