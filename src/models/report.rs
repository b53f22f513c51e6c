use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    CampaignCopy, Identification, LookupResult, SalesSummary, TrendDirection, generate_id,
};

/// Short trend statement derived from the reference table history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTrend {
    pub direction: TrendDirection,
    pub percent_change: Option<f64>,
}

impl PriceTrend {
    /// Human remark used by campaign copy and exports.
    pub fn remark(&self) -> String {
        match (self.direction, self.percent_change) {
            (TrendDirection::Rising, Some(pct)) => {
                format!("Rising, up {:.1}% since the previous observation", pct.abs())
            }
            (TrendDirection::Falling, Some(pct)) => {
                format!("Falling, down {:.1}% since the previous observation", pct.abs())
            }
            (TrendDirection::Rising, None) => "Rising".to_string(),
            (TrendDirection::Falling, None) => "Falling".to_string(),
            (TrendDirection::Stable, _) => "Stable".to_string(),
        }
    }
}

/// Request-scoped context for one analysis run. Everything the generators
/// and export renderers need lives here; nothing is kept in process-wide
/// state beyond the cached reference table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignReport {
    pub id: String,
    pub generated_at: DateTime<Utc>,
    pub identification: Option<Identification>,
    pub lookup: Option<LookupResult>,
    pub trend: Option<PriceTrend>,
    pub sales: Option<SalesSummary>,
    pub copy: Option<CampaignCopy>,
}

impl CampaignReport {
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            generated_at: Utc::now(),
            identification: None,
            lookup: None,
            trend: None,
            sales: None,
            copy: None,
        }
    }

    /// Product label for file names: lowercased, spaces to underscores.
    pub fn file_stem(&self) -> String {
        let base = self
            .identification
            .as_ref()
            .map(|i| i.label.as_str())
            .unwrap_or("campaign");
        base.to_lowercase().replace(' ', "_")
    }
}

impl Default for CampaignReport {
    fn default() -> Self {
        Self::new()
    }
}
