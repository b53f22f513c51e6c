use std::fmt::Write as _;

use crate::models::CampaignReport;
use crate::providers::traits::{ExportRenderer, RenderedExport};

const CURRENCY: &str = "₦";

/// Plain-text export of the campaign report. Pure string substitution.
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportRenderer for TextRenderer {
    fn name(&self) -> &str {
        "Text Renderer"
    }

    fn format(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain-text campaign copy export"
    }

    fn file_name(&self, report: &CampaignReport) -> String {
        format!(
            "{}_campaign_{}.txt",
            report.file_stem(),
            report.generated_at.format("%Y%m%d")
        )
    }

    fn render(
        &self,
        report: &CampaignReport,
    ) -> Result<RenderedExport, Box<dyn std::error::Error + Send + Sync>> {
        let mut body = String::new();

        writeln!(body, "--- AgroBrand Campaign Suggestions ---")?;
        writeln!(
            body,
            "Generated on: {} WAT",
            report.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(body)?;

        match &report.identification {
            Some(identification) => writeln!(
                body,
                "Product: {} ({})",
                identification.label,
                identification.confidence_percent()
            )?,
            None => writeln!(body, "Product: N/A")?,
        }

        match &report.lookup {
            Some(lookup) if lookup.has_price() => {
                writeln!(
                    body,
                    "Price ({}): {}{}",
                    lookup.display_market(),
                    CURRENCY,
                    lookup.display_price()
                )?;
                writeln!(body, "Observed: {}", lookup.display_date())?;
            }
            _ => writeln!(body, "Price: N/A")?,
        }

        match &report.trend {
            Some(trend) => writeln!(body, "Market Trend: {}", trend.remark())?,
            None => writeln!(body, "Market Trend: N/A")?,
        }

        if let Some(sales) = &report.sales {
            if !sales.is_empty() {
                writeln!(body)?;
                writeln!(body, "Top Products by Revenue:")?;
                for record in &sales.top_products {
                    writeln!(body, "- {}: {}{}", record.product, CURRENCY, record.revenue)?;
                }
            }
        }

        writeln!(body)?;
        match &report.copy {
            Some(copy) => {
                writeln!(body, "Headline:\n{}\n", copy.headline)?;
                writeln!(body, "Body Text:\n{}\n", copy.body)?;
                writeln!(body, "Call to Action (CTA):\n{}\n", copy.cta)?;
                writeln!(body, "Hashtags:\n{}", copy.hashtags)?;
            }
            None => writeln!(body, "Campaign content: N/A")?,
        }

        writeln!(body)?;
        writeln!(body, "--- Generated by AgroBrand ---")?;

        Ok(RenderedExport {
            file_name: self.file_name(report),
            content_type: "text/plain".to_string(),
            body,
        })
    }
}
