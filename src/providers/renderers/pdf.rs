use serde_json::json;

use crate::models::CampaignReport;
use crate::providers::traits::{ExportRenderer, RenderedExport};

const CURRENCY: &str = "₦";

/// Builds the layout document the external PDF surface consumes: a titled
/// sequence of sections with labeled lines, an image slot flag, and a
/// footer. Byte-level PDF generation happens outside this crate.
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }

    fn info_section(&self, report: &CampaignReport) -> serde_json::Value {
        let product = report
            .identification
            .as_ref()
            .map(|i| format!("{} ({})", i.label, i.confidence_percent()))
            .unwrap_or_else(|| "N/A".to_string());
        let condition = report
            .identification
            .as_ref()
            .and_then(|i| i.condition.clone())
            .unwrap_or_else(|| "N/A".to_string());

        let (price, market, observed) = match &report.lookup {
            Some(lookup) if lookup.has_price() => (
                format!("{}{}", CURRENCY, lookup.display_price()),
                lookup.display_market(),
                lookup.display_date(),
            ),
            _ => ("N/A".to_string(), "N/A".to_string(), "N/A".to_string()),
        };
        let trend = report
            .trend
            .as_ref()
            .map(|t| t.remark())
            .unwrap_or_else(|| "N/A".to_string());

        json!({
            "heading": "Product & Market Information",
            "lines": [
                {"label": "Product", "value": product},
                {"label": "Condition", "value": condition},
                {"label": format!("Price ({})", market), "value": price},
                {"label": "Observed", "value": observed},
                {"label": "Market Trend", "value": trend},
            ]
        })
    }

    fn copy_section(&self, report: &CampaignReport) -> serde_json::Value {
        let lines = match &report.copy {
            Some(copy) => vec![
                json!({"label": "Headline", "value": copy.headline}),
                json!({"label": "Body Text", "value": copy.body}),
                json!({"label": "Call to Action (CTA)", "value": copy.cta}),
                json!({"label": "Hashtags", "value": copy.hashtags}),
            ],
            None => vec![json!({"label": "Campaign content", "value": "N/A"})],
        };

        json!({
            "heading": "Generated Campaign Content",
            "lines": lines
        })
    }

    fn sales_section(&self, report: &CampaignReport) -> Option<serde_json::Value> {
        let sales = report.sales.as_ref().filter(|s| !s.is_empty())?;
        let lines: Vec<serde_json::Value> = sales
            .top_products
            .iter()
            .map(|record| {
                json!({
                    "label": record.product,
                    "value": format!("{}{}", CURRENCY, record.revenue)
                })
            })
            .collect();

        Some(json!({
            "heading": "Top Products by Revenue",
            "lines": lines
        }))
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportRenderer for PdfRenderer {
    fn name(&self) -> &str {
        "PDF Renderer"
    }

    fn format(&self) -> &str {
        "pdf"
    }

    fn description(&self) -> &str {
        "Campaign report layout document for the PDF surface"
    }

    fn file_name(&self, report: &CampaignReport) -> String {
        format!(
            "{}_campaign_{}.pdf",
            report.file_stem(),
            report.generated_at.format("%Y%m%d")
        )
    }

    fn render(
        &self,
        report: &CampaignReport,
    ) -> Result<RenderedExport, Box<dyn std::error::Error + Send + Sync>> {
        let mut sections = vec![self.info_section(report)];
        if let Some(sales) = self.sales_section(report) {
            sections.push(sales);
        }
        sections.push(self.copy_section(report));

        let document = json!({
            "title": "AgroBrand Campaign Suggestion",
            "generated_on": format!(
                "{} WAT",
                report.generated_at.format("%Y-%m-%d %H:%M:%S")
            ),
            // The PDF surface embeds the uploaded photo when one exists.
            "image_slot": report.identification.is_some(),
            "sections": sections,
            "footer": "--- Generated by AgroBrand ---",
        });

        Ok(RenderedExport {
            file_name: self.file_name(report),
            content_type: "application/json".to_string(),
            body: serde_json::to_string_pretty(&document)?,
        })
    }
}
