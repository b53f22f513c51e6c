use serde::{Deserialize, Serialize};

use crate::models::CampaignReport;

/// One rendered export artifact. For the text renderer the body is the
/// final file content; for the PDF renderer it is the layout document the
/// external PDF surface consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedExport {
    pub file_name: String,
    pub content_type: String,
    pub body: String,
}

/// Trait for implementing export renderers (plain text, PDF layout, etc.).
/// Rendering is pure string substitution over the report fields.
pub trait ExportRenderer: Send + Sync {
    /// Renderer metadata
    fn name(&self) -> &str;
    fn format(&self) -> &str;
    fn description(&self) -> &str;

    /// File name for the artifact, derived from the report.
    fn file_name(&self, report: &CampaignReport) -> String;

    /// Render the report into an export artifact.
    fn render(
        &self,
        report: &CampaignReport,
    ) -> Result<RenderedExport, Box<dyn std::error::Error + Send + Sync>>;
}
