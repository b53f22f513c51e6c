use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::detectors::MockDetector;
use super::renderers::{PdfRenderer, TextRenderer};
use super::traits::{ExportRenderer, LabelDetector, RenderedExport};
use crate::models::{CampaignReport, LabelCandidate};
use crate::utils::error::AppError;

pub type DetectorBox = Box<dyn LabelDetector>;
pub type RendererBox = Box<dyn ExportRenderer>;

/// Registry of detection providers and export renderers, keyed by type.
#[derive(Clone)]
pub struct ProviderManager {
    detectors: Arc<RwLock<HashMap<String, DetectorBox>>>,
    renderers: Arc<RwLock<HashMap<String, RendererBox>>>,
}

impl ProviderManager {
    pub fn new() -> Self {
        Self {
            detectors: Arc::new(RwLock::new(HashMap::new())),
            renderers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a detection provider
    pub async fn register_detector(&self, detector: DetectorBox) {
        let provider_type = detector.provider_type().to_string();
        let mut detectors = self.detectors.write().await;
        detectors.insert(provider_type, detector);
    }

    /// Register an export renderer
    pub async fn register_renderer(&self, renderer: RendererBox) {
        let format = renderer.format().to_string();
        let mut renderers = self.renderers.write().await;
        renderers.insert(format, renderer);
    }

    /// Check if a detection provider exists
    pub async fn has_detector(&self, provider_type: &str) -> bool {
        let detectors = self.detectors.read().await;
        detectors.contains_key(provider_type)
    }

    /// Check if an export renderer exists
    pub async fn has_renderer(&self, format: &str) -> bool {
        let renderers = self.renderers.read().await;
        renderers.contains_key(format)
    }

    /// List all available detector types
    pub async fn list_detector_types(&self) -> Vec<String> {
        let detectors = self.detectors.read().await;
        detectors.keys().cloned().collect()
    }

    /// List all available renderer formats
    pub async fn list_renderer_formats(&self) -> Vec<String> {
        let renderers = self.renderers.read().await;
        renderers.keys().cloned().collect()
    }

    /// Register the built-in providers. The remote detector is registered
    /// separately because it needs endpoint configuration.
    pub async fn initialize_default_providers(&self) {
        self.register_detector(Box::new(MockDetector::new())).await;
        self.register_renderer(Box::new(TextRenderer::new())).await;
        self.register_renderer(Box::new(PdfRenderer::new())).await;
    }

    /// Run label detection with a registered provider
    pub async fn detect_with(
        &self,
        provider_type: &str,
        image: &[u8],
    ) -> Result<Vec<LabelCandidate>, AppError> {
        let detectors = self.detectors.read().await;
        let detector = detectors
            .get(provider_type)
            .ok_or_else(|| AppError::Provider(format!(
                "detection provider '{}' not found",
                provider_type
            )))?;

        detector
            .detect(image)
            .await
            .map_err(|e| AppError::Detector {
                provider: provider_type.to_string(),
                message: e.to_string(),
            })
    }

    /// Condition hint from a registered provider, if it knows the label.
    pub async fn condition_hint(&self, provider_type: &str, label: &str) -> Option<String> {
        let detectors = self.detectors.read().await;
        detectors.get(provider_type)?.condition_hint(label)
    }

    /// Render the report with a registered renderer
    pub async fn render_with(
        &self,
        format: &str,
        report: &CampaignReport,
    ) -> Result<RenderedExport, AppError> {
        let renderers = self.renderers.read().await;
        let renderer = renderers
            .get(format)
            .ok_or_else(|| AppError::Provider(format!("renderer '{}' not found", format)))?;

        renderer.render(report).map_err(|e| AppError::Renderer {
            format: format.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for ProviderManager {
    fn default() -> Self {
        Self::new()
    }
}
