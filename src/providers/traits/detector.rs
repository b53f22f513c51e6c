use async_trait::async_trait;

use crate::models::LabelCandidate;

/// Trait for implementing label-detection providers (remote vision API,
/// local mock, etc.). Implementations return the ranked candidate list;
/// selection policy lives in the identifier.
#[async_trait]
pub trait LabelDetector: Send + Sync {
    /// Provider metadata
    fn name(&self) -> &str;
    fn provider_type(&self) -> &str;
    fn description(&self) -> &str;

    /// Detect labels for the raw image bytes, ranked by confidence.
    async fn detect(
        &self,
        image: &[u8],
    ) -> Result<Vec<LabelCandidate>, Box<dyn std::error::Error + Send + Sync>>;

    /// Optional condition hint for a chosen label ("Fresh", "Ripe"); only
    /// providers that know the product vocabulary supply one.
    fn condition_hint(&self, _label: &str) -> Option<String> {
        None
    }
}
