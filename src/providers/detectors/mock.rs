use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::LabelCandidate;
use crate::providers::traits::LabelDetector;

/// Products the mock can "recognize", with condition and setting hints.
const MOCK_PRODUCTS: &[(&str, &str, &str)] = &[
    ("Catfish", "Fresh", "Harvest Basin"),
    ("Plantain", "Ripe", "Bunch"),
    ("Yam", "Large Tuber", "On Display"),
    ("Bell Peppers", "Mixed Colors", "Basket"),
    ("Tomatoes", "Firm", "Crate"),
];

/// Generic labels a real vision service would also emit; ranked below the
/// product label so the plausibility selection has something to skip.
const GENERIC_LABELS: &[&str] = &["Food", "Natural foods", "Ingredient"];

/// Simulated image recognition: picks a product at random with a jittered
/// confidence, plus lower-ranked generic labels. Stands in for the remote
/// detector in demos and tests.
pub struct MockDetector {
    rng: Mutex<StdRng>,
}

impl MockDetector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic variant for tests and reproducible demos.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LabelDetector for MockDetector {
    fn name(&self) -> &str {
        "Mock Detector"
    }

    fn provider_type(&self) -> &str {
        "mock"
    }

    fn description(&self) -> &str {
        "Simulates image recognition with a random product pick"
    }

    async fn detect(
        &self,
        _image: &[u8],
    ) -> Result<Vec<LabelCandidate>, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| "mock detector rng poisoned".to_string())?;

        let (product, _, _) = MOCK_PRODUCTS[rng.gen_range(0..MOCK_PRODUCTS.len())];
        let confidence: f32 = rng.gen_range(0.75..0.98);

        let mut candidates = vec![LabelCandidate::new(product, confidence)];
        for (idx, generic) in GENERIC_LABELS.iter().enumerate() {
            // Keep generic labels strictly below the product label.
            let generic_confidence = confidence - 0.05 * (idx as f32 + 1.0);
            candidates.push(LabelCandidate::new(*generic, generic_confidence.max(0.1)));
        }

        Ok(candidates)
    }

    fn condition_hint(&self, label: &str) -> Option<String> {
        MOCK_PRODUCTS
            .iter()
            .find(|(product, _, _)| product.eq_ignore_ascii_case(label))
            .map(|(_, condition, _)| condition.to_string())
    }
}
