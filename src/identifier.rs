use tracing::debug;

use crate::models::{Identification, LabelCandidate};

/// Selection policy over ranked detection candidates: prefer the
/// highest-confidence label that matches the plausibility keyword list,
/// fall back to the highest-confidence label overall.
pub struct LabelSelector {
    plausible_keywords: Vec<String>,
    min_confidence: f32,
}

impl LabelSelector {
    pub fn new(plausible_keywords: Vec<String>, min_confidence: f32) -> Self {
        Self {
            plausible_keywords: plausible_keywords
                .into_iter()
                .map(|k| k.to_lowercase())
                .collect(),
            min_confidence,
        }
    }

    /// Default keyword list for the produce domain.
    pub fn with_default_keywords(min_confidence: f32) -> Self {
        Self::new(
            [
                "catfish", "fish", "plantain", "banana", "yam", "tuber", "pepper", "capsicum",
                "tomato", "cocoa", "maize", "cassava", "okra", "melon",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            min_confidence,
        )
    }

    fn is_plausible(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.plausible_keywords
            .iter()
            .any(|keyword| label.contains(keyword))
    }

    /// Pick an identification from the candidate list, or `None` when no
    /// candidate clears the confidence floor. Deterministic: ordering is
    /// stable on confidence ties.
    pub fn select(&self, candidates: &[LabelCandidate]) -> Option<Identification> {
        let mut eligible: Vec<&LabelCandidate> = candidates
            .iter()
            .filter(|c| c.confidence >= self.min_confidence)
            .collect();
        if eligible.is_empty() {
            return None;
        }

        // Stable sort keeps provider order on equal confidence.
        eligible.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let plausible = eligible.iter().find(|c| self.is_plausible(&c.label));
        let (chosen, was_plausible) = match plausible {
            Some(candidate) => (*candidate, true),
            None => (eligible[0], false),
        };

        debug!(
            label = %chosen.label,
            confidence = chosen.confidence,
            plausible = was_plausible,
            "selected identification"
        );

        Some(Identification {
            label: chosen.label.clone(),
            confidence: chosen.confidence,
            condition: None,
            plausible: was_plausible,
            candidates: candidates.to_vec(),
        })
    }
}
