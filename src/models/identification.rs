use serde::{Deserialize, Serialize};

/// One ranked label from a detection provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelCandidate {
    pub label: String,
    pub confidence: f32,
}

impl LabelCandidate {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// The selected identification for an uploaded product photo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identification {
    /// The chosen free-text product label.
    pub label: String,
    pub confidence: f32,
    /// Optional condition hint (e.g. "Fresh", "Ripe"); only some providers
    /// supply one.
    pub condition: Option<String>,
    /// Whether the label matched the plausibility keyword list or was taken
    /// as the best overall candidate.
    pub plausible: bool,
    /// The full ranked candidate list, for display and diagnostics.
    pub candidates: Vec<LabelCandidate>,
}

impl Identification {
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}
