use serde::{Deserialize, Serialize};

/// Generated marketing copy. Plain string substitution over named fields;
/// no speculative generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignCopy {
    pub headline: String,
    pub body: String,
    pub cta: String,
    pub hashtags: String,
}
