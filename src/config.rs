use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub vision: VisionConfig,
    pub campaign: CampaignConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Reference price dataset (CSV).
    pub reference_path: String,
    /// Optional extra synonym entries (CSV, label,canonical).
    pub synonyms_path: Option<String>,
    /// Market names used to break ties within the latest slice, in order.
    pub preferred_markets: Vec<String>,
    /// How many products the sales summary keeps.
    pub top_sales: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// "mock" or "vision".
    pub provider: String,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub max_labels: usize,
    pub min_confidence: f32,
    pub plausible_keywords: Vec<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub contact: String,
    pub home_region: String,
    pub region_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_dir: String,
    /// Renderer formats to produce ("text", "pdf").
    pub formats: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Add environment-specific config
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add local config (ignored by git)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix "AGROBRAND"
            .add_source(Environment::with_prefix("AGROBRAND").separator("__"))
            .build()?;

        let mut config: AppConfig = s.try_deserialize()?;

        // Pick up the vision key from the environment if not set
        if config.vision.api_key.is_none() {
            config.vision.api_key = env::var("VISION_API_KEY").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pricing.reference_path.trim().is_empty() {
            return Err(ConfigError::Message(
                "pricing.reference_path must be set".into(),
            ));
        }

        if self.pricing.preferred_markets.is_empty() {
            return Err(ConfigError::Message(
                "pricing.preferred_markets must list at least one market".into(),
            ));
        }

        if self.pricing.top_sales == 0 {
            return Err(ConfigError::Message(
                "pricing.top_sales must be greater than 0".into(),
            ));
        }

        match self.vision.provider.as_str() {
            "mock" => {}
            "vision" => {
                if self.vision.endpoint.as_deref().unwrap_or("").is_empty() {
                    return Err(ConfigError::Message(
                        "vision.endpoint is required for the vision provider".into(),
                    ));
                }
            }
            other => {
                return Err(ConfigError::Message(format!(
                    "Unknown vision provider '{}' (expected 'mock' or 'vision')",
                    other
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.vision.min_confidence) {
            return Err(ConfigError::Message(
                "vision.min_confidence must be between 0 and 1".into(),
            ));
        }

        if self.vision.max_labels == 0 {
            return Err(ConfigError::Message(
                "vision.max_labels must be greater than 0".into(),
            ));
        }

        if self.export.formats.is_empty() {
            return Err(ConfigError::Message(
                "export.formats must list at least one format".into(),
            ));
        }
        for format in &self.export.formats {
            if format != "text" && format != "pdf" {
                return Err(ConfigError::Message(format!(
                    "Unknown export format '{}' (expected 'text' or 'pdf')",
                    format
                )));
            }
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig {
                reference_path: "data/reference_prices.csv".to_string(),
                synonyms_path: None,
                preferred_markets: vec![
                    "Akure".to_string(),
                    "Ibadan".to_string(),
                    "Lagos".to_string(),
                ],
                top_sales: 3,
            },
            vision: VisionConfig {
                provider: "mock".to_string(),
                endpoint: None,
                api_key: None,
                max_labels: 10,
                min_confidence: 0.5,
                plausible_keywords: Vec::new(),
                timeout_secs: 30,
            },
            campaign: CampaignConfig {
                contact: "[Your Phone Number/WhatsApp]".to_string(),
                home_region: "Akure".to_string(),
                region_tags: vec!["#Akure".to_string(), "#OndoState".to_string()],
            },
            export: ExportConfig {
                output_dir: "exports".to_string(),
                formats: vec!["text".to_string(), "pdf".to_string()],
            },
        }
    }
}
