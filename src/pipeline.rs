use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::campaign::{CampaignSettings, generate_copy};
use crate::config::AppConfig;
use crate::identifier::LabelSelector;
use crate::models::CampaignReport;
use crate::pricing::{PriceResolver, PriceTable, SynonymMap, derive_trend};
use crate::providers::ProviderManager;
use crate::providers::detectors::{VisionApiConfig, VisionApiDetector};
use crate::providers::traits::RenderedExport;
use crate::sales::summarize_sales_path;
use crate::utils::error::Result;

/// Inputs for one analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    /// Raw product-photo bytes; decoding happens outside this crate.
    pub image: Option<Vec<u8>>,
    /// Path to the uploaded sales sheet.
    pub sales_path: Option<PathBuf>,
}

/// Owns the cached reference table and the collaborators, and drives one
/// request through identification, lookup, summary, copy generation and
/// export. One request at a time; all state per request lives in the
/// `CampaignReport`.
pub struct Pipeline {
    config: AppConfig,
    table: Arc<PriceTable>,
    resolver: PriceResolver,
    selector: LabelSelector,
    settings: CampaignSettings,
    providers: ProviderManager,
}

impl Pipeline {
    /// Build a pipeline from configuration, loading the reference table and
    /// synonym entries from disk.
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        let table = Arc::new(PriceTable::from_path(&config.pricing.reference_path)?);

        let mut synonyms = SynonymMap::with_defaults();
        if let Some(path) = &config.pricing.synonyms_path {
            synonyms.load_from_path(path)?;
        }

        Self::from_parts(config, table, synonyms).await
    }

    /// Build a pipeline around an already-loaded table; used by tests and
    /// embedders that manage their own data.
    pub async fn from_parts(
        config: AppConfig,
        table: Arc<PriceTable>,
        synonyms: SynonymMap,
    ) -> Result<Self> {
        let resolver = PriceResolver::new(synonyms, config.pricing.preferred_markets.clone());

        let selector = if config.vision.plausible_keywords.is_empty() {
            LabelSelector::with_default_keywords(config.vision.min_confidence)
        } else {
            LabelSelector::new(
                config.vision.plausible_keywords.clone(),
                config.vision.min_confidence,
            )
        };

        let settings = CampaignSettings {
            contact: config.campaign.contact.clone(),
            home_region: config.campaign.home_region.clone(),
            region_tags: config.campaign.region_tags.clone(),
        };

        let providers = ProviderManager::new();
        providers.initialize_default_providers().await;
        if config.vision.provider == "vision" {
            providers
                .register_detector(Box::new(VisionApiDetector::new(VisionApiConfig {
                    endpoint: config.vision.endpoint.clone().unwrap_or_default(),
                    api_key: config.vision.api_key.clone(),
                    max_labels: config.vision.max_labels,
                    timeout_secs: config.vision.timeout_secs,
                })))
                .await;
        }

        Ok(Self {
            config,
            table,
            resolver,
            selector,
            settings,
            providers,
        })
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    pub fn providers(&self) -> &ProviderManager {
        &self.providers
    }

    /// Run one analysis. Failures in any stage are absorbed: the report
    /// simply lacks the corresponding section and downstream consumers show
    /// placeholders. Nothing here is fatal to the session.
    pub async fn run(&self, request: AnalysisRequest) -> CampaignReport {
        let mut report = CampaignReport::new();
        let provider = self.config.vision.provider.as_str();

        if let Some(image) = &request.image {
            match self.providers.detect_with(provider, image).await {
                Ok(candidates) => match self.selector.select(&candidates) {
                    Some(mut identification) => {
                        identification.condition = self
                            .providers
                            .condition_hint(provider, &identification.label)
                            .await;
                        report.identification = Some(identification);
                    }
                    None => info!("no detection candidate cleared the confidence floor"),
                },
                Err(e) => {
                    warn!(provider, error = %e, "identification failed; continuing without it")
                }
            }
        }

        if let Some(identification) = &report.identification {
            let lookup = self.resolver.resolve(&identification.label, &self.table);
            report.trend = derive_trend(&self.table, &lookup);
            report.lookup = Some(lookup);
        }

        if let Some(path) = &request.sales_path {
            match summarize_sales_path(path, self.config.pricing.top_sales) {
                Ok(summary) => report.sales = Some(summary),
                Err(e) => warn!(error = %e, "sales summary failed; continuing without it"),
            }
        }

        if report.identification.is_some() {
            report.copy = Some(generate_copy(
                report.identification.as_ref(),
                report.lookup.as_ref(),
                report.trend.as_ref(),
                &self.settings,
            ));
        }

        info!(
            report_id = %report.id,
            identified = report.identification.is_some(),
            priced = report.lookup.as_ref().is_some_and(|l| l.has_price()),
            "analysis run complete"
        );
        report
    }

    /// Render the configured export formats. A failing renderer is skipped
    /// with a warning; the remaining artifacts are still produced.
    pub async fn export(&self, report: &CampaignReport) -> Vec<RenderedExport> {
        let mut artifacts = Vec::new();
        for format in &self.config.export.formats {
            match self.providers.render_with(format, report).await {
                Ok(rendered) => artifacts.push(rendered),
                Err(e) => warn!(format = %format, error = %e, "export renderer failed; skipping"),
            }
        }
        artifacts
    }
}
