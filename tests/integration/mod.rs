// Integration tests for AgroBrand
// These tests verify that all components work together correctly

pub mod pipeline_tests;
pub mod resolver_tests;
pub mod table_tests;

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use agrobrand::config::AppConfig;
use agrobrand::models::{LabelCandidate, PriceRecord};
use agrobrand::pipeline::Pipeline;
use agrobrand::pricing::{PriceTable, SynonymMap};
use agrobrand::providers::traits::LabelDetector;

/// Detector stub that always returns the same candidates. Registered under
/// the "mock" provider type so it replaces the random built-in mock and
/// keeps end-to-end runs deterministic.
pub struct FixedDetector {
    pub candidates: Vec<LabelCandidate>,
    pub condition: Option<String>,
}

impl FixedDetector {
    pub fn returning(label: &str, confidence: f32) -> Self {
        Self {
            candidates: vec![
                LabelCandidate::new(label, confidence),
                LabelCandidate::new("Food", confidence - 0.05),
            ],
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: &str) -> Self {
        self.condition = Some(condition.to_string());
        self
    }
}

#[async_trait]
impl LabelDetector for FixedDetector {
    fn name(&self) -> &str {
        "Fixed Detector"
    }

    fn provider_type(&self) -> &str {
        "mock"
    }

    fn description(&self) -> &str {
        "Deterministic detector stub for tests"
    }

    async fn detect(
        &self,
        _image: &[u8],
    ) -> Result<Vec<LabelCandidate>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.candidates.clone())
    }

    fn condition_hint(&self, _label: &str) -> Option<String> {
        self.condition.clone()
    }
}

/// Detector stub that always fails, for exercising failure absorption.
pub struct FailingDetector;

#[async_trait]
impl LabelDetector for FailingDetector {
    fn name(&self) -> &str {
        "Failing Detector"
    }

    fn provider_type(&self) -> &str {
        "mock"
    }

    fn description(&self) -> &str {
        "Always-failing detector stub for tests"
    }

    async fn detect(
        &self,
        _image: &[u8],
    ) -> Result<Vec<LabelCandidate>, Box<dyn std::error::Error + Send + Sync>> {
        Err("simulated detector outage".into())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record(product: &str, market: &str, unit: &str, price: i64, d: NaiveDate) -> PriceRecord {
    PriceRecord::new(product, market, unit, Decimal::from(price), d)
}

/// The reference table most tests share.
pub fn sample_table() -> Arc<PriceTable> {
    Arc::new(PriceTable::from_records(vec![
        record("Tomatoes", "Shasha Market, Akure", "kg", 3000, date(2025, 5, 1)),
        record("Tomatoes", "Erekesan Market, Akure", "kg", 2800, date(2025, 5, 10)),
        record("Catfish", "Shasha Market, Akure", "kg", 1800, date(2025, 5, 1)),
        record("Catfish", "Shasha Market, Akure", "kg", 2200, date(2025, 5, 8)),
        record("Yam", "Oja Oba, Akure", "tuber", 1500, date(2025, 5, 11)),
        record("Yam", "Bodija Market, Ibadan", "tuber", 1400, date(2025, 5, 11)),
    ]))
}

pub async fn sample_pipeline() -> Pipeline {
    Pipeline::from_parts(AppConfig::default(), sample_table(), SynonymMap::with_defaults())
        .await
        .expect("pipeline builds from sample parts")
}

/// Write CSV content to a temp file and return its handle (the file is
/// removed when the handle drops).
pub fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}
