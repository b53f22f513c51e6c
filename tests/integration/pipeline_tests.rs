use std::sync::Arc;

use agrobrand::config::AppConfig;
use agrobrand::models::LookupStatus;
use agrobrand::pipeline::{AnalysisRequest, Pipeline};
use agrobrand::pricing::{PriceTable, SynonymMap};

use super::{FailingDetector, FixedDetector, sample_pipeline, temp_csv};

#[tokio::test]
async fn identification_drives_lookup_trend_and_copy() {
    let pipeline = sample_pipeline().await;
    pipeline
        .providers()
        .register_detector(Box::new(
            FixedDetector::returning("Catfish", 0.92).with_condition("Fresh"),
        ))
        .await;

    let report = pipeline
        .run(AnalysisRequest {
            image: Some(b"photo bytes".to_vec()),
            sales_path: None,
        })
        .await;

    let identification = report.identification.as_ref().unwrap();
    assert_eq!(identification.label, "Catfish");
    assert_eq!(identification.condition.as_deref(), Some("Fresh"));
    assert!(identification.plausible);

    let lookup = report.lookup.as_ref().unwrap();
    assert_eq!(lookup.status, LookupStatus::Found);
    // Catfish has two Shasha observations: 1800 then 2200.
    assert_eq!(lookup.observation_date, Some(super::date(2025, 5, 8)));
    let trend = report.trend.as_ref().unwrap();
    assert_eq!(trend.direction, agrobrand::models::TrendDirection::Rising);

    let copy = report.copy.as_ref().unwrap();
    assert_eq!(
        copy.headline,
        "Premium Fresh Catfish - Available Now! In Akure!"
    );
    assert!(copy.body.contains("Market trend shows: Rising"));
}

#[tokio::test]
async fn generic_label_falls_back_to_best_candidate() {
    let pipeline = sample_pipeline().await;
    pipeline
        .providers()
        .register_detector(Box::new(FixedDetector {
            candidates: vec![
                agrobrand::models::LabelCandidate::new("Furniture", 0.9),
                agrobrand::models::LabelCandidate::new("Wood", 0.8),
            ],
            condition: None,
        }))
        .await;

    let report = pipeline
        .run(AnalysisRequest {
            image: Some(b"photo".to_vec()),
            sales_path: None,
        })
        .await;

    let identification = report.identification.as_ref().unwrap();
    assert_eq!(identification.label, "Furniture");
    assert!(!identification.plausible);
    assert_eq!(
        report.lookup.as_ref().unwrap().status,
        LookupStatus::ProductNotFound
    );
    // Copy is still generated, without market inserts.
    assert!(report.copy.is_some());
}

#[tokio::test]
async fn detector_outage_is_absorbed() {
    let pipeline = sample_pipeline().await;
    pipeline
        .providers()
        .register_detector(Box::new(FailingDetector))
        .await;

    let report = pipeline
        .run(AnalysisRequest {
            image: Some(b"photo".to_vec()),
            sales_path: None,
        })
        .await;

    assert!(report.identification.is_none());
    assert!(report.lookup.is_none());
    assert!(report.copy.is_none());
}

#[tokio::test]
async fn sales_sheet_feeds_the_summary() {
    let pipeline = sample_pipeline().await;
    let sales = temp_csv(
        "Product,Revenue\n\
         Tomatoes,\"\u{20a6}250,000\"\n\
         Catfish,180000\n\
         Yam,120000\n\
         Plantain,90000\n",
    );

    let report = pipeline
        .run(AnalysisRequest {
            image: None,
            sales_path: Some(sales.path().to_path_buf()),
        })
        .await;

    let summary = report.sales.as_ref().unwrap();
    assert_eq!(summary.top_products.len(), 3);
    assert_eq!(summary.top_products[0].product, "Tomatoes");
    // No image means no identification and no copy.
    assert!(report.copy.is_none());
}

#[tokio::test]
async fn end_to_end_from_files_on_disk() {
    // Reference table and sales sheet both go through the real loaders.
    let reference = temp_csv(
        "date,market,product,unit,price\n\
         2025-05-01,\"Shasha Market, Akure\",Tomatoes,kg,3000\n\
         2025-05-10,\"Erekesan Market, Akure\",Tomatoes,kg,2800\n",
    );
    let sales = temp_csv("Product,Revenue\nTomatoes,250000\n");

    let mut config = AppConfig::default();
    config.pricing.reference_path = reference.path().display().to_string();

    let pipeline = Pipeline::from_config(config).await.unwrap();
    pipeline
        .providers()
        .register_detector(Box::new(
            FixedDetector::returning("Tomatoes", 0.95).with_condition("Firm"),
        ))
        .await;

    let report = pipeline
        .run(AnalysisRequest {
            image: Some(b"photo".to_vec()),
            sales_path: Some(sales.path().to_path_buf()),
        })
        .await;

    let lookup = report.lookup.as_ref().unwrap();
    assert_eq!(lookup.status, LookupStatus::Found);
    assert_eq!(lookup.market_label.as_deref(), Some("Erekesan Market, Akure"));
    assert!(report.sales.is_some());
    assert!(report.copy.is_some());

    let artifacts = pipeline.export(&report).await;
    assert_eq!(artifacts.len(), 2);
}

#[tokio::test]
async fn empty_reference_table_yields_data_unavailable() {
    let pipeline = Pipeline::from_parts(
        AppConfig::default(),
        Arc::new(PriceTable::from_records(vec![])),
        SynonymMap::with_defaults(),
    )
    .await
    .unwrap();
    pipeline
        .providers()
        .register_detector(Box::new(FixedDetector::returning("Tomatoes", 0.95)))
        .await;

    let report = pipeline
        .run(AnalysisRequest {
            image: Some(b"photo".to_vec()),
            sales_path: None,
        })
        .await;

    assert_eq!(
        report.lookup.as_ref().unwrap().status,
        LookupStatus::DataUnavailable
    );
    // Copy generation still runs, with N/A-style omissions.
    let copy = report.copy.as_ref().unwrap();
    assert!(!copy.cta.contains("Pickup available"));
}

#[tokio::test]
async fn low_confidence_candidates_are_ignored() {
    let pipeline = sample_pipeline().await;
    pipeline
        .providers()
        .register_detector(Box::new(FixedDetector::returning("Tomatoes", 0.2)))
        .await;

    let report = pipeline
        .run(AnalysisRequest {
            image: Some(b"photo".to_vec()),
            sales_path: None,
        })
        .await;

    assert!(report.identification.is_none());
}
