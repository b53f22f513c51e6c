use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use agrobrand::config::AppConfig;
use agrobrand::pipeline::{AnalysisRequest, Pipeline};

/// Agribusiness marketing assistant: identify a product photo, look up a
/// market price, and export campaign suggestions.
#[derive(Parser, Debug)]
#[command(name = "agrobrand", version, about)]
struct Cli {
    /// Product photo to identify
    #[arg(long)]
    image: Option<PathBuf>,

    /// Sales sheet (CSV with Product and Revenue columns)
    #[arg(long)]
    sales: Option<PathBuf>,

    /// Override the reference price dataset path
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Override the detection provider (mock or vision)
    #[arg(long)]
    provider: Option<String>,

    /// Directory for export artifacts
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agrobrand=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(reference) = &cli.reference {
        config.pricing.reference_path = reference.display().to_string();
    }
    if let Some(provider) = &cli.provider {
        config.vision.provider = provider.clone();
        config.validate().context("invalid provider override")?;
    }
    if let Some(out) = &cli.out {
        config.export.output_dir = out.display().to_string();
    }

    let image = match &cli.image {
        Some(path) => Some(
            fs::read(path).with_context(|| format!("failed to read image '{}'", path.display()))?,
        ),
        None => None,
    };

    let pipeline = Pipeline::from_config(config.clone())
        .await
        .context("failed to build pipeline")?;
    info!(
        rows = pipeline.table().len(),
        dropped = pipeline.table().row_errors().len(),
        "reference table ready"
    );

    let report = pipeline
        .run(AnalysisRequest {
            image,
            sales_path: cli.sales.clone(),
        })
        .await;

    match &report.identification {
        Some(identification) => info!(
            product = %identification.label,
            confidence = %identification.confidence_percent(),
            "identified product"
        ),
        None => info!("no product identified"),
    }
    if let Some(lookup) = &report.lookup {
        info!(
            status = ?lookup.status,
            price = %lookup.display_price(),
            market = %lookup.display_market(),
            "price lookup"
        );
    }

    let artifacts = pipeline.export(&report).await;
    if artifacts.is_empty() {
        info!("no export artifacts produced");
        return Ok(());
    }

    let out_dir = PathBuf::from(&config.export.output_dir);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create '{}'", out_dir.display()))?;
    for artifact in &artifacts {
        let path = out_dir.join(&artifact.file_name);
        fs::write(&path, artifact.body.as_bytes())
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        info!(path = %path.display(), "export written");
    }

    Ok(())
}
