pub mod campaign;
pub mod config;
pub mod identifier;
pub mod models;
pub mod pipeline;
pub mod pricing;
pub mod providers;
pub mod sales;
pub mod utils;

// Re-export commonly used types
pub use config::AppConfig;
pub use models::{CampaignReport, LookupResult, LookupStatus, PriceRecord};
pub use pipeline::{AnalysisRequest, Pipeline};
pub use pricing::{PriceResolver, PriceTable, SynonymMap};
pub use utils::error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;
