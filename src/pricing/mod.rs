pub mod resolver;
pub mod synonyms;
pub mod table;
pub mod trend;

pub use resolver::PriceResolver;
pub use synonyms::{SynonymMap, SynonymMatch};
pub use table::{PriceTable, RowError};
pub use trend::derive_trend;
