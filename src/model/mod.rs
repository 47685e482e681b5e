pub mod config;
pub mod method;
pub mod record;
pub mod stats;

pub use config::SummaryConfig;
pub use method::{ReductionMethod, relative_method_order};
pub use record::{RowKey, RunRecord};
pub use stats::ScoreStats;
