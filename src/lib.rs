//! Pivoted summary tables for reduction-method experiments.
//!
//! Scored runs are grouped per (model/dataset, calibration method, reduction
//! method), pivoted so each reduction method becomes a column, and rendered as
//! percentage change against the row's `Baseline`.

pub mod error;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::SummaryError;
pub use logging::init_tracing;
pub use model::{ReductionMethod, RowKey, RunRecord, ScoreStats, SummaryConfig};
pub use pipeline::build_summary_table;
pub use report::json::render_summary_json;
pub use report::text::render_summary_text;
pub use report::{SummaryCell, SummaryRow, SummaryTable};
