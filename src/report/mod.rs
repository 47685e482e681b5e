use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{RowKey, ScoreStats};

pub mod json;
pub mod text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryCell {
    Formatted(String),
    /// Unrecognised reduction methods are passed through unformatted.
    Raw(ScoreStats),
}

impl SummaryCell {
    pub fn as_formatted(&self) -> Option<&str> {
        match self {
            SummaryCell::Formatted(s) => Some(s),
            SummaryCell::Raw(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(flatten)]
    pub key: RowKey,
    pub cells: BTreeMap<String, SummaryCell>,
}

impl SummaryRow {
    pub fn cell(&self, method: &str) -> Option<&SummaryCell> {
        self.cells.get(method)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryTable {
    pub columns: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn row(&self, model_dataset: &str, calibration_method: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| {
            r.key.model_dataset == model_dataset && r.key.calibration_method == calibration_method
        })
    }
}

/// Fixed-point rendering; NaN prints as `nan`, infinities as `inf`/`-inf`.
pub fn format_fixed(v: f64, precision: usize) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.*}", precision, v)
    }
}

/// `+X%` above zero, `-X%` below, unsigned otherwise (zero and NaN).
pub fn format_relative_change(change: f64, precision: usize) -> String {
    let sign = if change > 0.0 {
        "+"
    } else if change < 0.0 {
        "-"
    } else {
        ""
    };
    format!("{}{}%", sign, format_fixed(change.abs(), precision))
}

/// `None` stands for an undefined deviation and renders as `±nan%`.
pub fn format_uncertainty(band: Option<f64>, precision: usize) -> String {
    match band {
        Some(v) => format!("±{}%", format_fixed(v, precision)),
        None => "±nan%".to_string(),
    }
}

pub fn format_relative_cell(stats: &ScoreStats, baseline: &ScoreStats, precision: usize) -> String {
    let change = (stats.mean - baseline.mean) * 100.0 / baseline.mean;
    let band = stats.std.map(|s| s * 100.0 / baseline.mean);
    format!(
        "{} {}",
        format_relative_change(change, precision),
        format_uncertainty(band, precision)
    )
}

pub fn format_baseline_cell(
    baseline: &ScoreStats,
    mean_precision: usize,
    percent_precision: usize,
) -> String {
    // Denominator sign is inverted; the absolute value hides it.
    let band = baseline.std.map(|s| (s * 100.0 / -baseline.mean).abs());
    format!(
        "{} {}",
        format_fixed(baseline.mean, mean_precision),
        format_uncertainty(band, percent_precision)
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
