use serde::{Deserialize, Serialize};

/// One scored run. Field names on the wire match the experiment result columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(rename = "Model, Dataset")]
    pub model_dataset: String,
    #[serde(rename = "Calibration Method")]
    pub calibration_method: String,
    #[serde(rename = "Reduction Method")]
    pub reduction_method: String,
    #[serde(rename = "Score")]
    pub score: f64,
}

impl RunRecord {
    pub fn new(
        model_dataset: impl Into<String>,
        calibration_method: impl Into<String>,
        reduction_method: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            model_dataset: model_dataset.into(),
            calibration_method: calibration_method.into(),
            reduction_method: reduction_method.into(),
            score,
        }
    }

    pub fn row_key(&self) -> RowKey {
        RowKey {
            model_dataset: self.model_dataset.clone(),
            calibration_method: self.calibration_method.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowKey {
    #[serde(rename = "Model, Dataset")]
    pub model_dataset: String,
    #[serde(rename = "Calibration Method")]
    pub calibration_method: String,
}

impl RowKey {
    pub fn new(model_dataset: impl Into<String>, calibration_method: impl Into<String>) -> Self {
        Self {
            model_dataset: model_dataset.into(),
            calibration_method: calibration_method.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
