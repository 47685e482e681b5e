use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// A (model/dataset, calibration) row has no `Baseline` observations, so
    /// relative columns cannot be computed for it.
    #[error("missing Baseline entry for ({model_dataset}, {calibration_method})")]
    MissingBaseline {
        model_dataset: String,
        calibration_method: String,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}
