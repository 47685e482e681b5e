use serde::{Deserialize, Serialize};

use crate::error::SummaryError;
use crate::model::method::{ReductionMethod, relative_method_order};

const MAX_PRECISION: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Methods rendered as change relative to the baseline, in column-processing order.
    pub relative_methods: Vec<ReductionMethod>,
    /// Decimals for the baseline mean.
    pub mean_precision: usize,
    /// Decimals for every percentage.
    pub percent_precision: usize,
}

impl SummaryConfig {
    pub fn default_v1() -> Self {
        Self {
            relative_methods: relative_method_order().to_vec(),
            mean_precision: 5,
            percent_precision: 2,
        }
    }

    pub fn validate(&self) -> Result<(), SummaryError> {
        if self.relative_methods.contains(&ReductionMethod::Baseline) {
            return Err(SummaryError::InvalidConfig(
                "Baseline cannot be a relative method".to_string(),
            ));
        }
        for (i, method) in self.relative_methods.iter().enumerate() {
            if self.relative_methods[..i].contains(method) {
                return Err(SummaryError::InvalidConfig(format!(
                    "duplicate relative method: {method}"
                )));
            }
        }
        if self.mean_precision > MAX_PRECISION || self.percent_precision > MAX_PRECISION {
            return Err(SummaryError::InvalidConfig(format!(
                "precision must be at most {MAX_PRECISION} decimals"
            )));
        }
        Ok(())
    }

    pub fn is_relative(&self, method: ReductionMethod) -> bool {
        self.relative_methods.contains(&method)
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/config.rs"]
mod tests;
