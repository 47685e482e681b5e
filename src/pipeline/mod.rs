pub mod stage1_group;
pub mod stage2_pivot;
pub mod stage3_format;

use crate::error::SummaryError;
use crate::model::{RunRecord, SummaryConfig};
use crate::report::SummaryTable;

use stage1_group::run_stage1;
use stage2_pivot::run_stage2;
use stage3_format::run_stage3;

/// Groups scored runs, pivots them by reduction method and formats every cell
/// against the row's Baseline.
///
/// Fails as a whole with [`SummaryError::MissingBaseline`] if any
/// (model/dataset, calibration) row lacks Baseline observations.
pub fn build_summary_table(
    records: &[RunRecord],
    config: &SummaryConfig,
) -> Result<SummaryTable, SummaryError> {
    config.validate()?;
    let stage1 = run_stage1(records);
    let pivot = run_stage2(&stage1);
    run_stage3(&pivot, config)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
