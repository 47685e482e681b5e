use std::collections::BTreeMap;

use crate::model::{RowKey, RunRecord, ScoreStats};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKey {
    pub row: RowKey,
    pub reduction_method: String,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub groups: BTreeMap<GroupKey, ScoreStats>,
}

pub fn run_stage1(records: &[RunRecord]) -> Stage1Output {
    let mut scores: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();
    for record in records {
        let key = GroupKey {
            row: record.row_key(),
            reduction_method: record.reduction_method.clone(),
        };
        scores.entry(key).or_default().push(record.score);
    }

    let mut groups = BTreeMap::new();
    for (key, values) in scores {
        if let Some(stats) = ScoreStats::from_scores(&values) {
            if stats.std.is_none() {
                tracing::debug!(
                    model_dataset = %key.row.model_dataset,
                    calibration_method = %key.row.calibration_method,
                    reduction_method = %key.reduction_method,
                    "single observation; standard deviation undefined"
                );
            }
            groups.insert(key, stats);
        }
    }

    tracing::debug!(
        records = records.len(),
        groups = groups.len(),
        "grouped scores"
    );

    Stage1Output { groups }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_group.rs"]
mod tests;
