use std::collections::{BTreeMap, BTreeSet};

use crate::model::{RowKey, ScoreStats};
use crate::pipeline::stage1_group::Stage1Output;

/// Grouped statistics reshaped to one row per key and one column per observed
/// reduction method. A (row, method) pair with no input rows has no entry.
#[derive(Debug, Clone, Default)]
pub struct PivotTable {
    pub columns: Vec<String>,
    pub rows: BTreeMap<RowKey, BTreeMap<String, ScoreStats>>,
}

impl PivotTable {
    pub fn get(&self, row: &RowKey, method: &str) -> Option<&ScoreStats> {
        self.rows.get(row).and_then(|cells| cells.get(method))
    }

    pub fn has_column(&self, method: &str) -> bool {
        self.columns.iter().any(|c| c == method)
    }
}

pub fn run_stage2(stage1: &Stage1Output) -> PivotTable {
    let mut columns = BTreeSet::new();
    let mut rows: BTreeMap<RowKey, BTreeMap<String, ScoreStats>> = BTreeMap::new();

    for (key, stats) in &stage1.groups {
        columns.insert(key.reduction_method.clone());
        rows.entry(key.row.clone())
            .or_default()
            .insert(key.reduction_method.clone(), *stats);
    }

    tracing::debug!(rows = rows.len(), columns = columns.len(), "pivoted groups");

    PivotTable {
        columns: columns.into_iter().collect(),
        rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_pivot.rs"]
mod tests;
