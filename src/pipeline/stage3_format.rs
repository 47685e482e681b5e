use std::collections::BTreeMap;

use crate::error::SummaryError;
use crate::model::{ReductionMethod, SummaryConfig};
use crate::pipeline::stage2_pivot::PivotTable;
use crate::report::{
    SummaryCell, SummaryRow, SummaryTable, format_baseline_cell, format_relative_cell,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnRole {
    Baseline,
    Relative,
    Passthrough,
}

fn column_role(name: &str, config: &SummaryConfig) -> ColumnRole {
    match ReductionMethod::parse(name) {
        Some(ReductionMethod::Baseline) => ColumnRole::Baseline,
        Some(method) if config.is_relative(method) => ColumnRole::Relative,
        _ => ColumnRole::Passthrough,
    }
}

pub fn run_stage3(pivot: &PivotTable, config: &SummaryConfig) -> Result<SummaryTable, SummaryError> {
    let roles: Vec<(&str, ColumnRole)> = pivot
        .columns
        .iter()
        .map(|name| (name.as_str(), column_role(name, config)))
        .collect();

    for (name, role) in &roles {
        if *role != ColumnRole::Passthrough {
            continue;
        }
        if ReductionMethod::parse(name).is_some() {
            tracing::warn!(method = %name, "reduction method not configured as relative; left unformatted");
        } else {
            tracing::warn!(method = %name, "unrecognised reduction method left unformatted");
        }
    }

    let baseline_name = ReductionMethod::Baseline.as_str();
    let mut rows = Vec::with_capacity(pivot.rows.len());

    for (key, stats_by_method) in &pivot.rows {
        let Some(baseline) = stats_by_method.get(baseline_name) else {
            tracing::error!(
                model_dataset = %key.model_dataset,
                calibration_method = %key.calibration_method,
                "row has no Baseline entry"
            );
            return Err(SummaryError::MissingBaseline {
                model_dataset: key.model_dataset.clone(),
                calibration_method: key.calibration_method.clone(),
            });
        };

        let mut cells = BTreeMap::new();
        for (name, role) in &roles {
            let Some(stats) = stats_by_method.get(*name) else {
                continue;
            };
            let cell = match role {
                ColumnRole::Baseline => SummaryCell::Formatted(format_baseline_cell(
                    baseline,
                    config.mean_precision,
                    config.percent_precision,
                )),
                ColumnRole::Relative => SummaryCell::Formatted(format_relative_cell(
                    stats,
                    baseline,
                    config.percent_precision,
                )),
                ColumnRole::Passthrough => SummaryCell::Raw(*stats),
            };
            cells.insert((*name).to_string(), cell);
        }

        rows.push(SummaryRow {
            key: key.clone(),
            cells,
        });
    }

    tracing::debug!(rows = rows.len(), "formatted summary table");

    Ok(SummaryTable {
        columns: pivot.columns.clone(),
        rows,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_format.rs"]
mod tests;
