use crate::error::SummaryError;
use crate::report::SummaryTable;

/// Pretty-printed JSON. Raw cells become `{mean, std, count}` objects, with
/// `std: null` when the deviation is undefined and `"nan"`/`"inf"`/`"-inf"`
/// for non-finite values.
pub fn render_summary_json(table: &SummaryTable) -> Result<String, SummaryError> {
    Ok(serde_json::to_string_pretty(table)?)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
