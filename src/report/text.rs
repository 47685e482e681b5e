use crate::model::SummaryConfig;
use crate::report::{SummaryCell, SummaryTable, format_fixed};

const ABSENT: &str = "-";
const SEPARATOR: &str = " | ";

pub fn render_summary_text(table: &SummaryTable, config: &SummaryConfig) -> String {
    let mut header = vec![
        "Model, Dataset".to_string(),
        "Calibration Method".to_string(),
    ];
    header.extend(table.columns.iter().cloned());

    let mut lines: Vec<Vec<String>> = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut line = Vec::with_capacity(header.len());
        line.push(row.key.model_dataset.clone());
        line.push(row.key.calibration_method.clone());
        for column in &table.columns {
            line.push(match row.cell(column) {
                Some(cell) => render_cell(cell, config),
                None => ABSENT.to_string(),
            });
        }
        lines.push(line);
    }

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for line in &lines {
        for (i, field) in line.iter().enumerate() {
            widths[i] = widths[i].max(field.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule_len = widths.iter().sum::<usize>() + SEPARATOR.len() * widths.len().saturating_sub(1);
    out.push_str(&"=".repeat(rule_len));
    out.push('\n');
    for line in &lines {
        push_line(&mut out, line, &widths);
    }
    out
}

fn render_cell(cell: &SummaryCell, config: &SummaryConfig) -> String {
    match cell {
        SummaryCell::Formatted(s) => s.clone(),
        SummaryCell::Raw(stats) => format!(
            "({}, {})",
            format_fixed(stats.mean, config.mean_precision),
            match stats.std {
                Some(std) => format_fixed(std, config.mean_precision),
                None => "nan".to_string(),
            }
        ),
    }
}

fn push_line(out: &mut String, fields: &[String], widths: &[usize]) {
    let mut parts = Vec::with_capacity(fields.len());
    for (field, &width) in fields.iter().zip(widths) {
        let pad = width.saturating_sub(field.chars().count());
        parts.push(format!("{}{}", field, " ".repeat(pad)));
    }
    out.push_str(parts.join(SEPARATOR).trim_end());
    out.push('\n');
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
