use super::*;
use crate::model::{RowKey, ScoreStats};

fn stats(mean: f64, std: Option<f64>, count: usize) -> ScoreStats {
    ScoreStats { mean, std, count }
}

fn pivot(cells: &[(&str, &str, &str, ScoreStats)]) -> PivotTable {
    let mut table = PivotTable::default();
    for (key, cal, method, s) in cells {
        if !table.has_column(method) {
            table.columns.push(method.to_string());
        }
        table
            .rows
            .entry(RowKey::new(*key, *cal))
            .or_default()
            .insert(method.to_string(), *s);
    }
    table.columns.sort();
    table
}

#[test]
fn test_formats_baseline_and_relative_columns() {
    let p = pivot(&[
        ("M,D", "C1", "Baseline", stats(2.0, Some(0.1), 3)),
        ("M,D", "C1", "Weighted Reduced", stats(1.5, Some(0.2), 3)),
    ]);
    let table = run_stage3(&p, &SummaryConfig::default_v1()).unwrap();
    let row = table.row("M,D", "C1").unwrap();
    assert_eq!(
        row.cell("Baseline").and_then(SummaryCell::as_formatted),
        Some("2.00000 ±5.00%")
    );
    assert_eq!(
        row.cell("Weighted Reduced").and_then(SummaryCell::as_formatted),
        Some("-25.00% ±10.00%")
    );
}

#[test]
fn test_unknown_method_kept_raw() {
    let raw = stats(0.75, None, 1);
    let p = pivot(&[
        ("M,D", "C1", "Baseline", stats(1.0, Some(0.0), 2)),
        ("M,D", "C1", "Top-k", raw),
    ]);
    let table = run_stage3(&p, &SummaryConfig::default_v1()).unwrap();
    let row = table.row("M,D", "C1").unwrap();
    assert_eq!(row.cell("Top-k"), Some(&SummaryCell::Raw(raw)));
}

#[test]
fn test_known_method_outside_config_kept_raw() {
    let reduced = stats(1.2, Some(0.1), 2);
    let p = pivot(&[
        ("M,D", "C1", "Baseline", stats(1.0, Some(0.1), 2)),
        ("M,D", "C1", "Reduced", reduced),
    ]);
    let mut config = SummaryConfig::default_v1();
    config.relative_methods = vec![ReductionMethod::ClassWise];
    let table = run_stage3(&p, &config).unwrap();
    let row = table.row("M,D", "C1").unwrap();
    assert_eq!(row.cell("Reduced"), Some(&SummaryCell::Raw(reduced)));
}

#[test]
fn test_missing_baseline_fails_whole_table() {
    let p = pivot(&[
        ("A", "C1", "Baseline", stats(1.0, Some(0.1), 2)),
        ("B", "C2", "Reduced", stats(1.0, Some(0.1), 2)),
    ]);
    match run_stage3(&p, &SummaryConfig::default_v1()) {
        Err(SummaryError::MissingBaseline {
            model_dataset,
            calibration_method,
        }) => {
            assert_eq!(model_dataset, "B");
            assert_eq!(calibration_method, "C2");
        }
        other => panic!("expected MissingBaseline, got {other:?}"),
    }
}

#[test]
fn test_precision_follows_config() {
    let p = pivot(&[
        ("M,D", "C1", "Baseline", stats(3.0, Some(0.3), 2)),
        ("M,D", "C1", "Class-wise", stats(4.0, Some(0.3), 2)),
    ]);
    let mut config = SummaryConfig::default_v1();
    config.mean_precision = 1;
    config.percent_precision = 0;
    let table = run_stage3(&p, &config).unwrap();
    let row = table.row("M,D", "C1").unwrap();
    assert_eq!(
        row.cell("Baseline").and_then(SummaryCell::as_formatted),
        Some("3.0 ±10%")
    );
    assert_eq!(
        row.cell("Class-wise").and_then(SummaryCell::as_formatted),
        Some("+33% ±10%")
    );
}

#[test]
fn test_passthrough_warnings_name_the_reason() {
    use crate::logging::LevelTagFormat;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let p = pivot(&[
        ("M,D", "C1", "Baseline", stats(1.0, Some(0.1), 2)),
        ("M,D", "C1", "Reduced", stats(1.2, Some(0.1), 2)),
        ("M,D", "C1", "Top-k", stats(0.9, Some(0.1), 2)),
    ]);
    let mut config = SummaryConfig::default_v1();
    config.relative_methods = vec![ReductionMethod::ClassWise];

    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .event_format(LevelTagFormat)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || run_stage3(&p, &config).unwrap());

    let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    let reduced = out.lines().find(|l| l.contains("Reduced")).unwrap();
    assert!(reduced.starts_with("[WARN] reduction method not configured as relative"));
    let top_k = out.lines().find(|l| l.contains("Top-k")).unwrap();
    assert!(top_k.starts_with("[WARN] unrecognised reduction method"));
}
