use super::text::render_report_text;
use super::*;

fn sample_report() -> Report {
    let rows = vec![
        TraitRow {
            name: "Extra".to_string(),
            outcome: Ok(MetricRow::new(vec![0.5, 1.0, 2.0 / 3.0, 0.5])),
        },
        TraitRow {
            name: "Neuro".to_string(),
            outcome: Err(MetricComputationError::UnsupportedAlphabet { size: 1 }),
        },
        TraitRow {
            name: "Agree".to_string(),
            outcome: Ok(MetricRow::new(vec![1.0, 1.0, 1.0, 1.0])),
        },
    ];
    let mut report = Report {
        strategy: ScoringStrategy::CountingF1,
        profile: "strict",
        accepted: 2,
        rejected: 0,
        rows,
        average: None,
    };
    report.average = mean_row(report.available());
    report
}

#[test]
fn test_mean_row_columns() {
    let a = MetricRow::new(vec![1.0, 0.0]);
    let b = MetricRow::new(vec![0.0, 0.5]);
    let mean = mean_row([&a, &b]).unwrap();
    assert_eq!(mean.values, vec![0.5, 0.25]);
    assert_eq!(mean_row(std::iter::empty::<&MetricRow>()), None);
}

#[test]
fn test_average_excludes_unavailable_traits() {
    let report = sample_report();
    let avg = report.average.as_ref().unwrap();
    assert_eq!(avg.values[0], 0.75);
    assert_eq!(avg.values[1], 1.0);
}

#[test]
fn test_format_two_decimals() {
    assert_eq!(format_f64_2(2.0 / 3.0), "0.67");
    assert_eq!(format_f64_2(1.0), "1.00");
    assert_eq!(format_f64_2(0.126), "0.13");
}

#[test]
fn test_text_table() {
    let text = render_report_text(&sample_report());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Class\tP\tR\tF1");
    assert_eq!(lines[1], "Extra\t0.50\t1.00\t0.67");
    assert_eq!(lines[2], "Neuro\tn/a\tn/a\tn/a");
    assert_eq!(lines[3], "Agree\t1.00\t1.00\t1.00");
    assert_eq!(lines[4], "Avg\t0.75\t1.00\t0.83");
    assert_eq!(lines.len(), 5);
}
