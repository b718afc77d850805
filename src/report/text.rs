use crate::report::{MetricRow, Report, format_f64_2};

const UNAVAILABLE: &str = "n/a";

/// Tab-separated table: header, one row per trait, trailing `Avg` row.
pub fn render_report_text(report: &Report) -> String {
    let headers = report.strategy.text_headers();
    let mut out = String::new();

    out.push_str("Class");
    for h in headers {
        out.push('\t');
        out.push_str(h);
    }
    out.push('\n');

    for row in &report.rows {
        out.push_str(&row.name);
        push_cells(&mut out, row.outcome.as_ref().ok(), headers.len());
        out.push('\n');
    }

    out.push_str("Avg");
    push_cells(&mut out, report.average.as_ref(), headers.len());
    out.push('\n');

    out
}

fn push_cells(out: &mut String, row: Option<&MetricRow>, width: usize) {
    for idx in 0..width {
        out.push('\t');
        match row.and_then(|r| r.get(idx)) {
            Some(v) => out.push_str(&format_f64_2(v)),
            None => out.push_str(UNAVAILABLE),
        }
    }
}
