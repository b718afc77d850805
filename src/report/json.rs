use std::collections::BTreeMap;

use serde::Serialize;

use crate::report::{MetricRow, Report};

#[derive(Debug, Serialize)]
struct ReportJson<'a> {
    strategy: &'static str,
    profile: &'static str,
    accepted: usize,
    rejected: usize,
    rows: Vec<RowJson<'a>>,
    average: Option<BTreeMap<&'static str, f64>>,
}

#[derive(Debug, Serialize)]
struct RowJson<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<BTreeMap<&'static str, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn keyed(keys: &[&'static str], row: &MetricRow) -> BTreeMap<&'static str, f64> {
    keys.iter().copied().zip(row.values.iter().copied()).collect()
}

fn to_json(report: &Report) -> ReportJson<'_> {
    let keys = report.strategy.metric_keys();
    let rows = report
        .rows
        .iter()
        .map(|row| match &row.outcome {
            Ok(m) => RowJson {
                name: &row.name,
                metrics: Some(keyed(keys, m)),
                error: None,
            },
            Err(e) => RowJson {
                name: &row.name,
                metrics: None,
                error: Some(e.to_string()),
            },
        })
        .collect();
    ReportJson {
        strategy: report.strategy.name(),
        profile: report.profile,
        accepted: report.accepted,
        rejected: report.rejected,
        rows,
        average: report.average.as_ref().map(|m| keyed(keys, m)),
    }
}

/// Unrounded values; one array element per report.
pub fn render_reports_json(reports: &[Report]) -> serde_json::Result<String> {
    let views: Vec<ReportJson<'_>> = reports.iter().map(to_json).collect();
    serde_json::to_string_pretty(&views)
}
