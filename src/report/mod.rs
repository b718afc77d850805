pub mod json;
pub mod text;

use crate::scoring::{MetricComputationError, ScoringStrategy};

/// Unrounded metric values for one trait, keyed by
/// `ScoringStrategy::metric_keys`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub values: Vec<f64>,
}

impl MetricRow {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraitRow {
    pub name: String,
    pub outcome: Result<MetricRow, MetricComputationError>,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub strategy: ScoringStrategy,
    pub profile: &'static str,
    pub accepted: usize,
    pub rejected: usize,
    pub rows: Vec<TraitRow>,
    /// Column means over the available rows; `None` if no trait was scored.
    pub average: Option<MetricRow>,
}

impl Report {
    pub fn available(&self) -> impl Iterator<Item = &MetricRow> {
        self.rows.iter().filter_map(|r| r.outcome.as_ref().ok())
    }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

/// Per-column arithmetic mean. Rows are expected to share a width; a short
/// row truncates the result to its width.
pub fn mean_row<'a, I>(rows: I) -> Option<MetricRow>
where
    I: IntoIterator<Item = &'a MetricRow>,
{
    let mut sums: Option<Vec<f64>> = None;
    let mut n = 0usize;
    for row in rows {
        match sums.as_mut() {
            None => sums = Some(row.values.clone()),
            Some(acc) => {
                acc.truncate(row.values.len());
                for (s, v) in acc.iter_mut().zip(&row.values) {
                    *s += v;
                }
            }
        }
        n += 1;
    }
    let sums = sums?;
    Some(MetricRow::new(
        sums.into_iter().map(|s| s / n as f64).collect(),
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
