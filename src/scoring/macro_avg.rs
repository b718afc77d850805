use crate::model::profile::MacroAveraging;
use crate::model::{ConfusionMatrix, Instance};
use crate::report::MetricRow;
use crate::scoring::{MetricComputationError, ratio};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroAverages {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl MacroAverages {
    pub fn into_row(self) -> MetricRow {
        MetricRow::new(vec![self.precision, self.recall, self.f1])
    }
}

/// Unweighted mean over classes of the per-class precision, recall and F1.
pub fn macro_averages(
    matrix: &ConfusionMatrix,
    averaging: MacroAveraging,
) -> Result<MacroAverages, MetricComputationError> {
    if matrix.alphabet().is_empty() {
        return Err(MetricComputationError::NoInstances);
    }
    let n = matrix.n_classes();

    let mut pre = 0.0;
    let mut re = 0.0;
    let mut f1 = 0.0;
    for class in 0..n {
        pre += matrix.precision(class);
        re += matrix.recall(class);
        f1 += matrix.f1(class);
    }

    let precision = ratio(pre, n as f64, "macro precision")?;
    let (recall, f1) = match averaging {
        MacroAveraging::PrecisionReused => (precision, precision),
        MacroAveraging::PerMetric => (
            ratio(re, n as f64, "macro recall")?,
            ratio(f1, n as f64, "macro f1")?,
        ),
    };

    Ok(MacroAverages {
        precision,
        recall,
        f1,
    })
}

pub fn score(
    instances: &[Instance],
    reference_column: usize,
    predicted_column: usize,
    averaging: MacroAveraging,
) -> Result<MacroAverages, MetricComputationError> {
    let matrix = ConfusionMatrix::from_columns(instances, reference_column, predicted_column)?;
    tracing::debug!(
        labels = ?matrix.alphabet().labels(),
        counted = matrix.total(),
        instances = instances.len(),
        "confusion matrix built"
    );
    macro_averages(&matrix, averaging)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/macro_avg.rs"]
mod tests;
