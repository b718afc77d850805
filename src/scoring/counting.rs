use crate::model::{Instance, LabelAlphabet, LabelPair, paired_column};
use crate::report::MetricRow;
use crate::scoring::{MetricComputationError, ratio};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub true_positive: u64,
    pub false_positive: u64,
    pub false_negative: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountingMetrics {
    pub tally: Tally,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
}

impl CountingMetrics {
    pub fn into_row(self) -> MetricRow {
        MetricRow::new(vec![self.precision, self.recall, self.f1, self.accuracy])
    }
}

/// Counts tp/fp/fn for one trait.
///
/// With two reference classes every non-hit that is not a false positive is a
/// false negative. With three, a false negative is only an abstained
/// prediction on a non-abstain reference; other disagreements are not counted.
pub fn tally(
    pairs: &[LabelPair<'_>],
    n_classes: usize,
    abstain: &str,
) -> Result<Tally, MetricComputationError> {
    let three_class = match n_classes {
        2 => false,
        3 => true,
        size => return Err(MetricComputationError::UnsupportedAlphabet { size }),
    };

    let mut t = Tally::default();
    for pair in pairs {
        let abstained = pair.predicted == abstain;
        if pair.actual == pair.predicted && !abstained {
            t.true_positive += 1;
        } else if pair.actual != pair.predicted && !abstained {
            t.false_positive += 1;
        } else if !three_class || (pair.actual != abstain && abstained) {
            t.false_negative += 1;
        }
    }
    Ok(t)
}

pub fn metrics_from_tally(t: Tally) -> Result<CountingMetrics, MetricComputationError> {
    let tp = t.true_positive as f64;
    let fp = t.false_positive as f64;
    let fn_ = t.false_negative as f64;

    let precision = ratio(tp, tp + fp, "precision")?;
    let recall = ratio(tp, tp + fn_, "recall")?;
    let f1 = ratio(2.0 * precision * recall, precision + recall, "f1")?;
    let accuracy = ratio(tp, tp + fp + fn_, "accuracy")?;

    Ok(CountingMetrics {
        tally: t,
        precision,
        recall,
        f1,
        accuracy,
    })
}

pub fn score(
    instances: &[Instance],
    reference_column: usize,
    predicted_column: usize,
    abstain: &str,
) -> Result<CountingMetrics, MetricComputationError> {
    let pairs = paired_column(instances, reference_column, predicted_column)?;
    let alphabet = LabelAlphabet::from_labels(pairs.iter().map(|p| p.actual));
    let t = tally(&pairs, alphabet.len(), abstain)?;
    metrics_from_tally(t)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/counting.rs"]
mod tests;
