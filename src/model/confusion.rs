use crate::model::{Instance, LabelAlphabet, LabelPair, paired_column};
use crate::scoring::MetricComputationError;

/// Square contingency table indexed by `[actual][predicted]`.
///
/// Rows and columns share one alphabet built from reference labels only. A
/// pair whose predicted label never occurs on the reference side is not
/// counted anywhere, so `total()` can be below the number of pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    alphabet: LabelAlphabet,
    cells: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    pub fn from_pairs(pairs: &[LabelPair<'_>]) -> Self {
        let alphabet = LabelAlphabet::from_labels(pairs.iter().map(|p| p.actual));
        let n = alphabet.len();
        let mut cells = vec![vec![0u64; n]; n];
        for pair in pairs {
            let Some(row) = alphabet.index_of(pair.actual) else {
                continue;
            };
            if let Some(col) = alphabet.index_of(pair.predicted) {
                cells[row][col] += 1;
            }
        }
        Self { alphabet, cells }
    }

    pub fn from_columns(
        instances: &[Instance],
        reference_column: usize,
        predicted_column: usize,
    ) -> Result<Self, MetricComputationError> {
        let pairs = paired_column(instances, reference_column, predicted_column)?;
        Ok(Self::from_pairs(&pairs))
    }

    pub fn alphabet(&self) -> &LabelAlphabet {
        &self.alphabet
    }

    pub fn n_classes(&self) -> usize {
        self.alphabet.len()
    }

    pub fn get(&self, actual: usize, predicted: usize) -> u64 {
        self.cells[actual][predicted]
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    /// Everything predicted as `class`.
    pub fn column_sum(&self, class: usize) -> u64 {
        self.cells.iter().map(|row| row[class]).sum()
    }

    /// Everything whose actual label is `class`.
    pub fn row_sum(&self, class: usize) -> u64 {
        self.cells[class].iter().sum()
    }

    /// Zero when nothing was predicted as `class`.
    pub fn precision(&self, class: usize) -> f64 {
        let total = self.column_sum(class);
        if total == 0 {
            return 0.0;
        }
        self.get(class, class) as f64 / total as f64
    }

    /// Zero when `class` never occurs as an actual label.
    pub fn recall(&self, class: usize) -> f64 {
        let total = self.row_sum(class);
        if total == 0 {
            return 0.0;
        }
        self.get(class, class) as f64 / total as f64
    }

    pub fn f1(&self, class: usize) -> f64 {
        let p = self.precision(class);
        let r = self.recall(class);
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/confusion.rs"]
mod tests;
