use thiserror::Error;

pub mod counting;
pub mod macro_avg;
pub mod rmse;

use crate::input::LabelEncoding;
use crate::model::Instance;
use crate::model::profile::ScoringProfile;
use crate::report::MetricRow;

/// Why one trait produced no metrics. The run continues with the other traits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricComputationError {
    #[error("{quantity} is undefined (zero denominator)")]
    DivisionByZero { quantity: &'static str },
    #[error("expected 2 or 3 distinct reference labels, found {size}")]
    UnsupportedAlphabet { size: usize },
    #[error("line {line}: '{token}' is not a number")]
    NonNumeric { line: usize, token: String },
    #[error("line {line}: no value at column {column}")]
    MissingValue { line: usize, column: usize },
    #[error("no instances to score")]
    NoInstances,
}

/// `num / den`, failing instead of producing NaN or infinity.
pub fn ratio(num: f64, den: f64, quantity: &'static str) -> Result<f64, MetricComputationError> {
    if den == 0.0 {
        return Err(MetricComputationError::DivisionByZero { quantity });
    }
    Ok(num / den)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStrategy {
    /// Two/three-class tp/fp/fn counting with an abstain label.
    CountingF1,
    /// Per-class P/R/F1 from a confusion matrix, averaged over classes.
    MacroConfusionF1,
    /// Root-mean-square error over numeric values.
    Rmse,
}

impl ScoringStrategy {
    pub fn name(self) -> &'static str {
        match self {
            ScoringStrategy::CountingF1 => "counting-f1",
            ScoringStrategy::MacroConfusionF1 => "macro-confusion-f1",
            ScoringStrategy::Rmse => "rmse",
        }
    }

    pub fn encoding(self) -> LabelEncoding {
        match self {
            ScoringStrategy::CountingF1 | ScoringStrategy::MacroConfusionF1 => {
                LabelEncoding::PerCharacter
            }
            ScoringStrategy::Rmse => LabelEncoding::HashDelimited,
        }
    }

    /// Keys of `MetricRow::values`, in order.
    pub fn metric_keys(self) -> &'static [&'static str] {
        match self {
            ScoringStrategy::CountingF1 => &["precision", "recall", "f1", "accuracy"],
            ScoringStrategy::MacroConfusionF1 => &["precision", "recall", "f1"],
            ScoringStrategy::Rmse => &["rmse"],
        }
    }

    /// Column headers of the console table; a prefix of `metric_keys`.
    pub fn text_headers(self) -> &'static [&'static str] {
        match self {
            ScoringStrategy::CountingF1 => &["P", "R", "F1"],
            ScoringStrategy::MacroConfusionF1 => &["P(Avg)", "R(Avg)", "F1(Avg)"],
            ScoringStrategy::Rmse => &["RMSE"],
        }
    }

    pub fn score_trait(
        self,
        instances: &[Instance],
        column: usize,
        trait_count: usize,
        profile: &ScoringProfile,
    ) -> Result<MetricRow, MetricComputationError> {
        let predicted_column = column + trait_count;
        match self {
            ScoringStrategy::CountingF1 => {
                counting::score(instances, column, predicted_column, profile.abstain_label)
                    .map(|m| m.into_row())
            }
            ScoringStrategy::MacroConfusionF1 => {
                macro_avg::score(instances, column, predicted_column, profile.macro_averaging)
                    .map(|m| m.into_row())
            }
            ScoringStrategy::Rmse => rmse::score(instances, column, predicted_column)
                .map(|rmse| MetricRow::new(vec![rmse])),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/mod.rs"]
mod tests;
