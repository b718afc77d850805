use crate::scoring::MetricComputationError;

/// One scored unit. `values` holds the reference half followed by the
/// predicted half; calculators address trait `c` as `c` and `c + trait_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub line_no: usize,
    pub reference_id: String,
    pub values: Vec<String>,
    pub reference_len: usize,
}

impl Instance {
    pub fn from_halves(
        line_no: usize,
        reference_id: &str,
        reference: Vec<String>,
        predicted: Vec<String>,
    ) -> Self {
        let reference_len = reference.len();
        let mut values = reference;
        values.extend(predicted);
        Self {
            line_no,
            reference_id: reference_id.to_string(),
            values,
            reference_len,
        }
    }

    pub fn value(&self, column: usize) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn trait_count(&self) -> usize {
        self.values.len() / 2
    }

    pub fn is_balanced(&self) -> bool {
        self.reference_len * 2 == self.values.len()
    }
}

/// One (actual, predicted) cell pair for a single trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPair<'a> {
    pub line_no: usize,
    pub actual: &'a str,
    pub predicted: &'a str,
}

/// Extracts one trait's reference/predicted pairs in instance order.
///
/// A record too short to reach either column (possible only when ragged
/// records were accepted) fails the whole trait.
pub fn paired_column(
    instances: &[Instance],
    reference_column: usize,
    predicted_column: usize,
) -> Result<Vec<LabelPair<'_>>, MetricComputationError> {
    let mut pairs = Vec::with_capacity(instances.len());
    for inst in instances {
        let actual = inst
            .value(reference_column)
            .ok_or(MetricComputationError::MissingValue {
                line: inst.line_no,
                column: reference_column,
            })?;
        let predicted = inst
            .value(predicted_column)
            .ok_or(MetricComputationError::MissingValue {
                line: inst.line_no,
                column: predicted_column,
            })?;
        pairs.push(LabelPair {
            line_no: inst.line_no,
            actual,
            predicted,
        });
    }
    Ok(pairs)
}
