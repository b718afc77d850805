use crate::model::{Instance, LabelPair, paired_column};
use crate::scoring::MetricComputationError;

fn parse_value(line: usize, token: &str) -> Result<f64, MetricComputationError> {
    match token.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(MetricComputationError::NonNumeric {
            line,
            token: token.to_string(),
        }),
    }
}

pub fn rmse_of_pairs(pairs: &[LabelPair<'_>]) -> Result<f64, MetricComputationError> {
    if pairs.is_empty() {
        return Err(MetricComputationError::NoInstances);
    }
    let mut error_sum = 0.0f64;
    for pair in pairs {
        let actual = parse_value(pair.line_no, pair.actual)?;
        let predicted = parse_value(pair.line_no, pair.predicted)?;
        let d = predicted - actual;
        error_sum += d * d;
    }
    Ok((error_sum / pairs.len() as f64).sqrt())
}

pub fn score(
    instances: &[Instance],
    reference_column: usize,
    predicted_column: usize,
) -> Result<f64, MetricComputationError> {
    let pairs = paired_column(instances, reference_column, predicted_column)?;
    rmse_of_pairs(&pairs)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/rmse.rs"]
mod tests;
