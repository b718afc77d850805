use crate::input::{LabelEncoding, RecordFormatError};
use crate::model::Instance;
use crate::model::profile::RecordValidation;

const REFERENCE_ID_TOKEN: usize = 0;
const REFERENCE_LABELS_TOKEN: usize = 1;
const PREDICTED_ID_TOKEN: usize = 5;
const PREDICTED_LABELS_TOKEN: usize = 6;
const MIN_TOKENS: usize = PREDICTED_LABELS_TOKEN + 1;

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// Layout: `refId refLabels _ _ _ predId predLabels [...]`; anything past the
/// seventh token is ignored.
pub fn parse_record(
    line: &str,
    line_no: usize,
    encoding: LabelEncoding,
    validation: RecordValidation,
) -> Result<Option<Instance>, RecordFormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() < MIN_TOKENS {
        return Err(RecordFormatError::TooFewTokens {
            line: line_no,
            found: tokens.len(),
        });
    }

    let reference_id = tokens[REFERENCE_ID_TOKEN];
    let predicted_id = tokens[PREDICTED_ID_TOKEN];
    let reference = split_labels(tokens[REFERENCE_LABELS_TOKEN], encoding);
    let predicted = split_labels(tokens[PREDICTED_LABELS_TOKEN], encoding);

    if reference_id != predicted_id {
        return Err(RecordFormatError::IdMismatch {
            line: line_no,
            reference: reference_id.to_string(),
            predicted: predicted_id.to_string(),
        });
    }
    if reference.len() != predicted.len() && validation == RecordValidation::RejectAnyMismatch {
        return Err(RecordFormatError::LengthMismatch {
            line: line_no,
            reference: reference.len(),
            predicted: predicted.len(),
        });
    }

    Ok(Some(Instance::from_halves(
        line_no,
        reference_id,
        reference,
        predicted,
    )))
}

pub fn split_labels(raw: &str, encoding: LabelEncoding) -> Vec<String> {
    match encoding {
        LabelEncoding::PerCharacter => raw.chars().map(|c| c.to_string()).collect(),
        LabelEncoding::HashDelimited => raw.split('#').map(str::to_string).collect(),
    }
}
