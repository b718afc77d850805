use std::path::Path;

use crate::input::{InputError, LabelEncoding, ParsedInput, read_records};
use crate::model::profile::ScoringProfile;

/// Loads every record of `path`, logging each rejected line.
///
/// Fails when the file cannot be read or when no line survives validation,
/// since the trait count is taken from the first accepted record.
pub fn parse(
    path: &Path,
    encoding: LabelEncoding,
    profile: &ScoringProfile,
) -> Result<ParsedInput, InputError> {
    let parsed = read_records(path, encoding, profile.record_validation)?;

    for err in &parsed.rejected {
        tracing::warn!(line = err.line(), "skipping record: {err}");
    }
    for inst in parsed.instances.iter().filter(|i| !i.is_balanced()) {
        tracing::debug!(
            line = inst.line_no,
            id = %inst.reference_id,
            "accepted record with unequal label counts"
        );
    }

    if parsed.instances.is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        });
    }

    tracing::info!(
        path = %parsed.path.display(),
        accepted = parsed.instances.len(),
        rejected = parsed.rejected.len(),
        traits = parsed.trait_count(),
        "records loaded"
    );
    Ok(parsed)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_parse.rs"]
mod tests;
