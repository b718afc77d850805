use crate::input::ParsedInput;
use crate::model::profile::ScoringProfile;
use crate::model::traits::trait_name;
use crate::report::{Report, TraitRow, mean_row};
use crate::scoring::ScoringStrategy;

/// Scores every trait column in ascending order and appends the mean row.
///
/// Unavailable traits are left out of the mean rather than counted as zero.
pub fn score(
    parsed: &ParsedInput,
    strategy: ScoringStrategy,
    profile: &ScoringProfile,
) -> Report {
    let trait_count = parsed.trait_count();
    let mut rows = Vec::with_capacity(trait_count);

    for column in 0..trait_count {
        let name = trait_name(column).into_owned();
        let outcome = strategy.score_trait(&parsed.instances, column, trait_count, profile);
        if let Err(err) = &outcome {
            tracing::warn!(
                strategy = strategy.name(),
                trait_name = %name,
                "trait unavailable: {err}"
            );
        }
        rows.push(TraitRow { name, outcome });
    }

    let mut report = Report {
        strategy,
        profile: profile.name,
        accepted: parsed.instances.len(),
        rejected: parsed.rejected.len(),
        rows,
        average: None,
    };
    report.average = mean_row(report.available());
    report
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
