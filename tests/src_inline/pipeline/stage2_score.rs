use super::*;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::input::{LabelEncoding, read_records};
use crate::model::profile::RecordValidation;
use crate::scoring::MetricComputationError;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!(
        "personality_scorer_stage2_{}_{}",
        std::process::id(),
        id
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn parsed_from(
    lines: &[&str],
    encoding: LabelEncoding,
    validation: RecordValidation,
) -> ParsedInput {
    let path = make_temp_dir().join("labels.txt");
    let mut f = BufWriter::new(File::create(&path).unwrap());
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
    f.flush().unwrap();
    drop(f);
    read_records(&path, encoding, validation).unwrap()
}

const PARITY: [&str; 2] = [
    "id1 nnynn - - - id1 ynnnn - - - -",
    "id1 yyyyy - - - id1 ynyyy - - - -",
];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_counting_report_rows_and_average() {
    let parsed = parsed_from(
        &PARITY,
        LabelEncoding::PerCharacter,
        RecordValidation::RejectAnyMismatch,
    );
    let report = score(
        &parsed,
        ScoringStrategy::CountingF1,
        &ScoringProfile::strict_v1(),
    );
    let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Extra", "Neuro", "Agree", "Cons", "Open"]);

    let extra = report.rows[0].outcome.as_ref().unwrap();
    assert!(close(extra.values[0], 0.5));
    assert!(close(extra.values[1], 1.0));
    assert!(close(extra.values[2], 2.0 / 3.0));

    // Agree has a single reference label.
    assert_eq!(
        report.rows[2].outcome,
        Err(MetricComputationError::UnsupportedAlphabet { size: 1 })
    );

    let avg = report.average.as_ref().unwrap();
    assert!(close(avg.values[0], 0.75));
    assert!(close(avg.values[1], 1.0));
    assert!(close(avg.values[2], (2.0 / 3.0 * 2.0 + 2.0) / 4.0));
    assert_eq!(report.accepted, 2);
}

#[test]
fn test_macro_report_strict_vs_legacy() {
    let parsed = parsed_from(
        &PARITY,
        LabelEncoding::PerCharacter,
        RecordValidation::RejectAnyMismatch,
    );
    let strict = score(
        &parsed,
        ScoringStrategy::MacroConfusionF1,
        &ScoringProfile::strict_v1(),
    );
    let legacy = score(
        &parsed,
        ScoringStrategy::MacroConfusionF1,
        &ScoringProfile::legacy_v1(),
    );

    let s = strict.rows[0].outcome.as_ref().unwrap();
    assert!(close(s.values[0], 0.25));
    assert!(close(s.values[1], 0.5));
    let l = legacy.rows[0].outcome.as_ref().unwrap();
    assert_eq!(l.values, vec![0.25, 0.25, 0.25]);

    // Agree: reference all y, one prediction outside the alphabet is dropped.
    let agree = strict.rows[2].outcome.as_ref().unwrap();
    assert_eq!(agree.values, vec![1.0, 1.0, 1.0]);
    assert_eq!(strict.rows.len(), 5);
    assert!(strict.rows.iter().all(|r| r.outcome.is_ok()));
}

#[test]
fn test_rmse_report() {
    let parsed = parsed_from(
        &["a 1.0#3 - - - a 1.0#3 - - - -", "b 2.0#3 - - - b 4.0#x - - - -"],
        LabelEncoding::HashDelimited,
        RecordValidation::RejectAnyMismatch,
    );
    let report = score(&parsed, ScoringStrategy::Rmse, &ScoringProfile::strict_v1());
    let extra = report.rows[0].outcome.as_ref().unwrap();
    assert!(close(extra.values[0], 2.0f64.sqrt()));
    assert!(matches!(
        report.rows[1].outcome,
        Err(MetricComputationError::NonNumeric { line: 2, .. })
    ));
    let avg = report.average.as_ref().unwrap();
    assert!(close(avg.values[0], 2.0f64.sqrt()));
}

#[test]
fn test_legacy_ragged_record_fails_only_affected_trait() {
    let parsed = parsed_from(
        &["a nn - - - a nn - - - -", "b ny - - - b n - - - -"],
        LabelEncoding::PerCharacter,
        RecordValidation::RejectIdMismatch,
    );
    assert_eq!(parsed.instances.len(), 2);
    let report = score(
        &parsed,
        ScoringStrategy::MacroConfusionF1,
        &ScoringProfile::legacy_v1(),
    );
    assert!(report.rows[0].outcome.is_ok());
    assert_eq!(
        report.rows[1].outcome,
        Err(MetricComputationError::MissingValue { line: 2, column: 3 })
    );
    assert!(report.average.is_some());
}

#[test]
fn test_all_traits_unavailable_has_no_average() {
    let parsed = parsed_from(
        &["a oo - - - a oo - - - -", "b yy - - - b oo - - - -"],
        LabelEncoding::PerCharacter,
        RecordValidation::RejectAnyMismatch,
    );
    let report = score(
        &parsed,
        ScoringStrategy::CountingF1,
        &ScoringProfile::strict_v1(),
    );
    assert!(report.rows.iter().all(|r| r.outcome.is_err()));
    assert_eq!(report.average, None);
}

#[test]
fn test_repeated_runs_do_not_leak_state() {
    let parsed = parsed_from(
        &PARITY,
        LabelEncoding::PerCharacter,
        RecordValidation::RejectAnyMismatch,
    );
    let profile = ScoringProfile::strict_v1();
    let a = score(&parsed, ScoringStrategy::CountingF1, &profile);
    let b = score(&parsed, ScoringStrategy::CountingF1, &profile);
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.average, b.average);
}

#[test]
fn test_strict_scores_only_consistent_width_records() {
    let parsed = parsed_from(
        &[
            "a nnynn - - - a ynnnn - - - -",
            "b yyyy - - - b nyyy - - - -",
            "c ynnyy - - - c ynynn - - - -",
        ],
        LabelEncoding::PerCharacter,
        RecordValidation::RejectAnyMismatch,
    );
    assert_eq!(parsed.rejected.len(), 1);
    let report = score(
        &parsed,
        ScoringStrategy::CountingF1,
        &ScoringProfile::strict_v1(),
    );
    assert_eq!(report.accepted, 2);
    assert_eq!(report.rejected, 1);

    // Extra over lines 1 and 3: (n, y) is a false positive, (y, y) a hit.
    let extra = report.rows[0].outcome.as_ref().unwrap();
    assert!(close(extra.values[0], 0.5));
    assert!(close(extra.values[1], 1.0));
    assert!(report.rows.iter().all(|r| {
        !matches!(r.outcome, Err(MetricComputationError::MissingValue { .. }))
    }));
}
