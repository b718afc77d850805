/// Which record-level inconsistencies cause a line to be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidation {
    /// Reject only on an id mismatch. Label-count mismatches pass through and
    /// fail (or misalign) later.
    RejectIdMismatch,
    /// Reject on an id mismatch or a label-count mismatch.
    RejectAnyMismatch,
}

/// Which accumulator feeds the macro recall and F1 columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroAveraging {
    /// Recall and F1 repeat the precision average (legacy output).
    PrecisionReused,
    /// Each column averages its own per-class values.
    PerMetric,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringProfile {
    pub name: &'static str,
    pub record_validation: RecordValidation,
    pub macro_averaging: MacroAveraging,
    pub abstain_label: &'static str,
}

impl ScoringProfile {
    pub fn strict_v1() -> Self {
        Self {
            name: "strict",
            record_validation: RecordValidation::RejectAnyMismatch,
            macro_averaging: MacroAveraging::PerMetric,
            abstain_label: "o",
        }
    }

    /// Reproduces the published scorer's numbers, defects included.
    pub fn legacy_v1() -> Self {
        let mut base = Self::strict_v1();
        base.name = "legacy";
        base.record_validation = RecordValidation::RejectIdMismatch;
        base.macro_averaging = MacroAveraging::PrecisionReused;
        base
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::strict_v1()
    }
}
