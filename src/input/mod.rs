use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;
pub mod record;

use reader::open_maybe_gz;
use record::parse_record;

use crate::model::Instance;
use crate::model::profile::RecordValidation;

/// How the two label tokens of a record are split into per-trait values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelEncoding {
    /// One character per trait, e.g. `nnynn`.
    PerCharacter,
    /// `#`-joined numeric tokens, e.g. `3.1#2.0#4.5#1.0#2.2`.
    HashDelimited,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read input file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no valid records in {}", .path.display())]
    Empty { path: PathBuf },
}

impl InputError {
    pub fn file_access(path: &Path, source: io::Error) -> Self {
        InputError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A line that was skipped. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordFormatError {
    #[error("line {line}: expected at least 7 tokens, found {found}")]
    TooFewTokens { line: usize, found: usize },
    #[error("line {line}: instance ids differ ({reference} vs {predicted})")]
    IdMismatch {
        line: usize,
        reference: String,
        predicted: String,
    },
    #[error("line {line}: label counts differ ({reference} reference vs {predicted} predicted)")]
    LengthMismatch {
        line: usize,
        reference: usize,
        predicted: usize,
    },
    #[error("line {line}: {found} traits, but earlier records have {expected}")]
    TraitCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl RecordFormatError {
    pub fn line(&self) -> usize {
        match self {
            RecordFormatError::TooFewTokens { line, .. }
            | RecordFormatError::IdMismatch { line, .. }
            | RecordFormatError::LengthMismatch { line, .. }
            | RecordFormatError::TraitCountMismatch { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub path: PathBuf,
    pub instances: Vec<Instance>,
    pub rejected: Vec<RecordFormatError>,
}

impl ParsedInput {
    /// Half the concatenated width of the first accepted record.
    pub fn trait_count(&self) -> usize {
        self.instances.first().map(Instance::trait_count).unwrap_or(0)
    }
}

/// Reads the whole file into memory. Only I/O failures are fatal; malformed
/// lines are collected in `rejected`.
///
/// Under `RejectAnyMismatch` every accepted record must have as many traits as
/// the first accepted one, since calculators address the predicted half at a
/// fixed offset.
pub fn read_records(
    path: &Path,
    encoding: LabelEncoding,
    validation: RecordValidation,
) -> Result<ParsedInput, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut instances = Vec::new();
    let mut rejected = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|source| InputError::file_access(path, source))?;
        if read == 0 {
            break;
        }
        line_no += 1;
        match parse_record(&buf, line_no, encoding, validation) {
            Ok(Some(instance)) => match check_width(&instances, &instance, validation) {
                Ok(()) => instances.push(instance),
                Err(err) => rejected.push(err),
            },
            Ok(None) => {}
            Err(err) => rejected.push(err),
        }
    }

    Ok(ParsedInput {
        path: path.to_path_buf(),
        instances,
        rejected,
    })
}

fn check_width(
    accepted: &[Instance],
    instance: &Instance,
    validation: RecordValidation,
) -> Result<(), RecordFormatError> {
    if validation != RecordValidation::RejectAnyMismatch {
        return Ok(());
    }
    match accepted.first() {
        Some(first) if first.reference_len != instance.reference_len => {
            Err(RecordFormatError::TraitCountMismatch {
                line: instance.line_no,
                expected: first.reference_len,
                found: instance.reference_len,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
