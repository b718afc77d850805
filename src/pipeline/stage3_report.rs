use std::io::{self, Write};

use thiserror::Error;

use crate::report::Report;
use crate::report::json::render_reports_json;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn render_reports(reports: &[Report], format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(render_report_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let mut json = render_reports_json(reports)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes the whole run's output in one go.
pub fn write_reports<W: Write>(
    reports: &[Report],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), ReportError> {
    let rendered = render_reports(reports, format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
