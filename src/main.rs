mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod scoring;

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use thiserror::Error;

use crate::input::InputError;
use crate::model::profile::ScoringProfile;
use crate::pipeline::stage1_parse::parse;
use crate::pipeline::stage2_score::score;
use crate::pipeline::stage3_report::{OutputFormat, ReportError, write_reports};
use crate::scoring::ScoringStrategy;

const AFTER_HELP: &str = "\
e.g., personality-scorer -i myp_labels.txt -u -f
   or personality-scorer -i myp_numeric.txt -n

Class and numeric predictions use different input formats, so -n cannot be
combined with -u or -f.";

/// Scores reference vs. predicted personality-trait annotations.
#[derive(Debug, Parser)]
#[command(name = "personality-scorer", version, after_help = AFTER_HELP)]
struct Cli {
    /// File with reference and predicted labels, one instance per line.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: PathBuf,

    /// Macro-averaged (un-weighted) precision, recall and F1.
    #[arg(short = 'u', long = "unweighted")]
    unweighted: bool,

    /// Counting-based precision, recall and F1.
    #[arg(short = 'f', long = "f-measure")]
    f_measure: bool,

    /// Root-mean-square error over numeric predictions.
    #[arg(short = 'n', long = "numeric", conflicts_with_all = ["unweighted", "f_measure"])]
    numeric: bool,

    /// Validation and averaging behavior.
    #[arg(long, value_enum, default_value_t = ProfileArg::Strict)]
    profile: ProfileArg,

    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    /// Reject any inconsistent record; report true macro recall/F1.
    Strict,
    /// Reproduce legacy scorer output, known defects included.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input: PathBuf,
    strategies: Vec<ScoringStrategy>,
    profile: ScoringProfile,
    format: OutputFormat,
}

#[derive(Debug, Error)]
enum RunError {
    #[error("{} file does not exist. Please check the label file.", .0.display())]
    MissingInput(PathBuf),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(RunConfig::from_cli(cli)) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

impl RunConfig {
    fn from_cli(cli: Cli) -> Self {
        let profile = match cli.profile {
            ProfileArg::Strict => ScoringProfile::strict_v1(),
            ProfileArg::Legacy => ScoringProfile::legacy_v1(),
        };
        let format = match cli.format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        };
        Self {
            input: cli.input,
            strategies: select_strategies(cli.unweighted, cli.f_measure, cli.numeric),
            profile,
            format,
        }
    }
}

/// `-n` alone; otherwise macro then counting, defaulting to macro.
fn select_strategies(unweighted: bool, f_measure: bool, numeric: bool) -> Vec<ScoringStrategy> {
    if numeric {
        return vec![ScoringStrategy::Rmse];
    }
    match (unweighted, f_measure) {
        (true, true) => vec![
            ScoringStrategy::MacroConfusionF1,
            ScoringStrategy::CountingF1,
        ],
        (false, true) => vec![ScoringStrategy::CountingF1],
        _ => vec![ScoringStrategy::MacroConfusionF1],
    }
}

fn run(config: RunConfig) -> Result<(), RunError> {
    if !config.input.exists() {
        return Err(RunError::MissingInput(config.input));
    }

    // All selected strategies share one label encoding; -n excludes the others.
    let encoding = config
        .strategies
        .first()
        .map(|s| s.encoding())
        .unwrap_or(ScoringStrategy::MacroConfusionF1.encoding());
    tracing::info!(
        profile = config.profile.name,
        strategies = ?config.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
        "scoring run"
    );

    let parsed = parse(&config.input, encoding, &config.profile)?;
    let reports = config
        .strategies
        .iter()
        .map(|&strategy| score(&parsed, strategy, &config.profile))
        .collect::<Vec<_>>();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_reports(&reports, config.format, &mut out)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
