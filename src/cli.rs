use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    ScoreDiffError, compute_deltas,
    log_parse::parse_score_log,
    report::{DEFAULT_REPORT_FILE, write_report},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub before: PathBuf,
    pub after: PathBuf,
    pub out: PathBuf,
}

impl CliConfig {
    /// Parse argv. Exactly two positional arguments are accepted, the
    /// "before" and "after" log paths in that order; `--out` overrides the
    /// report destination.
    pub fn from_args(args: &[&str]) -> Result<Self, ScoreDiffError> {
        let mut out = PathBuf::from(DEFAULT_REPORT_FILE);
        let mut positional = Vec::new();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--out" => {
                    out = PathBuf::from(
                        *iter
                            .next()
                            .ok_or_else(|| ScoreDiffError::usage("--out requires a value"))?,
                    );
                }
                other if other.starts_with('-') => {
                    return Err(ScoreDiffError::usage(format!("unknown flag {other}")));
                }
                _ => positional.push(*arg),
            }
        }
        match positional.as_slice() {
            [before, after] => Ok(Self {
                before: PathBuf::from(*before),
                after: PathBuf::from(*after),
                out,
            }),
            _ => Err(ScoreDiffError::usage(format!(
                "expected 2 log paths, got {}",
                positional.len()
            ))),
        }
    }

    pub fn help() -> &'static str {
        "Usage: scorediff <before.log> <after.log> [--out improve-report.log]\n"
    }
}

/// Run the whole pipeline: read both logs, parse, diff, write the report.
/// Both inputs are read completely before any processing; the report file
/// is only created once every fallible step has succeeded.
pub fn run(config: &CliConfig) -> Result<(), ScoreDiffError> {
    let before_text = read_log(&config.before)?;
    let after_text = read_log(&config.after)?;
    let before = parse_score_log(&before_text)?;
    let after = parse_score_log(&after_text)?;
    let report = compute_deltas(&before, &after);
    write_report(&report, &config.out)
}

fn read_log(path: &Path) -> Result<String, ScoreDiffError> {
    fs::read_to_string(path)
        .map_err(|e| ScoreDiffError::io(format!("read {}: {e}", path.display())))
}
