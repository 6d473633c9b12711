use crate::{
    ScoreDiffError,
    score_log::{Metric, MetricRecord, ScoreLog},
};

pub const TEST_HEADER_PREFIX: &str = "#### ";
pub const TEST_HEADER_SUFFIX: &str = " ####";
pub const INPUT_HEADER_PREFIX: &str = "== ";
pub const INPUT_HEADER_SUFFIX: &str = " ==";
pub const COST_PREFIX: &str = "Cost: ";
pub const HEAP_PREFIX: &str = "Max heap usage (bytes): ";

/// Parse the full text of one score log into its nested test/input mapping.
///
/// The scan keeps a two-level cursor: the most recent `#### test ####` and
/// `== input ==` headers decide where subsequent metric lines land. Lines
/// matching none of the known prefixes are ignored, which keeps the parser
/// tolerant of whatever else the harness prints.
///
/// Metric lines without an established cursor and metric values that fail
/// to parse as floats are both fatal; the error names the offending line.
pub fn parse_score_log(text: &str) -> Result<ScoreLog, ScoreDiffError> {
    let mut log = ScoreLog::default();
    let mut current_test: Option<String> = None;
    let mut current_input: Option<String> = None;

    for line in text.lines() {
        if let Some(name) = delimited(line, TEST_HEADER_PREFIX, TEST_HEADER_SUFFIX) {
            log.tests.entry(name.to_string()).or_default();
            current_test = Some(name.to_string());
        } else if let Some(name) = delimited(line, INPUT_HEADER_PREFIX, INPUT_HEADER_SUFFIX) {
            let test = current_test.as_deref().ok_or_else(|| {
                ScoreDiffError::malformed(format!("input header before any test header: {line}"))
            })?;
            // Re-seen input names reset the record; the slot keeps its
            // original position in the map.
            log.tests
                .entry(test.to_string())
                .or_default()
                .insert(name.to_string(), MetricRecord::default());
            current_input = Some(name.to_string());
        } else if let Some(raw) = line.strip_prefix(COST_PREFIX) {
            store_metric(
                &mut log,
                &current_test,
                &current_input,
                Metric::Cost,
                raw,
                line,
            )?;
        } else if let Some(raw) = line.strip_prefix(HEAP_PREFIX) {
            store_metric(
                &mut log,
                &current_test,
                &current_input,
                Metric::HeapUsage,
                raw,
                line,
            )?;
        }
    }
    Ok(log)
}

fn delimited<'a>(line: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)?.strip_suffix(suffix)
}

fn store_metric(
    log: &mut ScoreLog,
    current_test: &Option<String>,
    current_input: &Option<String>,
    metric: Metric,
    raw: &str,
    line: &str,
) -> Result<(), ScoreDiffError> {
    let test = current_test.as_deref().ok_or_else(|| {
        ScoreDiffError::malformed(format!("metric line before any test header: {line}"))
    })?;
    let input = current_input.as_deref().ok_or_else(|| {
        ScoreDiffError::malformed(format!("metric line before any input header: {line}"))
    })?;
    let value: f64 = raw.trim().parse().map_err(|_| {
        ScoreDiffError::malformed(format!("unparsable {} value: {line}", metric.label()))
    })?;
    log.tests
        .entry(test.to_string())
        .or_default()
        .entry(input.to_string())
        .or_default()
        .set(metric, value);
    Ok(())
}
