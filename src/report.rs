use std::{fs, path::Path};

use crate::{
    ScoreDiffError,
    delta::{DeltaRecord, DeltaReport, MetricDelta},
    score_log::Metric,
};

/// Rendered in place of a value whose delta could not be computed.
pub const NOT_COMPUTABLE: &str = "N/A";

/// Default report filename, written to the current working directory.
pub const DEFAULT_REPORT_FILE: &str = "improve-report.log";

/// Render the report text: per test, one block of per-input metric lines
/// followed by per-metric averages.
///
/// Values are the raw improvement fractions formatted to five decimal
/// places; the `improve %` label is attached to the fraction itself, so a
/// 20% improvement prints as `0.20000%`. Averages skip `N/A` entries
/// entirely rather than counting them as zero.
pub fn render_report(report: &DeltaReport) -> String {
    let mut out = String::new();
    for (test_name, inputs) in &report.tests {
        out.push_str(&format!("=={test_name}==\n"));
        for (input_name, record) in inputs {
            out.push_str(&format!("--{input_name}--\n"));
            for metric in Metric::ALL {
                if let Some(delta) = record.get(metric) {
                    out.push_str(&format!(
                        "{} improve %: {}\n",
                        metric.label(),
                        format_delta(delta)
                    ));
                }
            }
        }
        out.push_str("------\n");
        for metric in Metric::ALL {
            if let Some(average) = average_delta(inputs.values(), metric) {
                out.push_str(&format!(
                    "Average {} improve %: {}\n",
                    metric.label(),
                    format_delta(average)
                ));
            }
        }
        out.push_str("======\n");
    }
    out
}

/// Write the rendered report to `path`, truncating any existing file.
pub fn write_report(report: &DeltaReport, path: &Path) -> Result<(), ScoreDiffError> {
    fs::write(path, render_report(report))
        .map_err(|e| ScoreDiffError::io(format!("write {}: {e}", path.display())))
}

fn format_delta(delta: MetricDelta) -> String {
    match delta {
        MetricDelta::Computed(value) => format!("{value:.5}%"),
        MetricDelta::NotComputable => NOT_COMPUTABLE.to_string(),
    }
}

/// Mean of the computable deltas for `metric`, `None` when no input
/// carried the metric at all, `NotComputable` when every carrier was `N/A`.
fn average_delta<'a, I>(records: I, metric: Metric) -> Option<MetricDelta>
where
    I: Iterator<Item = &'a DeltaRecord>,
{
    let mut observed = false;
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in records {
        if let Some(delta) = record.get(metric) {
            observed = true;
            if let MetricDelta::Computed(value) = delta {
                sum += value;
                count += 1;
            }
        }
    }
    if !observed {
        return None;
    }
    if count == 0 {
        return Some(MetricDelta::NotComputable);
    }
    Some(MetricDelta::Computed(sum / count as f64))
}
