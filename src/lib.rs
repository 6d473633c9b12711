//! Score-log comparison for benchmark runs.
//!
//! scorediff parses the text logs a benchmark harness emits for a "before"
//! and an "after" run, computes the relative improvement of every metric
//! per test and input, and writes an aggregated text report with per-input
//! lines and per-test averages.
//!
//! The pipeline is three pure stages glued together by the CLI:
//!
//! - [`parse_score_log`] turns one log's text into a [`ScoreLog`],
//! - [`compute_deltas`] diffs two parsed logs into a [`DeltaReport`],
//! - [`render_report`] / [`write_report`] produce the final text.
//!
//! Run Criterion benchmarks with `cargo bench` to inspect reports under
//! `target/criterion`.

pub mod cli;
pub mod delta;
pub mod errors;
pub mod log_parse;
pub mod report;
pub mod score_data;
pub mod score_log;

pub use crate::delta::{DeltaRecord, DeltaReport, MetricDelta, compute_deltas};
pub use crate::errors::ScoreDiffError;
pub use crate::log_parse::parse_score_log;
pub use crate::report::{DEFAULT_REPORT_FILE, NOT_COMPUTABLE, render_report, write_report};
pub use crate::score_log::{Metric, MetricRecord, OrderedMap, ScoreLog};
