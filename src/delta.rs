use serde::{Deserialize, Serialize};

use crate::score_log::{Metric, OrderedMap, ScoreLog};

/// Relative improvement of one metric, or the marker for a delta that
/// cannot be computed (metric missing from the "after" log, or a zero
/// baseline).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MetricDelta {
    Computed(f64),
    NotComputable,
}

impl MetricDelta {
    pub fn value(self) -> Option<f64> {
        match self {
            MetricDelta::Computed(value) => Some(value),
            MetricDelta::NotComputable => None,
        }
    }
}

/// Per-input deltas, same optional-field shape as `MetricRecord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaRecord {
    pub cost: Option<MetricDelta>,
    pub heap_usage: Option<MetricDelta>,
}

impl DeltaRecord {
    pub fn get(&self, metric: Metric) -> Option<MetricDelta> {
        match metric {
            Metric::Cost => self.cost,
            Metric::HeapUsage => self.heap_usage,
        }
    }

    pub fn set(&mut self, metric: Metric, delta: MetricDelta) {
        match metric {
            Metric::Cost => self.cost = Some(delta),
            Metric::HeapUsage => self.heap_usage = Some(delta),
        }
    }
}

/// Improvement fractions for every test and input of the "before" log.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaReport {
    pub tests: OrderedMap<OrderedMap<DeltaRecord>>,
}

/// Compute `(before - after) / before` for every metric present in the
/// "before" log. The "before" structure is the iteration skeleton: tests
/// and inputs that only exist in "after" are not represented.
pub fn compute_deltas(before: &ScoreLog, after: &ScoreLog) -> DeltaReport {
    let mut report = DeltaReport::default();
    for (test_name, inputs) in &before.tests {
        let after_inputs = after.tests.get(test_name);
        let mut deltas: OrderedMap<DeltaRecord> = OrderedMap::default();
        for (input_name, record) in inputs {
            let after_record = after_inputs.and_then(|inputs| inputs.get(input_name));
            let mut delta = DeltaRecord::default();
            for metric in Metric::ALL {
                if let Some(base) = record.get(metric) {
                    let current = after_record.and_then(|record| record.get(metric));
                    delta.set(metric, metric_delta(base, current));
                }
            }
            deltas.insert(input_name.clone(), delta);
        }
        report.tests.insert(test_name.clone(), deltas);
    }
    report
}

fn metric_delta(base: f64, current: Option<f64>) -> MetricDelta {
    match current {
        Some(value) if base != 0.0 => MetricDelta::Computed((base - value) / base),
        _ => MetricDelta::NotComputable,
    }
}
