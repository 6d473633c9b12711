use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered map keyed by test or input name.
pub type OrderedMap<V> = IndexMap<String, V, ahash::RandomState>;

/// The fixed set of metrics a score log can carry per input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Cost,
    HeapUsage,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Cost, Metric::HeapUsage];

    /// Label used verbatim in report lines.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Cost => "cost",
            Metric::HeapUsage => "heapUsage",
        }
    }
}

/// Measurements recorded for one input. A field stays `None` when the
/// source log never supplied that metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub cost: Option<f64>,
    pub heap_usage: Option<f64>,
}

impl MetricRecord {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Cost => self.cost,
            Metric::HeapUsage => self.heap_usage,
        }
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Cost => self.cost = Some(value),
            Metric::HeapUsage => self.heap_usage = Some(value),
        }
    }
}

/// One fully parsed score log: test name -> input name -> measurements.
/// Both levels keep the order in which names first appeared in the file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreLog {
    pub tests: OrderedMap<OrderedMap<MetricRecord>>,
}

impl ScoreLog {
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn test_count(&self) -> usize {
        self.tests.len()
    }

    pub fn input_count(&self) -> usize {
        self.tests.values().map(|inputs| inputs.len()).sum()
    }

    pub fn record(&self, test: &str, input: &str) -> Option<&MetricRecord> {
        self.tests.get(test)?.get(input)
    }
}
