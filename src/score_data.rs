use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::log_parse::{COST_PREFIX, HEAP_PREFIX};

/// Shape of a generated score log.
#[derive(Clone, Copy, Debug)]
pub struct LogShape {
    pub tests: usize,
    pub inputs: usize,
}

/// Generate a deterministic score log for benches and tests. Equal shapes
/// and seeds produce byte-identical logs.
pub fn generate_score_log(shape: LogShape, seed: u64) -> String {
    assert!(shape.tests > 0, "tests must be positive");
    assert!(shape.inputs > 0, "inputs must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::new();
    for test in 0..shape.tests {
        out.push_str(&format!("#### test{test} ####\n"));
        for input in 0..shape.inputs {
            out.push_str(&format!("== input{input} ==\n"));
            let cost = rng.gen_range(10.0..10_000.0_f64);
            let heap = rng.gen_range(1_024.0..8_388_608.0_f64);
            out.push_str(&format!("{COST_PREFIX}{cost:.2}\n"));
            out.push_str(&format!("{HEAP_PREFIX}{heap:.0}\n"));
        }
    }
    out
}

/// Scale every metric value in `log` by `factor`, leaving all other lines
/// untouched. Scaling by a factor below 1.0 fabricates an "after" run that
/// improved uniformly.
pub fn scale_metrics(log: &str, factor: f64) -> String {
    let mut out = String::new();
    for line in log.lines() {
        if let Some(scaled) = scale_line(line, COST_PREFIX, factor) {
            out.push_str(&scaled);
        } else if let Some(scaled) = scale_line(line, HEAP_PREFIX, factor) {
            out.push_str(&scaled);
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

fn scale_line(line: &str, prefix: &str, factor: f64) -> Option<String> {
    let value: f64 = line.strip_prefix(prefix)?.trim().parse().ok()?;
    Some(format!("{prefix}{:.2}", value * factor))
}
