use scorediff::{MetricDelta, compute_deltas, parse_score_log};

fn log(text: &str) -> scorediff::ScoreLog {
    parse_score_log(text).expect("parse")
}

#[test]
fn test_identical_logs_yield_zero_deltas() {
    let text = "\
#### suiteA ####
== caseX ==
Cost: 123.5
Max heap usage (bytes): 4096
== caseY ==
Cost: 88
";
    let report = compute_deltas(&log(text), &log(text));
    let case_x = &report.tests["suiteA"]["caseX"];
    assert_eq!(case_x.cost, Some(MetricDelta::Computed(0.0)));
    assert_eq!(case_x.heap_usage, Some(MetricDelta::Computed(0.0)));
    let case_y = &report.tests["suiteA"]["caseY"];
    assert_eq!(case_y.cost, Some(MetricDelta::Computed(0.0)));
    assert_eq!(case_y.heap_usage, None);
}

#[test]
fn test_improvement_fraction_is_signed() {
    let before = log("#### s ####\n== i ==\nCost: 100\nMax heap usage (bytes): 2000\n");
    let after = log("#### s ####\n== i ==\nCost: 80\nMax heap usage (bytes): 2500\n");
    let record = &compute_deltas(&before, &after).tests["s"]["i"];
    assert_eq!(record.cost, Some(MetricDelta::Computed(0.2)));
    assert_eq!(record.heap_usage, Some(MetricDelta::Computed(-0.25)));
}

#[test]
fn test_zero_baseline_is_not_computable() {
    let before = log("#### s ####\n== i ==\nCost: 0\n");
    let after = log("#### s ####\n== i ==\nCost: 50\n");
    let record = &compute_deltas(&before, &after).tests["s"]["i"];
    assert_eq!(record.cost, Some(MetricDelta::NotComputable));
}

#[test]
fn test_missing_input_in_after_is_not_computable() {
    let before = log("#### s ####\n== i ==\nCost: 10\nMax heap usage (bytes): 20\n");
    let after = log("#### s ####\n== other ==\nCost: 10\n");
    let record = &compute_deltas(&before, &after).tests["s"]["i"];
    assert_eq!(record.cost, Some(MetricDelta::NotComputable));
    assert_eq!(record.heap_usage, Some(MetricDelta::NotComputable));
}

#[test]
fn test_missing_test_in_after_is_not_computable() {
    let before = log("#### s ####\n== i ==\nCost: 10\n");
    let after = log("#### unrelated ####\n== i ==\nCost: 10\n");
    let record = &compute_deltas(&before, &after).tests["s"]["i"];
    assert_eq!(record.cost, Some(MetricDelta::NotComputable));
}

#[test]
fn test_missing_metric_in_after_is_not_computable() {
    let before = log("#### s ####\n== i ==\nCost: 10\nMax heap usage (bytes): 20\n");
    let after = log("#### s ####\n== i ==\nCost: 5\n");
    let record = &compute_deltas(&before, &after).tests["s"]["i"];
    assert_eq!(record.cost, Some(MetricDelta::Computed(0.5)));
    assert_eq!(record.heap_usage, Some(MetricDelta::NotComputable));
}

#[test]
fn test_after_only_tests_are_not_reported() {
    let before = log("#### s ####\n== i ==\nCost: 10\n");
    let after = log("#### s ####\n== i ==\nCost: 10\n#### extra ####\n== j ==\nCost: 1\n");
    let report = compute_deltas(&before, &after);
    assert_eq!(report.tests.len(), 1);
    assert!(report.tests.get("extra").is_none());
}

#[test]
fn test_delta_report_is_json_dumpable() {
    let before = log("#### s ####\n== i ==\nCost: 100\n");
    let after = log("#### s ####\n== i ==\nCost: 75\n");
    let value = serde_json::to_value(compute_deltas(&before, &after)).expect("serialize");
    assert_eq!(value["tests"]["s"]["i"]["cost"]["Computed"], 0.25);

    let missing = compute_deltas(&before, &log(""));
    let value = serde_json::to_value(missing).expect("serialize");
    assert_eq!(value["tests"]["s"]["i"]["cost"], "NotComputable");
}
