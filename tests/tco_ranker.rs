//! 기준 부품 대비 대체 부품 순위화 테스트.
use component_tco_toolbox::tco::{compare, ComponentCostInput, CostParameters, TcoError};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn reference_params() -> CostParameters {
    CostParameters {
        quantity_per_build: 100,
        builds_per_year: 12,
        scrap_percent: 2.0,
        shipping_cost_per_order: 50.0,
        lead_time_buffer_days: 30,
        inventory_carrying_cost_rate: 0.15,
    }
}

fn identifiers(result: &component_tco_toolbox::tco::ComparisonResult<'_>) -> Vec<String> {
    result
        .iter()
        .map(|e| e.component.identifier.clone())
        .collect()
}

#[test]
fn baseline_first_then_ascending_unit_cost() {
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let alternatives = vec![
        ComponentCostInput::new("ALT-C", 0.95, 0),
        ComponentCostInput::new("ALT-EXPENSIVE", 1.40, 0),
        ComponentCostInput::new("ALT-B", 0.90, 500),
    ];
    let result = compare(&baseline, &alternatives, &reference_params()).expect("compare");

    assert_eq!(
        identifiers(&result),
        vec!["ORIG", "ALT-B", "ALT-C", "ALT-EXPENSIVE"]
    );
    assert_eq!(result.len(), 4);
    assert!(result.baseline().is_baseline);
    assert!(result.alternatives().iter().all(|e| !e.is_baseline));

    let costs: Vec<f64> = result
        .alternatives()
        .iter()
        .map(|e| e.breakdown.effective_unit_cost)
        .collect();
    assert!(costs.windows(2).all(|w| w[0] <= w[1]), "{costs:?}");

    let best = result.best_alternative().expect("best");
    assert_eq!(best.component.identifier, "ALT-B");
    assert!(costs.iter().all(|c| best.breakdown.effective_unit_cost <= *c));
}

#[test]
fn baseline_delta_is_zero_and_alternative_deltas_are_relative() {
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let alternatives = vec![ComponentCostInput::new("ALT-C", 0.95, 0)];
    let result = compare(&baseline, &alternatives, &reference_params()).expect("compare");

    assert_eq!(result.baseline().breakdown.annual_cost_delta, 0.0);
    let base = result.baseline().breakdown.annual_cost;
    let alt = &result.alternatives()[0];
    assert_close(
        "delta",
        alt.breakdown.annual_cost_delta,
        alt.breakdown.annual_cost - base,
        1e-12,
    );
    assert!(alt.breakdown.annual_cost_delta < 0.0);
}

#[test]
fn dominating_moq_penalty_makes_cheaper_part_costlier() {
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let alternatives = vec![ComponentCostInput::new("ALT-BULK", 0.90, 10_000)];
    let result = compare(&baseline, &alternatives, &reference_params()).expect("compare");

    let alt = &result.alternatives()[0];
    // 0.90 × (10000 − 100) × 0.15
    assert_close("moq penalty", alt.breakdown.moq_penalty_cost, 1336.5, 1e-6);
    assert!(alt.breakdown.material_cost < result.baseline().breakdown.material_cost);
    assert!(alt.breakdown.annual_cost_delta > 0.0);

    let summary = result.summary();
    assert_eq!(summary.cheaper_count, 0);
    assert_eq!(summary.costlier_count, 1);
    assert!(summary.best_annual_cost_delta_percent.expect("percent") > 0.0);
}

#[test]
fn empty_alternatives_returns_baseline_only() {
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let result = compare(&baseline, &[], &reference_params()).expect("compare");

    assert_eq!(result.len(), 1);
    assert!(result.best_alternative().is_none());
    assert_eq!(identifiers(&result), vec!["ORIG"]);
    let summary = result.summary();
    assert_eq!(summary.best_identifier, None);
    assert_eq!(summary.baseline_identifier, "ORIG");
}

#[test]
fn ties_keep_input_order() {
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let alternatives = vec![
        ComponentCostInput::new("TWIN-1", 0.80, 0),
        ComponentCostInput::new("CHEAPEST", 0.50, 0),
        ComponentCostInput::new("TWIN-2", 0.80, 0),
        ComponentCostInput::new("TWIN-3", 0.80, 0),
    ];
    let result = compare(&baseline, &alternatives, &reference_params()).expect("compare");
    assert_eq!(
        identifiers(&result),
        vec!["ORIG", "CHEAPEST", "TWIN-1", "TWIN-2", "TWIN-3"]
    );
}

#[test]
fn one_invalid_alternative_fails_whole_comparison() {
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let alternatives = vec![
        ComponentCostInput::new("OK", 0.80, 0),
        ComponentCostInput::new("BROKEN", f64::NAN, 0),
    ];
    let err = compare(&baseline, &alternatives, &reference_params()).unwrap_err();
    match err {
        TcoError::InvalidInput { identifier, .. } => assert_eq!(identifier, "BROKEN"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn invalid_parameters_propagate() {
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let params = CostParameters {
        quantity_per_build: 0,
        ..reference_params()
    };
    let err = compare(&baseline, &[], &params).unwrap_err();
    assert!(matches!(err, TcoError::InvalidParameters { .. }));
}

#[test]
fn comparison_is_repeatable_and_iteration_restartable() {
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let alternatives = vec![
        ComponentCostInput::new("A", 1.10, 0),
        ComponentCostInput::new("B", 0.70, 300),
        ComponentCostInput::new("C", 0.85, 0),
    ];
    let params = reference_params();
    let first = compare(&baseline, &alternatives, &params).expect("first");
    let second = compare(&baseline, &alternatives, &params).expect("second");
    assert_eq!(first, second);
    assert_eq!(identifiers(&first), identifiers(&first));
    assert_eq!(first.iter().count(), (&first).into_iter().count());
}

#[test]
fn delta_percent_uses_baseline_annual_cost() {
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let alternatives = vec![ComponentCostInput::new("ALT", 0.50, 0)];
    let result = compare(&baseline, &alternatives, &reference_params()).expect("compare");
    let alt = &result.alternatives()[0];
    let pct = result.annual_cost_delta_percent(alt).expect("percent");
    let expected =
        alt.breakdown.annual_cost_delta / result.baseline().breakdown.annual_cost * 100.0;
    assert_close("percent", pct, expected, 1e-12);
    assert_eq!(result.annual_cost_delta_percent(result.baseline()), Some(0.0));
}

#[test]
fn delta_percent_absent_when_baseline_costs_nothing() {
    let params = CostParameters {
        shipping_cost_per_order: 0.0,
        ..reference_params()
    };
    let baseline = ComponentCostInput {
        identifier: "FREE".into(),
        unit_price: None,
        minimum_order_quantity: None,
    };
    let alternatives = vec![ComponentCostInput::new("ALT", 0.5, 0)];
    let result = compare(&baseline, &alternatives, &params).expect("compare");
    assert_eq!(result.baseline().breakdown.annual_cost, 0.0);
    assert_eq!(result.annual_cost_delta_percent(&result.alternatives()[0]), None);
}

#[test]
fn zero_annual_volume_ranks_by_annual_cost() {
    let params = CostParameters {
        builds_per_year: 0,
        ..reference_params()
    };
    let baseline = ComponentCostInput::new("ORIG", 1.00, 0);
    let alternatives = vec![
        ComponentCostInput::new("HUGE-MOQ", 5.00, 100_000),
        ComponentCostInput::new("CHEAP", 0.01, 0),
    ];
    let result = compare(&baseline, &alternatives, &params).expect("compare");

    assert!(result
        .alternatives()
        .iter()
        .all(|e| e.breakdown.effective_unit_cost == 0.0));
    let best = result.best_alternative().expect("best");
    assert_eq!(best.component.identifier, "CHEAP");
    assert!(best.breakdown.annual_cost < result.alternatives()[1].breakdown.annual_cost);
    assert_eq!(identifiers(&result), vec!["ORIG", "CHEAP", "HUGE-MOQ"]);
}
