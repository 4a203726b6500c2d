//! Integration tests for the Savings Projection Engine.
//!
//! This suite covers the end-to-end tier scenarios, the structural
//! invariants of the output (item count, category order, additivity), the
//! error cases, the memoizing wrapper, and property tests for linearity
//! and non-negativity.

use proptest::prelude::*;

use roi_engine::cache::CachedCalculator;
use roi_engine::calculation::{LINE_ITEM_COUNT, compute_all_savings};
use roi_engine::config::ConfigLoader;
use roi_engine::error::EngineError;
use roi_engine::models::{ImpactAssumptions, SavingsCategory, TierProfile};

// =============================================================================
// Test Helpers
// =============================================================================

fn mid_market() -> TierProfile {
    TierProfile {
        num_employees: 750,
        annual_hires: 112,
        avg_annual_salary: 75_000.0,
        avg_recruiter_salary: 70_000.0,
        num_recruiters: 3,
    }
}

/// Asserts two floats are equal within 1e-6 relative tolerance.
fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-6;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {}, got {} (diff {})",
        expected,
        actual,
        (actual - expected).abs()
    );
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_mid_market_full_vision_line_items() {
    let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();
    let items = &result.line_items;

    // Category 1: reduced time-to-fill
    assert_eq!(items[0].area, "Reduced Time-to-Fill");
    assert_close(items[0].annual_savings, 44.0 * 0.30 * (75_000.0 / 260.0 * 1.5) * 112.0);

    // Category 1: recruiter productivity (13 hrs x 50 wks x 3 x $70k/2080)
    assert_close(items[1].annual_savings, 65_625.0);

    // Category 1: cost-per-hire ($4,700 x 0.15 x 112)
    assert_close(items[2].annual_savings, 78_960.0);

    // Category 2: mis-hires (112 x 0.15 x 0.35 x $22,500)
    assert_close(items[3].annual_savings, 132_300.0);

    // Category 3: shift shock (112 x 0.30 x 0.43 x 0.60 x $15,750)
    assert_close(items[4].annual_savings, 136_533.6);

    // Category 4: interview scheduling (560 x 0.90 x $35)
    assert_close(items[5].annual_savings, 17_640.0);

    // Category 5: onboarding (2.8 months x $6,250 x 0.5 x 112)
    assert_close(items[6].annual_savings, 980_000.0);

    // Category 6: internal mobility (22.4 x $15,850)
    assert_close(items[7].annual_savings, 355_040.0);

    // Category 7: PM productivity ($56.25M x 0.20 x 0.03)
    assert_close(items[8].annual_savings, 337_500.0);

    // Category 7: PM turnover (27 x $15,750)
    assert_close(items[9].annual_savings, 425_250.0);

    // Category 8: workforce planning ($56.25M x 0.04)
    assert_close(items[10].annual_savings, 2_250_000.0);
}

#[test]
fn test_mid_market_total() {
    let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();

    let expected_ttf = 44.0 * 0.30 * (75_000.0 / 260.0 * 1.5) * 112.0;
    let expected_total = expected_ttf
        + 65_625.0
        + 78_960.0
        + 132_300.0
        + 136_533.6
        + 17_640.0
        + 980_000.0
        + 355_040.0
        + 337_500.0
        + 425_250.0
        + 2_250_000.0;
    assert_close(result.total_annual_savings, expected_total);
}

#[test]
fn test_mid_market_profile_derived_from_shipped_config() {
    let config = ConfigLoader::load("./config").unwrap();
    let tier = config.get_tier("Mid-Market").unwrap();

    assert_eq!(tier.to_profile(), mid_market());

    let result = compute_all_savings(&tier.to_profile(), config.impact()).unwrap();
    let direct = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();
    assert_eq!(result.line_items, direct.line_items);
}

#[test]
fn test_all_shipped_tiers_compute() {
    let config = ConfigLoader::load("./config").unwrap();

    let mut totals = Vec::new();
    for name in config.tier_names() {
        let tier = config.get_tier(name).unwrap();
        let result = compute_all_savings(&tier.to_profile(), config.impact()).unwrap();
        assert_eq!(result.line_items.len(), LINE_ITEM_COUNT);
        assert!(result.roi_multiple(tier.target_annual_price).unwrap() > 0.0);
        totals.push((tier.avg_employees, result.total_annual_savings));
    }

    // Bigger tiers project bigger savings.
    totals.sort_by_key(|(employees, _)| *employees);
    for pair in totals.windows(2) {
        assert!(pair[1].1 > pair[0].1);
    }
}

// =============================================================================
// Structural invariants
// =============================================================================

#[test]
fn test_item_count_and_category_order_are_fixed() {
    let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();

    assert_eq!(result.line_items.len(), LINE_ITEM_COUNT);
    let categories: Vec<u8> = result
        .line_items
        .iter()
        .map(|item| item.category.number())
        .collect();
    assert_eq!(categories, vec![1, 1, 1, 2, 3, 4, 5, 6, 7, 7, 8]);
}

#[test]
fn test_total_is_exactly_the_incremental_sum() {
    let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();

    let mut running = 0.0;
    for item in &result.line_items {
        running += item.annual_savings;
    }
    // Bit-exact: the engine accumulates in production order.
    assert_eq!(result.total_annual_savings, running);
}

#[test]
fn test_zero_hires_boundary() {
    let tier = TierProfile {
        annual_hires: 0,
        num_recruiters: 0,
        ..mid_market()
    };
    let result = compute_all_savings(&tier, &ImpactAssumptions::full_vision()).unwrap();

    for item in &result.line_items {
        match item.category {
            SavingsCategory::EffectivePerformanceAndDevelopment
            | SavingsCategory::StrategicWorkforcePlanning => {
                assert!(item.annual_savings > 0.0, "{} should be payroll-driven", item.area);
            }
            _ => assert_eq!(item.annual_savings, 0.0, "{} should be hire-driven", item.area),
        }
    }
}

#[test]
fn test_one_audit_step_per_line_item() {
    let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();
    assert_eq!(result.audit_trace.steps.len(), result.line_items.len());
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_zero_employees_is_invalid_input() {
    let tier = TierProfile {
        num_employees: 0,
        ..mid_market()
    };
    match compute_all_savings(&tier, &ImpactAssumptions::full_vision()).unwrap_err() {
        EngineError::InvalidInput { field, .. } => assert_eq!(field, "num_employees"),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_negative_salary_is_invalid_input() {
    let tier = TierProfile {
        avg_annual_salary: -50_000.0,
        ..mid_market()
    };
    assert!(matches!(
        compute_all_savings(&tier, &ImpactAssumptions::full_vision()).unwrap_err(),
        EngineError::InvalidInput { .. }
    ));
}

#[test]
fn test_missing_cph_key_is_reported() {
    let mut impact = ImpactAssumptions::full_vision();
    impact.remove("cph_total_reduction_percent");

    match compute_all_savings(&mid_market(), &impact).unwrap_err() {
        EngineError::MissingImpactKey { key } => {
            assert_eq!(key, "cph_total_reduction_percent");
        }
        other => panic!("Expected MissingImpactKey, got {:?}", other),
    }
}

// =============================================================================
// Memoizing wrapper
// =============================================================================

#[test]
fn test_cached_calculator_serves_repeat_scenarios() {
    let mut calculator = CachedCalculator::new();
    let impact = ImpactAssumptions::full_vision();

    let first = calculator.compute(&mid_market(), &impact).unwrap();
    let second = calculator.compute(&mid_market(), &impact).unwrap();
    assert_eq!(first, second);
    assert_eq!(calculator.hits(), 1);

    // A different scenario multiplier is a distinct cache entry.
    calculator.compute(&mid_market(), &impact.scaled(0.8)).unwrap();
    assert_eq!(calculator.len(), 2);
}

// =============================================================================
// Property tests
// =============================================================================

fn arb_tier() -> impl Strategy<Value = TierProfile> {
    (
        1u32..20_000,
        0u32..5_000,
        1_000.0f64..300_000.0,
        1_000.0f64..300_000.0,
        0u32..100,
    )
        .prop_map(
            |(num_employees, annual_hires, salary, recruiter_salary, num_recruiters)| {
                TierProfile {
                    num_employees,
                    annual_hires,
                    avg_annual_salary: salary,
                    avg_recruiter_salary: recruiter_salary,
                    num_recruiters,
                }
            },
        )
}

fn arb_canonical_impact() -> impl Strategy<Value = ImpactAssumptions> {
    // All 16 keys present, fractional values in [0, 1], hours key in [0, 40].
    proptest::collection::vec(0.0f64..=1.0, 16).prop_map(|values| {
        let mut impact = ImpactAssumptions::full_vision();
        for (key, value) in roi_engine::models::IMPACT_KEYS.into_iter().zip(values) {
            if key == "recruiter_total_hours_saved_per_week_per_recruiter" {
                impact.set(key, value * 40.0);
            } else {
                impact.set(key, value);
            }
        }
        impact
    })
}

proptest! {
    #[test]
    fn prop_additivity_holds_for_any_valid_input(
        tier in arb_tier(),
        impact in arb_canonical_impact(),
    ) {
        let result = compute_all_savings(&tier, &impact).unwrap();
        let mut running = 0.0;
        for item in &result.line_items {
            running += item.annual_savings;
        }
        prop_assert_eq!(result.total_annual_savings, running);
    }

    #[test]
    fn prop_item_count_is_invariant(
        tier in arb_tier(),
        impact in arb_canonical_impact(),
    ) {
        let result = compute_all_savings(&tier, &impact).unwrap();
        prop_assert_eq!(result.line_items.len(), LINE_ITEM_COUNT);
    }

    #[test]
    fn prop_canonical_impact_yields_non_negative_items(
        tier in arb_tier(),
        impact in arb_canonical_impact(),
    ) {
        let result = compute_all_savings(&tier, &impact).unwrap();
        for item in &result.line_items {
            prop_assert!(item.annual_savings >= 0.0, "{} was negative", item.area);
        }
    }

    #[test]
    fn prop_scenario_scaling_is_linear(
        tier in arb_tier(),
        impact in arb_canonical_impact(),
        multiplier in 0.0f64..3.0,
    ) {
        // Every formula is linear in its impact term (category 6 included:
        // the savings depend on the points delta, not the offset rate), so
        // scaling the whole mapping scales every item and the total.
        let base = compute_all_savings(&tier, &impact).unwrap();
        let scaled = compute_all_savings(&tier, &impact.scaled(multiplier)).unwrap();

        for (base_item, scaled_item) in base.line_items.iter().zip(&scaled.line_items) {
            let expected = base_item.annual_savings * multiplier;
            let tolerance = expected.abs().max(1e-6) * 1e-9;
            prop_assert!(
                (scaled_item.annual_savings - expected).abs() <= tolerance,
                "{}: expected {}, got {}",
                scaled_item.area,
                expected,
                scaled_item.annual_savings
            );
        }

        let expected_total = base.total_annual_savings * multiplier;
        let tolerance = expected_total.abs().max(1e-6) * 1e-8;
        prop_assert!((scaled.total_annual_savings - expected_total).abs() <= tolerance);
    }
}
