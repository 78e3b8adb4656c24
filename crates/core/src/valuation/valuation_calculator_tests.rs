//! Unit tests for the valuation formulas.

use super::*;
use crate::errors::{Error, ValidationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn amounts(valuation: &Valuation) -> Vec<(String, Option<Decimal>)> {
    valuation
        .breakdown
        .iter()
        .map(|line| (line.label.clone(), line.value.as_amount()))
        .collect()
}

fn assert_invalid_input(result: crate::errors::Result<Valuation>) {
    match result {
        Err(Error::Validation(ValidationError::InvalidInput(_))) => {}
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

// ============================================================================
// Comparison method
// ============================================================================

#[test]
fn test_comparison_adds_five_percent_reserve() {
    let valuation = calculate_comparison(dec!(100), dec!(50000)).unwrap();

    assert_eq!(valuation.method, ValuationMethod::Comparison);
    assert_eq!(valuation.total, dec!(5250000));
    assert_eq!(
        amounts(&valuation),
        vec![
            ("Základní cena".to_string(), Some(dec!(5000000))),
            ("Rezerva (5%)".to_string(), Some(dec!(250000))),
            ("Celkem".to_string(), Some(dec!(5250000))),
        ]
    );
    assert_eq!(
        valuation.inputs,
        ValuationInputs::Comparison {
            area: dec!(100),
            price_per_sqm: dec!(50000)
        }
    );
}

#[test]
fn test_comparison_fractional_inputs() {
    let valuation = calculate_comparison(dec!(85.5), dec!(62000)).unwrap();
    assert_eq!(valuation.total, dec!(85.5) * dec!(62000) * dec!(1.05));
    assert_eq!(valuation.final_line_amount(), Some(valuation.total));
}

#[test]
fn test_comparison_rejects_non_positive() {
    assert_invalid_input(calculate_comparison(Decimal::ZERO, dec!(50000)));
    assert_invalid_input(calculate_comparison(dec!(100), Decimal::ZERO));
    assert_invalid_input(calculate_comparison(dec!(-1), dec!(50000)));
    assert_invalid_input(calculate_comparison(dec!(100), dec!(-50000)));
}

#[test]
fn test_comparison_overflow_is_invalid_input() {
    assert_invalid_input(calculate_comparison(Decimal::MAX, dec!(2)));
}

// ============================================================================
// Cost method
// ============================================================================

#[test]
fn test_depreciation_rate_two_percent_per_year() {
    assert_eq!(depreciation_rate(Decimal::ZERO), Decimal::ZERO);
    assert_eq!(depreciation_rate(dec!(10)), dec!(0.2));
    assert_eq!(depreciation_rate(dec!(25)), dec!(0.5));
    assert_eq!(depreciation_rate(dec!(30)), dec!(0.5));
    assert_eq!(depreciation_rate(Decimal::MAX), dec!(0.5));
}

#[test]
fn test_cost_depreciation_is_capped_at_half() {
    let valuation = calculate_cost(dec!(100), dec!(50000), Some(dec!(30))).unwrap();

    assert_eq!(valuation.method, ValuationMethod::Cost);
    assert_eq!(valuation.total, dec!(3000000));
    assert_eq!(
        amounts(&valuation),
        vec![
            ("Základní náklady".to_string(), Some(dec!(5000000))),
            ("Opotřebení".to_string(), Some(dec!(-2500000))),
            ("Po odečtu opotřebení".to_string(), Some(dec!(2500000))),
            ("Pozemek (20%)".to_string(), Some(dec!(500000))),
            ("Celkem".to_string(), Some(dec!(3000000))),
        ]
    );
}

#[test]
fn test_cost_defaults_to_new_building() {
    let valuation = calculate_cost(dec!(100), dec!(50000), None).unwrap();
    assert_eq!(valuation.total, dec!(6000000));
    assert_eq!(
        valuation.inputs,
        ValuationInputs::Cost {
            area: dec!(100),
            price_per_sqm: dec!(50000),
            building_age: Decimal::ZERO,
        }
    );
}

#[test]
fn test_cost_partial_depreciation() {
    // 10 years -> 20 % off
    let valuation = calculate_cost(dec!(80), dec!(40000), Some(dec!(10))).unwrap();
    assert_eq!(valuation.total, dec!(3072000));
    assert_eq!(valuation.final_line_amount(), Some(valuation.total));
}

#[test]
fn test_cost_rejects_invalid_inputs() {
    assert_invalid_input(calculate_cost(Decimal::ZERO, dec!(50000), None));
    assert_invalid_input(calculate_cost(dec!(100), Decimal::ZERO, None));
    assert_invalid_input(calculate_cost(dec!(100), dec!(50000), Some(dec!(-1))));
}

// ============================================================================
// Income method
// ============================================================================

#[test]
fn test_income_capitalizes_annual_rent() {
    let valuation = calculate_income(dec!(20000), Some(dec!(0.05))).unwrap();

    assert_eq!(valuation.method, ValuationMethod::Income);
    assert_eq!(valuation.total, dec!(4800000));
    assert_eq!(
        valuation.breakdown,
        vec![
            BreakdownLine::amount("Měsíční nájem", dec!(20000)),
            BreakdownLine::amount("Roční nájem", dec!(240000)),
            BreakdownLine::text("Výnosnost", "5.0%".to_string()),
            BreakdownLine::amount("Celková hodnota", dec!(4800000)),
        ]
    );
}

#[test]
fn test_income_uses_default_yield() {
    let valuation = calculate_income(dec!(15000), None).unwrap();
    assert_eq!(valuation.total, dec!(3600000));
    assert_eq!(
        valuation.inputs,
        ValuationInputs::Income {
            monthly_rent: dec!(15000),
            yield_rate: dec!(0.05),
        }
    );
}

#[test]
fn test_income_yield_label_has_one_decimal() {
    let valuation = calculate_income(dec!(20000), Some(dec!(0.0425))).unwrap();
    assert_eq!(
        valuation.breakdown[2].value,
        BreakdownValue::Text("4.3%".to_string())
    );
}

#[test]
fn test_income_rejects_zero_yield() {
    assert_invalid_input(calculate_income(dec!(20000), Some(Decimal::ZERO)));
    assert_invalid_input(calculate_income(dec!(20000), Some(dec!(-0.05))));
    assert_invalid_input(calculate_income(Decimal::ZERO, None));
}

// ============================================================================
// Input conversion
// ============================================================================

#[test]
fn test_decimal_from_input_rejects_non_finite() {
    assert!(decimal_from_input("area", f64::NAN).is_err());
    assert!(decimal_from_input("area", f64::INFINITY).is_err());
    assert!(decimal_from_input("area", f64::NEG_INFINITY).is_err());
    assert!(decimal_from_input("area", 1e40).is_err());
    assert_eq!(decimal_from_input("area", 120.0).unwrap(), dec!(120));
}

#[test]
fn test_method_codes_round_trip() {
    for method in [
        ValuationMethod::Comparison,
        ValuationMethod::Cost,
        ValuationMethod::Income,
    ] {
        assert_eq!(ValuationMethod::from_code(method.code()), Some(method));
    }
    assert_eq!(ValuationMethod::from_code("neznama"), None);
}
