//! Property-based integration tests for the calculation history.
//!
//! Exercises HistoryStore and StatisticsService over the in-memory store
//! with random sequences of appends and deletes.

use proptest::prelude::*;
use posudek_core::constants::MAX_HISTORY_ITEMS;
use posudek_core::storage::{InMemoryKeyValueStore, KeyValueStoreTrait};
use posudek_core::valuation::{calculate_comparison, calculate_cost, calculate_income, Valuation};
use posudek_core::{
    HistoryStatistics, HistoryStore, HistoryStoreTrait, StatisticsService, StatisticsServiceTrait,
};
use rust_decimal::Decimal;
use std::sync::Arc;

// =============================================================================
// Generators
// =============================================================================

/// Positive amount with up to four decimals.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (1i64..=100_000_000_000).prop_map(|units| Decimal::new(units, 4))
}

/// One valuation of any method, with fractional inputs so totals carry
/// long decimal expansions.
fn arb_valuation() -> impl Strategy<Value = Valuation> {
    prop_oneof![
        (arb_amount(), arb_amount())
            .prop_map(|(area, price)| calculate_comparison(area, price).unwrap()),
        (arb_amount(), arb_amount(), 0i64..=1200).prop_map(|(area, price, tenths)| {
            calculate_cost(area, price, Some(Decimal::new(tenths, 1))).unwrap()
        }),
        (arb_amount(), 1i64..=2000).prop_map(|(rent, bp)| {
            calculate_income(rent, Some(Decimal::new(bp, 4))).unwrap()
        }),
    ]
}

fn arb_valuations(max_count: usize) -> impl Strategy<Value = Vec<Valuation>> {
    proptest::collection::vec(arb_valuation(), 0..=max_count)
}

fn new_history() -> (Arc<InMemoryKeyValueStore>, Arc<HistoryStore>) {
    let store = Arc::new(InMemoryKeyValueStore::new());
    let history = Arc::new(HistoryStore::new(store.clone()));
    (store, history)
}

fn inputs_of(history: &HistoryStore) -> Vec<Valuation> {
    history.get_all().iter().map(Valuation::from).collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// History holds the newest records unchanged, newest first, never more than the limit.
    #[test]
    fn prop_history_is_bounded_and_newest_first(valuations in arb_valuations(25)) {
        let (_, history) = new_history();
        for valuation in &valuations {
            prop_assert!(history.append(valuation));
            prop_assert!(history.get_all().len() <= MAX_HISTORY_ITEMS);
        }

        let expected: Vec<Valuation> = valuations
            .iter()
            .rev()
            .take(MAX_HISTORY_ITEMS)
            .cloned()
            .collect();
        prop_assert_eq!(inputs_of(&history), expected);
    }

    /// delete_at removes exactly the record at that position.
    #[test]
    fn prop_delete_at_removes_one(
        valuations in arb_valuations(MAX_HISTORY_ITEMS),
        index in 0usize..15,
    ) {
        let (_, history) = new_history();
        for valuation in &valuations {
            history.append(valuation);
        }

        let mut expected = inputs_of(&history);
        let deleted = history.delete_at(index);
        prop_assert_eq!(deleted, index < expected.len());
        if deleted {
            expected.remove(index);
        }
        prop_assert_eq!(inputs_of(&history), expected);
    }

    /// Statistics match a direct computation over the stored totals.
    #[test]
    fn prop_statistics_match_history(valuations in arb_valuations(MAX_HISTORY_ITEMS)) {
        let (_, history) = new_history();
        for valuation in &valuations {
            history.append(valuation);
        }
        let service = StatisticsService::new(history.clone());

        // history order, newest first, so sums round the same way
        let totals: Vec<Decimal> = valuations.iter().rev().map(|v| v.total).collect();
        match service.get_statistics() {
            None => prop_assert!(totals.is_empty()),
            Some(stats) => {
                let sum = totals
                    .iter()
                    .fold(Decimal::ZERO, |acc, total| acc.saturating_add(*total));
                let tolerance = Decimal::new(1, 6);
                prop_assert_eq!(stats.count, totals.len());
                prop_assert_eq!(stats.total, sum);
                prop_assert_eq!(stats.average, sum / Decimal::from(totals.len()));
                prop_assert_eq!(Some(stats.max), totals.iter().copied().max());
                prop_assert_eq!(Some(stats.min), totals.iter().copied().min());
                prop_assert!(stats.min - tolerance <= stats.average);
                prop_assert!(stats.average <= stats.max + tolerance);
            }
        }
    }

    /// Any non-JSON blob reads as an empty history.
    #[test]
    fn prop_malformed_blob_is_empty(blob in "[^\\[\\]{}\"0-9tfn ]{1,64}") {
        let (store, history) = new_history();
        store.set("kalkulacka_history", &blob).unwrap();
        prop_assert!(history.get_all().is_empty());
        let service = StatisticsService::new(history.clone());
        prop_assert_eq!(service.get_statistics(), None::<HistoryStatistics>);
    }
}

#[test]
fn test_clear_then_empty() {
    let (store, history) = new_history();
    history.append(&calculate_comparison(Decimal::from(50), Decimal::from(1000)).unwrap());
    assert!(history.clear());
    assert!(history.get_all().is_empty());
    assert_eq!(store.get("kalkulacka_history").unwrap(), None);
}
