//! Consumption estimator tests
//!
//! Covers the trailing-window average: only exit movements inside the window
//! count, the average is rounded to 2 decimal places, and bad quantities
//! fail fast instead of being coerced.

use chrono::{Duration, Utc};
use proptest::prelude::*;
use replenishment_engine::services::estimate_consumption;
use replenishment_engine::{EngineError, ReplenishmentConfig};
use rust_decimal::Decimal;
use shared::models::{MovementType, StockMovement};
use std::str::FromStr;
use uuid::Uuid;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn exit_movement(item_id: Uuid, quantity: Decimal, days_ago: i64) -> StockMovement {
    StockMovement {
        id: Uuid::new_v4(),
        item_id,
        movement_type: MovementType::Exit,
        quantity,
        occurred_at: Utc::now() - Duration::days(days_ago),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_average_over_window() {
        let item_id = Uuid::new_v4();
        let movements = vec![
            exit_movement(item_id, dec("20.0"), 1),
            exit_movement(item_id, dec("25.0"), 10),
            exit_movement(item_id, dec("15.0"), 25),
        ];

        let estimates =
            estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default()).unwrap();

        let estimate = &estimates[&item_id];
        assert_eq!(estimate.total_consumed_in_window, dec("60.0"));
        // 60 / 30 days
        assert_eq!(estimate.avg_daily_consumption, dec("2.00"));
        assert_eq!(estimate.window_days, 30);
    }

    #[test]
    fn test_average_rounded_to_two_decimals() {
        let item_id = Uuid::new_v4();
        let movements = vec![exit_movement(item_id, dec("10.0"), 3)];

        let estimates =
            estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default()).unwrap();

        // 10 / 30 = 0.3333... -> 0.33
        assert_eq!(estimates[&item_id].avg_daily_consumption, dec("0.33"));
    }

    #[test]
    fn test_items_without_exits_absent() {
        let consumed = Uuid::new_v4();
        let movements = vec![exit_movement(consumed, dec("5.0"), 2)];

        let estimates =
            estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default()).unwrap();

        assert_eq!(estimates.len(), 1);
        assert!(!estimates.contains_key(&Uuid::new_v4()));
    }

    #[test]
    fn test_entry_movements_ignored() {
        let item_id = Uuid::new_v4();
        let mut entry = exit_movement(item_id, dec("100.0"), 5);
        entry.movement_type = MovementType::Entry;
        let movements = vec![entry, exit_movement(item_id, dec("30.0"), 5)];

        let estimates =
            estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default()).unwrap();

        assert_eq!(estimates[&item_id].total_consumed_in_window, dec("30.0"));
    }

    #[test]
    fn test_movements_outside_window_ignored() {
        let item_id = Uuid::new_v4();
        let movements = vec![
            exit_movement(item_id, dec("30.0"), 5),
            exit_movement(item_id, dec("99.0"), 31),
            exit_movement(item_id, dec("42.0"), 400),
        ];

        let estimates =
            estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default()).unwrap();

        assert_eq!(estimates[&item_id].total_consumed_in_window, dec("30.0"));
        assert_eq!(estimates[&item_id].avg_daily_consumption, dec("1.00"));
    }

    #[test]
    fn test_only_old_movements_yields_no_estimate() {
        let item_id = Uuid::new_v4();
        let movements = vec![exit_movement(item_id, dec("50.0"), 45)];

        let estimates =
            estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default()).unwrap();

        assert!(estimates.is_empty());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let movements = vec![exit_movement(Uuid::new_v4(), dec("-3.0"), 2)];

        let result =
            estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default());

        assert!(matches!(result, Err(EngineError::Validation { .. })));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let movements = vec![exit_movement(Uuid::new_v4(), Decimal::ZERO, 2)];

        let result =
            estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default());

        assert!(matches!(result, Err(EngineError::Validation { .. })));
    }

    #[test]
    fn test_non_positive_window_rejected() {
        let config = ReplenishmentConfig {
            window_days: 0,
            ..ReplenishmentConfig::default()
        };

        let result = estimate_consumption(&[], Utc::now(), &config);

        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating valid exit quantities
    fn quantity_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=100_000i64).prop_map(|n| Decimal::new(n, 2)) // 0.01 to 1000.00
    }

    /// Strategy for generating ages inside the 30-day window
    fn in_window_age_strategy() -> impl Strategy<Value = i64> {
        0i64..=29i64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Average consumption is never negative and never exceeds the total
        #[test]
        fn prop_average_bounded(
            quantities in prop::collection::vec(quantity_strategy(), 1..20),
            ages in prop::collection::vec(in_window_age_strategy(), 1..20)
        ) {
            let item_id = Uuid::new_v4();
            let movements: Vec<StockMovement> = quantities
                .iter()
                .zip(ages.iter().cycle())
                .map(|(q, age)| exit_movement(item_id, *q, *age))
                .collect();

            let estimates =
                estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default())
                    .unwrap();
            let estimate = &estimates[&item_id];

            prop_assert!(estimate.avg_daily_consumption >= Decimal::ZERO);
            prop_assert!(estimate.avg_daily_consumption <= estimate.total_consumed_in_window);
        }

        /// The windowed total is the sum of the in-window exits
        #[test]
        fn prop_total_is_sum_of_exits(
            quantities in prop::collection::vec(quantity_strategy(), 1..20)
        ) {
            let item_id = Uuid::new_v4();
            let movements: Vec<StockMovement> = quantities
                .iter()
                .map(|q| exit_movement(item_id, *q, 1))
                .collect();

            let expected: Decimal = quantities.iter().sum();
            let estimates =
                estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default())
                    .unwrap();

            prop_assert_eq!(estimates[&item_id].total_consumed_in_window, expected);
        }

        /// No exits means no estimate, regardless of entry volume
        #[test]
        fn prop_entries_never_create_estimates(
            quantities in prop::collection::vec(quantity_strategy(), 1..10)
        ) {
            let item_id = Uuid::new_v4();
            let movements: Vec<StockMovement> = quantities
                .iter()
                .map(|q| {
                    let mut m = exit_movement(item_id, *q, 1);
                    m.movement_type = MovementType::Entry;
                    m
                })
                .collect();

            let estimates =
                estimate_consumption(&movements, Utc::now(), &ReplenishmentConfig::default())
                    .unwrap();

            prop_assert!(estimates.is_empty());
        }
    }
}
