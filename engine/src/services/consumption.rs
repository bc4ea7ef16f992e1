//! Consumption estimation from the stock-movement ledger

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use shared::models::{ConsumptionEstimate, MovementType, StockMovement};
use shared::validation::validate_movement;
use uuid::Uuid;

use crate::config::ReplenishmentConfig;
use crate::error::{EngineError, EngineResult};

/// Estimate average daily consumption per item over the trailing window
///
/// Only exit movements inside `[window_end - window_days, window_end]` count;
/// entries and out-of-window movements are skipped. Items with no qualifying
/// exits are absent from the result, which downstream stages read as an
/// average of zero.
///
/// Non-positive quantities are a data-integrity error and fail the whole
/// computation rather than being coerced.
pub fn estimate_consumption(
    movements: &[StockMovement],
    window_end: DateTime<Utc>,
    config: &ReplenishmentConfig,
) -> EngineResult<HashMap<Uuid, ConsumptionEstimate>> {
    config.validate()?;

    let window_start = window_end - Duration::days(config.window_days);
    let mut totals: HashMap<Uuid, Decimal> = HashMap::new();

    for movement in movements {
        validate_movement(movement).map_err(|message| EngineError::Validation {
            field: format!("movement {}", movement.id),
            message: message.to_string(),
        })?;

        if movement.movement_type != MovementType::Exit {
            continue;
        }
        if movement.occurred_at < window_start || movement.occurred_at > window_end {
            continue;
        }

        *totals.entry(movement.item_id).or_insert(Decimal::ZERO) += movement.quantity;
    }

    let window_days = Decimal::from(config.window_days);
    let estimates = totals
        .into_iter()
        .map(|(item_id, total)| {
            let avg = (total / window_days).round_dp(2);
            (
                item_id,
                ConsumptionEstimate {
                    item_id,
                    avg_daily_consumption: avg,
                    total_consumed_in_window: total,
                    window_days: config.window_days,
                },
            )
        })
        .collect();

    Ok(estimates)
}
