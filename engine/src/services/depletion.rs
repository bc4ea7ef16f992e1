//! Depletion prediction from current stock and consumption rate

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared::models::{ConsumptionEstimate, DepletionPrediction, InventoryItem};

/// Predict how many whole days until an item's stock reaches zero
///
/// `days_until_empty` is `floor(current_stock / avg_daily_consumption)` when
/// the average is positive and `None` otherwise: an item with no recent
/// consumption cannot be predicted, and an already-empty item with no signal
/// is a stock-out concern for a separate rule, not a depletion forecast.
/// The result is never negative and the division never sees a zero divisor.
pub fn predict_depletion(
    item: &InventoryItem,
    estimate: Option<&ConsumptionEstimate>,
) -> DepletionPrediction {
    let avg = estimate
        .map(|e| e.avg_daily_consumption)
        .unwrap_or(Decimal::ZERO);

    let days_until_empty = if avg > Decimal::ZERO {
        let days = (item.current_stock / avg).floor();
        Some(days.to_i64().unwrap_or(i64::MAX).max(0))
    } else {
        None
    };

    DepletionPrediction {
        item_id: item.id,
        current_stock: item.current_stock,
        avg_daily_consumption: avg,
        days_until_empty,
    }
}
