//! Reorder decision policy
//!
//! Two independent triggers, unioned per item:
//!
//! - deficit trigger: current stock at or below the floor. Catches items
//!   already short regardless of how sparse their movement history is.
//! - forecast trigger: still above floor but predicted to empty within the
//!   depletion horizon. Catches fast movers before they cross the floor.
//!
//! Items without a supplier cannot be ordered automatically and are excluded
//! entirely; a manual-reorder flow outside this engine handles them.

use rust_decimal::Decimal;
use shared::models::{ConsumptionEstimate, DepletionPrediction, InventoryItem, ReorderSuggestionLine};

use crate::config::ReplenishmentConfig;

/// Evaluate one item against both triggers
///
/// The suggested quantity is the larger of the current deficit and a
/// cover-target days' worth of consumption, falling back to `min_stock` when
/// both are zero. The one remaining zero case (stock 0, floor 0, no recent
/// consumption) produces no suggestion: a zero floor never creates a deficit,
/// so there is nothing the policy can justify ordering.
pub fn evaluate_item(
    item: &InventoryItem,
    estimate: Option<&ConsumptionEstimate>,
    prediction: &DepletionPrediction,
    config: &ReplenishmentConfig,
) -> Option<ReorderSuggestionLine> {
    item.supplier_id?;

    let deficit_trigger = item.is_below_floor();
    let forecast_trigger = !deficit_trigger
        && prediction
            .days_until_empty
            .map_or(false, |days| days <= config.depletion_horizon_days);

    if !deficit_trigger && !forecast_trigger {
        return None;
    }

    let deficit = item.deficit();
    let avg = estimate
        .map(|e| e.avg_daily_consumption)
        .unwrap_or(Decimal::ZERO);

    let consumption_based = if avg > Decimal::ZERO {
        (avg * Decimal::from(config.cover_target_days)).ceil()
    } else {
        Decimal::ZERO
    };

    let mut suggested = deficit.max(consumption_based);
    if suggested <= Decimal::ZERO {
        suggested = item.min_stock;
    }
    if suggested <= Decimal::ZERO {
        tracing::debug!(
            item_id = %item.id,
            "Item matched a trigger but has zero floor and no consumption signal, skipping"
        );
        return None;
    }

    Some(ReorderSuggestionLine {
        item_id: item.id,
        item_name: item.name.clone(),
        current_stock: item.current_stock,
        min_stock: item.min_stock,
        deficit,
        avg_daily_consumption: avg,
        suggested_quantity: suggested,
        days_until_empty: prediction.days_until_empty,
    })
}
