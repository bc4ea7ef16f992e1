//! Derived replenishment types
//!
//! Everything here is recomputed from source data on every engine invocation
//! and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DeliveryFrequency;

/// Average daily consumption for an item over the trailing window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionEstimate {
    pub item_id: Uuid,
    /// Rounded to 2 decimal places
    pub avg_daily_consumption: Decimal,
    pub total_consumed_in_window: Decimal,
    pub window_days: i64,
}

/// Predicted days until an item's stock reaches zero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepletionPrediction {
    pub item_id: Uuid,
    pub current_stock: Decimal,
    pub avg_daily_consumption: Decimal,
    /// `None` means no recent consumption signal, not "already empty"
    pub days_until_empty: Option<i64>,
}

/// One item the reorder policy decided to suggest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderSuggestionLine {
    pub item_id: Uuid,
    pub item_name: String,
    pub current_stock: Decimal,
    pub min_stock: Decimal,
    pub deficit: Decimal,
    pub avg_daily_consumption: Decimal,
    pub suggested_quantity: Decimal,
    pub days_until_empty: Option<i64>,
}

/// Suggestions for one supplier, ready for display or draft-order creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierSuggestionGroup {
    pub supplier_id: Uuid,
    pub supplier_name: String,
    pub supplier_phone: Option<String>,
    pub delivery_cadence: DeliveryFrequency,
    pub lines: Vec<ReorderSuggestionLine>,
}

/// Supplier groups partitioned by delivery cadence
///
/// The dashboard widget shows only the daily bucket; the full suggestions
/// page shows both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CadenceBuckets {
    pub daily: Vec<SupplierSuggestionGroup>,
    pub weekly: Vec<SupplierSuggestionGroup>,
}
