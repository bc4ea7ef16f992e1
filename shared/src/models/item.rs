//! Inventory item models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::MeasureUnit;

/// An inventory item tracked for a unit (restaurant location)
///
/// `min_stock` is the reorder floor used by the replenishment engine,
/// not a hard minimum enforced at movement time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub unit_id: Uuid,
    pub name: String,
    pub current_stock: Decimal,
    pub min_stock: Decimal,
    pub measure_unit: MeasureUnit,
    /// Items without a supplier cannot be ordered automatically
    pub supplier_id: Option<Uuid>,
}

impl InventoryItem {
    /// Shortfall between the reorder floor and current stock, never negative
    pub fn deficit(&self) -> Decimal {
        let deficit = self.min_stock - self.current_stock;
        if deficit > Decimal::ZERO {
            deficit
        } else {
            Decimal::ZERO
        }
    }

    /// An item is below its floor when current stock is at or under `min_stock`
    pub fn is_below_floor(&self) -> bool {
        self.current_stock <= self.min_stock
    }
}
