//! Collaborator interfaces for the replenishment engine
//!
//! The engine performs no I/O of its own: persistence of items, movements,
//! suppliers, and orders lives behind these traits, and the current unit
//! (tenant) is always an explicit parameter rather than ambient context.
//! Implementations are provided by the surrounding platform.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{DraftOrderRequest, InventoryItem, PurchaseOrder, StockMovement, Supplier};
use uuid::Uuid;

use crate::error::EngineResult;

/// Read access to inventory items for a unit
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list_items(&self, unit_id: Uuid) -> EngineResult<Vec<InventoryItem>>;
}

/// Read access to the stock-movement ledger
#[async_trait]
pub trait MovementStore: Send + Sync {
    /// Exit movements for the unit with `occurred_at >= since`
    async fn list_exit_movements(
        &self,
        unit_id: Uuid,
        since: DateTime<Utc>,
    ) -> EngineResult<Vec<StockMovement>>;
}

/// Read access to supplier records for a unit
#[async_trait]
pub trait SupplierStore: Send + Sync {
    async fn list_suppliers(&self, unit_id: Uuid) -> EngineResult<Vec<Supplier>>;
}

/// Read and write access to purchase orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Orders with status draft or sent, lines embedded
    async fn list_open_orders(&self, unit_id: Uuid) -> EngineResult<Vec<PurchaseOrder>>;

    /// Persist a draft order atomically: either the order with all of its
    /// lines is created, or nothing is. The engine never retries this call.
    async fn create_order(&self, request: DraftOrderRequest) -> EngineResult<PurchaseOrder>;
}
