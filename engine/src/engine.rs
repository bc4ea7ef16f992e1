//! Replenishment engine: pure pipeline plus the store-backed facade

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use shared::models::{
    CadenceBuckets, InventoryItem, PurchaseOrder, StockMovement, Supplier, SupplierSuggestionGroup,
};
use shared::validation::validate_item;
use uuid::Uuid;

use crate::config::ReplenishmentConfig;
use crate::error::{EngineError, EngineResult};
use crate::services::{
    build_draft_request, estimate_consumption, evaluate_item, group_by_supplier,
    open_order_item_ids, partition_by_cadence, predict_depletion,
};
use crate::stores::{InventoryStore, MovementStore, OrderStore, SupplierStore};

/// Compute supplier suggestion groups from an in-memory snapshot
///
/// This is the whole pipeline as a pure function: pending-order filter,
/// consumption estimate, depletion prediction, reorder policy, supplier
/// grouping. It mutates nothing and is safe to call concurrently; callers
/// decide when the snapshot is fresh enough.
pub fn compute_suggestion_groups(
    items: &[InventoryItem],
    movements: &[StockMovement],
    suppliers: &[Supplier],
    open_orders: &[PurchaseOrder],
    now: DateTime<Utc>,
    config: &ReplenishmentConfig,
) -> EngineResult<Vec<SupplierSuggestionGroup>> {
    config.validate()?;

    for item in items {
        validate_item(item).map_err(|message| EngineError::Validation {
            field: format!("item {}", item.id),
            message: message.to_string(),
        })?;
    }

    let already_ordered = open_order_item_ids(open_orders);
    let estimates = estimate_consumption(movements, now, config)?;

    let mut lines: Vec<(Uuid, shared::models::ReorderSuggestionLine)> = Vec::new();
    for item in items {
        if already_ordered.contains(&item.id) {
            continue;
        }
        let Some(supplier_id) = item.supplier_id else {
            continue;
        };

        let estimate = estimates.get(&item.id);
        let prediction = predict_depletion(item, estimate);
        if let Some(line) = evaluate_item(item, estimate, &prediction, config) {
            lines.push((supplier_id, line));
        }
    }

    group_by_supplier(lines, suppliers)
}

/// Store-backed replenishment engine
///
/// Fetches a snapshot of items, movements, suppliers, and open orders for a
/// unit, runs the pure pipeline over it, and materializes draft orders
/// through the order store. Holds no mutable state of its own.
#[derive(Clone)]
pub struct ReplenishmentEngine {
    items: Arc<dyn InventoryStore>,
    movements: Arc<dyn MovementStore>,
    suppliers: Arc<dyn SupplierStore>,
    orders: Arc<dyn OrderStore>,
    config: ReplenishmentConfig,
}

impl ReplenishmentEngine {
    pub fn new(
        items: Arc<dyn InventoryStore>,
        movements: Arc<dyn MovementStore>,
        suppliers: Arc<dyn SupplierStore>,
        orders: Arc<dyn OrderStore>,
        config: ReplenishmentConfig,
    ) -> Self {
        Self {
            items,
            movements,
            suppliers,
            orders,
            config,
        }
    }

    pub fn config(&self) -> &ReplenishmentConfig {
        &self.config
    }

    /// Compute reorder suggestions for a unit, grouped by supplier
    pub async fn compute_suggestions(
        &self,
        unit_id: Uuid,
    ) -> EngineResult<Vec<SupplierSuggestionGroup>> {
        let now = Utc::now();
        let since = now - Duration::days(self.config.window_days);

        let items = self.items.list_items(unit_id).await?;
        let movements = self.movements.list_exit_movements(unit_id, since).await?;
        let suppliers = self.suppliers.list_suppliers(unit_id).await?;
        let open_orders = self.orders.list_open_orders(unit_id).await?;

        let groups = compute_suggestion_groups(
            &items,
            &movements,
            &suppliers,
            &open_orders,
            now,
            &self.config,
        )?;

        tracing::info!(
            %unit_id,
            suppliers = groups.len(),
            lines = groups.iter().map(|g| g.lines.len()).sum::<usize>(),
            "Computed reorder suggestions"
        );

        Ok(groups)
    }

    /// Suggestions partitioned into daily and weekly cadence buckets
    pub async fn compute_suggestion_buckets(&self, unit_id: Uuid) -> EngineResult<CadenceBuckets> {
        let groups = self.compute_suggestions(unit_id).await?;
        Ok(partition_by_cadence(groups))
    }

    /// Only the groups from suppliers with daily delivery cadence
    ///
    /// Backs the compact dashboard widget; the full suggestions page uses
    /// [`Self::compute_suggestion_buckets`].
    pub async fn compute_daily_suggestions(
        &self,
        unit_id: Uuid,
    ) -> EngineResult<Vec<SupplierSuggestionGroup>> {
        Ok(self.compute_suggestion_buckets(unit_id).await?.daily)
    }

    /// Materialize one supplier's suggestion group as a draft purchase order
    ///
    /// Open orders are re-fetched immediately before the write: suggestions
    /// may have been computed a while ago, and an item ordered in the
    /// meantime must not be ordered twice. The creation request itself is a
    /// single atomic call; on failure the error propagates and the engine
    /// performs no compensating action.
    pub async fn materialize_draft_order(
        &self,
        unit_id: Uuid,
        group: &SupplierSuggestionGroup,
    ) -> EngineResult<PurchaseOrder> {
        let request = build_draft_request(unit_id, group)?;

        let open_orders = self.orders.list_open_orders(unit_id).await?;
        let already_ordered = open_order_item_ids(&open_orders);
        if let Some(line) = request
            .lines
            .iter()
            .find(|line| already_ordered.contains(&line.item_id))
        {
            return Err(EngineError::Conflict {
                resource: format!("item {}", line.item_id),
                message: "Item was placed on an open order after suggestions were computed"
                    .to_string(),
            });
        }

        let order = self.orders.create_order(request).await.map_err(|err| {
            tracing::error!(%unit_id, supplier_id = %group.supplier_id, error = %err, "Draft order creation failed");
            err
        })?;

        tracing::info!(
            %unit_id,
            order_id = %order.id,
            supplier_id = %order.supplier_id,
            lines = order.lines.len(),
            "Created draft purchase order"
        );

        Ok(order)
    }
}
