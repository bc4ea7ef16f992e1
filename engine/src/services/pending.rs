//! Pending-order suppression
//!
//! Items already sitting on an open purchase order must not be re-suggested.
//! This filter runs before the reorder policy so the policy itself stays a
//! pure function of (item, estimate) pairs.

use std::collections::HashSet;

use shared::models::PurchaseOrder;
use uuid::Uuid;

/// Collect the item ids present on open (draft or sent) orders
///
/// The order store already restricts to open orders; the status check here
/// guards against a collaborator handing back a wider result set.
pub fn open_order_item_ids(orders: &[PurchaseOrder]) -> HashSet<Uuid> {
    orders
        .iter()
        .filter(|order| order.status.is_open())
        .flat_map(|order| order.lines.iter().map(|line| line.item_id))
        .collect()
}
