//! Purchase order models
//!
//! Status transitions (draft -> sent -> received/cancelled) are owned by the
//! order-management collaborator; the replenishment engine only creates
//! orders in the draft state and reads open orders to suppress duplicate
//! suggestions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Purchase order lifecycle states
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Sent,
    Received,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Sent => "sent",
            OrderStatus::Received => "received",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Open orders are those not yet received or cancelled
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Draft | OrderStatus::Sent)
    }
}

/// A line within a purchase order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: Uuid,
    pub item_id: Uuid,
    pub quantity: Decimal,
}

/// A purchase order with its lines embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub unit_id: Uuid,
    pub supplier_id: Uuid,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

/// Line payload for an order creation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewOrderLine {
    pub item_id: Uuid,
    pub quantity: Decimal,
}

/// Atomic creation request for a draft purchase order
///
/// The order-persistence collaborator must persist the order and all of its
/// lines atomically; no partial order may ever be visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftOrderRequest {
    pub unit_id: Uuid,
    pub supplier_id: Uuid,
    pub lines: Vec<NewOrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_statuses() {
        assert!(OrderStatus::Draft.is_open());
        assert!(OrderStatus::Sent.is_open());
        assert!(!OrderStatus::Received.is_open());
        assert!(!OrderStatus::Cancelled.is_open());
    }
}
