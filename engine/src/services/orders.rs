//! Draft purchase-order materialization

use rust_decimal::Decimal;
use shared::models::{DraftOrderRequest, NewOrderLine, SupplierSuggestionGroup};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Turn one supplier's suggestion group into an order creation request
///
/// One line per suggestion, using the suggested quantity with a `min_stock`
/// fallback should it somehow be zero. A group with no lines or a resolved
/// quantity of zero cannot be materialized.
pub fn build_draft_request(
    unit_id: Uuid,
    group: &SupplierSuggestionGroup,
) -> EngineResult<DraftOrderRequest> {
    if group.lines.is_empty() {
        return Err(EngineError::validation(
            "lines",
            "Suggestion group has no lines to order",
        ));
    }

    let mut lines = Vec::with_capacity(group.lines.len());
    for line in &group.lines {
        let mut quantity = line.suggested_quantity;
        if quantity <= Decimal::ZERO {
            quantity = line.min_stock;
        }
        if quantity <= Decimal::ZERO {
            return Err(EngineError::validation(
                format!("item {}", line.item_id),
                "Resolved order quantity is zero",
            ));
        }
        lines.push(NewOrderLine {
            item_id: line.item_id,
            quantity,
        });
    }

    Ok(DraftOrderRequest {
        unit_id,
        supplier_id: group.supplier_id,
        lines,
    })
}
