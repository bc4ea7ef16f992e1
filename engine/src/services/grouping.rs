//! Supplier aggregation and cadence partitioning

use std::collections::HashMap;

use shared::models::{
    CadenceBuckets, DeliveryFrequency, ReorderSuggestionLine, Supplier, SupplierSuggestionGroup,
};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Group suggestion lines by supplier and attach supplier metadata
///
/// Every line lands in exactly one group and a group exists only when it has
/// at least one line. A line referencing a supplier the store does not know
/// is a persisted-data integrity failure and aborts the computation.
pub fn group_by_supplier(
    lines: Vec<(Uuid, ReorderSuggestionLine)>,
    suppliers: &[Supplier],
) -> EngineResult<Vec<SupplierSuggestionGroup>> {
    let by_id: HashMap<Uuid, &Supplier> = suppliers.iter().map(|s| (s.id, s)).collect();

    let mut order: Vec<Uuid> = Vec::new();
    let mut grouped: HashMap<Uuid, Vec<ReorderSuggestionLine>> = HashMap::new();

    for (supplier_id, line) in lines {
        if !by_id.contains_key(&supplier_id) {
            return Err(EngineError::NotFound(format!(
                "Supplier {} referenced by item {}",
                supplier_id, line.item_id
            )));
        }
        grouped
            .entry(supplier_id)
            .or_insert_with(|| {
                order.push(supplier_id);
                Vec::new()
            })
            .push(line);
    }

    let groups = order
        .into_iter()
        .map(|supplier_id| {
            let supplier = by_id[&supplier_id];
            SupplierSuggestionGroup {
                supplier_id,
                supplier_name: supplier.name.clone(),
                supplier_phone: supplier.phone.clone(),
                delivery_cadence: supplier.cadence(),
                lines: grouped.remove(&supplier_id).unwrap_or_default(),
            }
        })
        .collect();

    Ok(groups)
}

/// Partition supplier groups into the daily and weekly cadence buckets
pub fn partition_by_cadence(groups: Vec<SupplierSuggestionGroup>) -> CadenceBuckets {
    let mut buckets = CadenceBuckets::default();
    for group in groups {
        match group.delivery_cadence {
            DeliveryFrequency::Daily => buckets.daily.push(group),
            DeliveryFrequency::Weekly => buckets.weekly.push(group),
        }
    }
    buckets
}
