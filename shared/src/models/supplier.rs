//! Supplier models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How often a supplier delivers
///
/// Suppliers without a configured frequency are treated as weekly. The
/// engine only distinguishes two cadences for presentation, so any future
/// non-daily value also collapses to weekly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryFrequency {
    Daily,
    #[default]
    Weekly,
}

impl DeliveryFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryFrequency::Daily => "daily",
            DeliveryFrequency::Weekly => "weekly",
        }
    }
}

/// A supplier registered for a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub unit_id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub delivery_frequency: Option<DeliveryFrequency>,
}

impl Supplier {
    /// Normalized delivery cadence: unset frequency defaults to weekly
    pub fn cadence(&self) -> DeliveryFrequency {
        self.delivery_frequency.unwrap_or_default()
    }
}
