//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Units of measure for inventory items
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeasureUnit {
    #[default]
    Unit,
    Kilogram,
    Gram,
    Liter,
    Milliliter,
    Box,
    Package,
}

impl MeasureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureUnit::Unit => "unit",
            MeasureUnit::Kilogram => "kilogram",
            MeasureUnit::Gram => "gram",
            MeasureUnit::Liter => "liter",
            MeasureUnit::Milliliter => "milliliter",
            MeasureUnit::Box => "box",
            MeasureUnit::Package => "package",
        }
    }
}

/// Date range for movement queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub start: chrono::DateTime<chrono::Utc>,
    pub end: chrono::DateTime<chrono::Utc>,
}
