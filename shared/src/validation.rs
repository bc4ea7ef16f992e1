//! Validation utilities for the Restaurant Operations Platform
//!
//! Fail-fast checks applied at the replenishment engine boundary. Persisted
//! data is expected to be valid already; these guard against integrity bugs
//! upstream rather than serving as a recovery path.

use rust_decimal::Decimal;

use crate::models::{InventoryItem, StockMovement};

/// Validate a stock movement for use as an engine input
///
/// Quantities must be strictly positive regardless of direction.
pub fn validate_movement(movement: &StockMovement) -> Result<(), &'static str> {
    if movement.quantity <= Decimal::ZERO {
        return Err("Movement quantity must be positive");
    }
    Ok(())
}

/// Validate an inventory item for use as an engine input
pub fn validate_item(item: &InventoryItem) -> Result<(), &'static str> {
    if item.current_stock < Decimal::ZERO {
        return Err("Current stock cannot be negative");
    }
    if item.min_stock < Decimal::ZERO {
        return Err("Minimum stock cannot be negative");
    }
    Ok(())
}

/// Basic phone sanity check for supplier contact numbers
///
/// Accepts digits with optional separators and a leading country code,
/// e.g. 11987654321, (11) 98765-4321, +55 11 98765-4321.
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 8 || digits.len() > 15 {
        return Err("Phone number must contain 8 to 15 digits");
    }
    let valid_chars = phone
        .chars()
        .all(|c| c.is_ascii_digit() || " -()+.".contains(c));
    if !valid_chars {
        return Err("Phone number contains invalid characters");
    }
    Ok(())
}
