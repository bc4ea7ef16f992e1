//! Shared types and models for the Restaurant Operations Platform
//!
//! This crate contains the inventory, supplier, and purchase-order types
//! shared between the replenishment engine and the surrounding orchestration
//! (API handlers, scheduled jobs, UI adapters).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
