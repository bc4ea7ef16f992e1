//! Inventory Replenishment Engine
//!
//! Decides which inventory items a restaurant unit needs to reorder and how
//! much, from historical stock movements and current stock levels, and groups
//! the result by supplier so draft purchase orders can be created directly.
//!
//! The engine is a library with no network surface of its own: persistence
//! and transport live behind the traits in [`stores`], and the computation in
//! [`engine::compute_suggestion_groups`] is a pure function any orchestration
//! layer (cron job, API handler, UI adapter) can drive.

pub mod config;
pub mod engine;
pub mod error;
pub mod services;
pub mod stores;

pub use config::ReplenishmentConfig;
pub use engine::{compute_suggestion_groups, ReplenishmentEngine};
pub use error::{EngineError, EngineResult};
