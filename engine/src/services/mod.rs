//! Replenishment pipeline services
//!
//! Each stage is a pure function over an in-memory snapshot of its inputs;
//! the [`crate::engine`] module wires them together in order: pending-order
//! filter, consumption estimate, depletion prediction, reorder policy,
//! supplier grouping.

pub mod consumption;
pub mod depletion;
pub mod grouping;
pub mod orders;
pub mod pending;
pub mod policy;

pub use consumption::estimate_consumption;
pub use depletion::predict_depletion;
pub use grouping::{group_by_supplier, partition_by_cadence};
pub use orders::build_draft_request;
pub use pending::open_order_item_ids;
pub use policy::evaluate_item;
