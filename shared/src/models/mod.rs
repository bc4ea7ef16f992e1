//! Domain models for the Restaurant Operations Platform

pub mod item;
pub mod movement;
pub mod order;
pub mod suggestion;
pub mod supplier;

pub use item::*;
pub use movement::*;
pub use order::*;
pub use suggestion::*;
pub use supplier::*;
