//! Zone system for card locations.
//!
//! The table has four piles (deck, both hands, prizes) and one field row per
//! side. Together they partition every card on the table.
//!
//! ## Key Types
//!
//! - `ZoneId`: Zone identifier (from `core::config`)
//! - `ZoneManager`: Card location tracking and movement
//! - `FieldRow` / `SlotId`: Ordered board slots

pub mod field;
pub mod manager;

pub use field::{find_empty_field, FieldRow, FieldSlot, SlotId};
pub use manager::ZoneManager;

// Re-export zone types from core for convenience
pub use crate::core::config::ZoneId;
