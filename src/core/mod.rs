//! Core table types: sides, entities, geometry, configuration, RNG, turn
//! state, move history and the game state that owns them.

pub mod side;
pub mod entity;
pub mod geometry;
pub mod rng;
pub mod config;
pub mod turn;
pub mod history;
pub mod state;

pub use side::{Side, SideMap};
pub use entity::EntityId;
pub use geometry::{Point, Rect};
pub use rng::GameRng;
pub use config::{LayoutConfig, PileLayout, SlotLayout, TableConfig, ZoneId};
pub use turn::TurnState;
pub use history::MoveRecord;
pub use state::GameState;
