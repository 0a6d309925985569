//! # duel-table
//!
//! A two-player card table: zones, layout, hit-testing, turns and card data
//! fetching.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: All table state lives in one `GameState`, mutated
//!    through `&mut self` by whichever event handler is running.
//!
//! 2. **One Zone Per Card**: The `ZoneManager` tracks every card in exactly
//!    one pile or field slot. Breaking that is a bug and panics.
//!
//! 3. **Ordered Lookups**: Field slots and hit-test priority follow an
//!    explicit order, never hash order.
//!
//! 4. **Explicit Fetch Results**: Card fetching returns `anyhow::Result`;
//!    the placeholder record is only produced by the fallback wrapper.
//!
//! ## Modules
//!
//! - `core`: Sides, entity IDs, geometry, configuration, RNG, turn state,
//!   game state
//! - `zones`: Piles, field rows and card location tracking
//! - `cards`: Card data and table instances
//! - `fetch`: Card data service client
//! - `input`: Keyboard commands and pointer dragging

pub mod core;
pub mod zones;
pub mod cards;
pub mod fetch;
pub mod input;

// Re-export commonly used types
pub use crate::core::{
    EntityId, Side, SideMap,
    Point, Rect,
    GameRng,
    LayoutConfig, PileLayout, SlotLayout, TableConfig, ZoneId,
    TurnState, MoveRecord, GameState,
};

pub use crate::zones::{find_empty_field, FieldRow, FieldSlot, SlotId, ZoneManager};

pub use crate::cards::{is_basic_monster, Card, CardData, Skill};

pub use crate::fetch::{
    fetch_card_or_placeholder, fetch_cards, load_deck,
    ApiCard, CardSource, HttpCardSource,
};

pub use crate::input::{dispatch_key, Command, CommandOutcome, DragSession};
