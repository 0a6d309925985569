//! Move history: one record per card that changed zones.
//!
//! Used for replay/debugging and for checking that bulk moves touched the
//! cards they should have.

use serde::{Deserialize, Serialize};

use super::config::ZoneId;
use super::entity::EntityId;

/// A card moving between zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The card that moved.
    pub entity: EntityId,

    /// Zone it left. `None` when the card was first put on the table.
    pub from: Option<ZoneId>,

    /// Zone it arrived in.
    pub to: ZoneId,

    /// Turn number when the move happened.
    pub turn: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(entity: EntityId, from: Option<ZoneId>, to: ZoneId, turn: u32) -> Self {
        Self { entity, from, to, turn }
    }

    /// Did the card enter the table with this move?
    #[must_use]
    pub fn is_creation(&self) -> bool {
        self.from.is_none()
    }
}
