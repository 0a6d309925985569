//! Pointer dragging.
//!
//! A press picks the card under the pointer with the same priority as
//! `GameState::get_card_at_position` and remembers where on the card it was
//! grabbed, so the card does not jump to the pointer.

use crate::core::{EntityId, GameState, Point};

/// An in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    entity: EntityId,
    grab_offset: Point,
}

impl DragSession {
    /// Start dragging the card under (`x`, `y`), if any.
    #[must_use]
    pub fn press(state: &GameState, x: f32, y: f32) -> Option<Self> {
        let entity = state.get_card_at_position(x, y)?;
        let card = state.card(entity)?;
        Some(Self {
            entity,
            grab_offset: Point::new(x - card.x, y - card.y),
        })
    }

    /// The card being dragged.
    #[must_use]
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Follow the pointer to (`x`, `y`).
    pub fn pointer_moved(&self, state: &mut GameState, x: f32, y: f32) {
        state.drag_card(self.entity, x - self.grab_offset.x, y - self.grab_offset.y);
    }

    /// Finish the drag, returning the card that was dragged.
    #[must_use]
    pub fn release(self) -> EntityId {
        self.entity
    }
}
