//! Cards on the table.
//!
//! A `Card` pairs fetched `CardData` with where it is drawn. Zone membership
//! lives in the zone manager, not here.

use serde::{Deserialize, Serialize};

use super::definition::CardData;
use crate::core::entity::EntityId;
use crate::core::geometry::{Point, Rect};

/// A card instance on the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub entity_id: EntityId,
    pub data: CardData,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Card {
    #[must_use]
    pub fn new(entity_id: EntityId, data: CardData, width: f32, height: f32) -> Self {
        Self {
            entity_id,
            data,
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Move the card's top-left corner.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Move the card's top-left corner to `point`.
    pub fn move_to_point(&mut self, point: Point) {
        self.move_to(point.x, point.y);
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounding box at the card's own position.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Bounding box if the card were drawn at `origin`.
    #[must_use]
    pub fn bounds_at(&self, origin: Point) -> Rect {
        Rect::at(origin, self.width, self.height)
    }

    #[must_use]
    pub fn is_basic_monster(&self) -> bool {
        self.data.is_basic_monster()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(EntityId(1), CardData::new("Test"), 100.0, 140.0)
    }

    #[test]
    fn test_move_to() {
        let mut card = card();
        card.move_to(30.0, 40.0);

        assert_eq!(card.position(), Point::new(30.0, 40.0));
        assert_eq!(card.bounds(), Rect::new(30.0, 40.0, 100.0, 140.0));
    }

    #[test]
    fn test_bounds_at_ignores_own_position() {
        let mut card = card();
        card.move_to(500.0, 500.0);

        let bounds = card.bounds_at(Point::new(0.0, 0.0));
        assert!(bounds.contains(Point::new(50.0, 70.0)));
        assert!(!card.bounds().contains(Point::new(50.0, 70.0)));
    }
}
