//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks which zone every card is in and keeps the zones
//! consistent with each other:
//! - Ordered piles (deck, hands, prizes); cards always land on top
//! - Field rows with one card per slot
//! - Card lookup by entity ID
//!
//! A card is tracked in exactly one pile or slot at any time.

use rustc_hash::FxHashMap;

use super::field::{FieldRow, SlotId};
use crate::core::config::{LayoutConfig, ZoneId};
use crate::core::entity::EntityId;
use crate::core::rng::GameRng;
use crate::core::side::{Side, SideMap};

const PILES: [ZoneId; 4] = [
    ZoneId::Deck,
    ZoneId::Hand(Side::Player),
    ZoneId::Hand(Side::Opponent),
    ZoneId::Prizes,
];

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use duel_table::core::{EntityId, Side, SideMap, ZoneId};
/// use duel_table::zones::{FieldRow, ZoneManager};
///
/// let mut manager = ZoneManager::new(SideMap::new(|_| FieldRow::new(["active"])));
///
/// manager.add_to_pile(EntityId(10), ZoneId::Deck);
/// manager.add_to_pile(EntityId(11), ZoneId::Deck);
///
/// // Draw the top card
/// let top = manager.top_card(ZoneId::Deck).unwrap();
/// manager.move_to_pile(top, ZoneId::Hand(Side::Player));
///
/// assert_eq!(manager.pile(ZoneId::Hand(Side::Player)), &[EntityId(11)]);
/// ```
#[derive(Clone, Debug)]
pub struct ZoneManager {
    /// Card locations: entity_id -> zone_id
    locations: FxHashMap<EntityId, ZoneId>,

    /// Card order for every pile zone.
    piles: FxHashMap<ZoneId, Vec<EntityId>>,

    /// Slot rows per side.
    fields: SideMap<FieldRow>,
}

impl ZoneManager {
    /// Create an empty manager with the given field rows.
    #[must_use]
    pub fn new(fields: SideMap<FieldRow>) -> Self {
        let piles = PILES.iter().map(|&zone| (zone, Vec::new())).collect();
        Self {
            locations: FxHashMap::default(),
            piles,
            fields,
        }
    }

    /// Create an empty manager with field rows labelled as in `layout`.
    #[must_use]
    pub fn from_layout(layout: &LayoutConfig) -> Self {
        Self::new(SideMap::new(|side| {
            FieldRow::new(layout.fields[side].iter().map(|s| s.label.clone()))
        }))
    }

    /// Add a new card to the top of a pile.
    ///
    /// Panics if the entity is already tracked or `zone` is a field row.
    pub fn add_to_pile(&mut self, entity: EntityId, zone: ZoneId) {
        if self.contains(entity) {
            panic!("Entity {:?} already exists in zone manager", entity);
        }
        self.push_onto_pile(entity, zone);
    }

    /// Move a tracked card onto the top of a pile.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_pile(&mut self, entity: EntityId, zone: ZoneId) -> Option<ZoneId> {
        let old_zone = self.remove(entity)?;
        self.push_onto_pile(entity, zone);
        Some(old_zone)
    }

    /// Move a tracked card into an empty field slot.
    ///
    /// Returns the old zone, or `None` if the card wasn't found. Placing a
    /// card into the slot it already holds changes nothing and returns
    /// `Some(ZoneId::Field(side))`.
    /// Panics if the slot is held by another card.
    pub fn place_in_slot(&mut self, entity: EntityId, side: Side, slot: SlotId) -> Option<ZoneId> {
        if !self.contains(entity) {
            return None;
        }
        if let Some(existing) = self.fields[side].get(slot) {
            if existing == entity {
                return Some(ZoneId::Field(side));
            }
            panic!(
                "Slot {:?} on the {} side already holds {:?}",
                slot, side, existing
            );
        }
        let old_zone = self.remove(entity)?;
        self.fields[side].occupy(slot, entity);
        self.locations.insert(entity, ZoneId::Field(side));
        Some(old_zone)
    }

    /// Stop tracking a card.
    ///
    /// Returns the zone it was in, or `None` if not found.
    pub fn remove(&mut self, entity: EntityId) -> Option<ZoneId> {
        let zone = self.locations.remove(&entity)?;

        match zone {
            ZoneId::Field(side) => {
                let row = &mut self.fields[side];
                if let Some(slot) = row.slot_of(entity) {
                    row.clear(slot);
                }
            }
            pile => {
                if let Some(order) = self.piles.get_mut(&pile) {
                    order.retain(|&e| e != entity);
                }
            }
        }

        Some(zone)
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, entity: EntityId) -> Option<ZoneId> {
        self.locations.get(&entity).copied()
    }

    /// Cards in a pile, bottom to top.
    ///
    /// Returns empty for field rows.
    #[must_use]
    pub fn pile(&self, zone: ZoneId) -> &[EntityId] {
        self.piles.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// A side's field row.
    #[must_use]
    pub fn field(&self, side: Side) -> &FieldRow {
        &self.fields[side]
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: ZoneId) -> usize {
        match zone {
            ZoneId::Field(side) => self.fields[side].occupied_count(),
            pile => self.pile(pile).len(),
        }
    }

    /// Top card of a pile (last in the vec).
    #[must_use]
    pub fn top_card(&self, zone: ZoneId) -> Option<EntityId> {
        self.piles.get(&zone)?.last().copied()
    }

    /// Shuffle a pile.
    pub fn shuffle_pile(&mut self, zone: ZoneId, rng: &mut GameRng) {
        if let Some(order) = self.piles.get_mut(&zone) {
            rng.shuffle(order);
        }
    }

    /// Check if the manager tracks an entity.
    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.locations.contains_key(&entity)
    }

    fn push_onto_pile(&mut self, entity: EntityId, zone: ZoneId) {
        let Some(order) = self.piles.get_mut(&zone) else {
            panic!("{} is not a pile, cannot add {:?}", zone, entity);
        };
        order.push(entity);
        self.locations.insert(entity, zone);
    }
}
