//! Field rows: labelled board slots holding at most one card each.
//!
//! Slots keep the order they were configured in. Every lookup walks them in
//! that order, so "first empty slot" and hit-test priority are stable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::entity::EntityId;

/// Index of a slot within its row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u8);

impl SlotId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// A labelled board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSlot {
    pub label: String,
    pub card: Option<EntityId>,
}

/// An ordered row of field slots.
///
/// ```
/// use duel_table::core::EntityId;
/// use duel_table::zones::{find_empty_field, FieldRow, SlotId};
///
/// let mut row = FieldRow::new(["active", "bench1"]);
/// row.occupy(SlotId(0), EntityId(3));
///
/// let empty = find_empty_field(&row).unwrap();
/// assert_eq!(row.label(empty), "bench1");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRow {
    slots: SmallVec<[FieldSlot; 6]>,
}

impl FieldRow {
    /// Create a row of empty slots with the given labels, in order.
    pub fn new<L: Into<String>>(labels: impl IntoIterator<Item = L>) -> Self {
        let slots: SmallVec<[FieldSlot; 6]> = labels
            .into_iter()
            .map(|label| FieldSlot { label: label.into(), card: None })
            .collect();
        assert!(slots.len() <= u8::MAX as usize, "At most 255 field slots supported");
        Self { slots }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if the row has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots holding a card.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.card.is_some()).count()
    }

    /// Label of a slot.
    #[must_use]
    pub fn label(&self, slot: SlotId) -> &str {
        &self.slots[slot.index()].label
    }

    /// Card in a slot, if any.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> Option<EntityId> {
        self.slots.get(slot.index()).and_then(|s| s.card)
    }

    /// Find the slot holding a card.
    #[must_use]
    pub fn slot_of(&self, entity: EntityId) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|s| s.card == Some(entity))
            .map(|i| SlotId(i as u8))
    }

    /// First empty slot in row order.
    #[must_use]
    pub fn first_empty(&self) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|s| s.card.is_none())
            .map(|i| SlotId(i as u8))
    }

    /// Put a card into an empty slot.
    ///
    /// Panics if the slot is already occupied.
    pub fn occupy(&mut self, slot: SlotId, entity: EntityId) {
        let target = &mut self.slots[slot.index()];
        if let Some(existing) = target.card {
            panic!(
                "Slot {:?} ({}) already holds {:?}, cannot place {:?}",
                slot, target.label, existing, entity
            );
        }
        target.card = Some(entity);
    }

    /// Empty a slot, returning the card it held.
    pub fn clear(&mut self, slot: SlotId) -> Option<EntityId> {
        self.slots[slot.index()].card.take()
    }

    /// Iterate over all slots in order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &FieldSlot)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (SlotId(i as u8), s))
    }

    /// Iterate over occupied slots in order.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotId, EntityId)> + '_ {
        self.iter().filter_map(|(id, s)| s.card.map(|c| (id, c)))
    }
}

/// First empty slot in row order, or `None` if every slot is occupied.
#[must_use]
pub fn find_empty_field(row: &FieldRow) -> Option<SlotId> {
    row.first_empty()
}
