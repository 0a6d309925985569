//! Game state: the single owner of everything on the table.
//!
//! `GameState` holds the turn state, the zone manager, every card instance,
//! the layout used to position them and the shuffle RNG. All zone changes go
//! through its methods so that card positions, zone membership and the move
//! history stay consistent.
//!
//! ## Hit-testing
//!
//! `get_card_at_position` checks, in this order: player hand, opponent hand,
//! player fields, opponent fields. Hand cards are drawn on top, so a point
//! covered by both a hand card and a field card resolves to the hand card.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::config::{LayoutConfig, TableConfig, ZoneId};
use super::entity::EntityId;
use super::geometry::Point;
use super::history::MoveRecord;
use super::rng::GameRng;
use super::side::Side;
use super::turn::TurnState;
use crate::cards::{Card, CardData};
use crate::zones::{find_empty_field, FieldRow, SlotId, ZoneManager};

/// Full table state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Active side and per-turn limits.
    pub turn: TurnState,

    /// Zone manager for card locations.
    pub zones: ZoneManager,

    /// Card instances by entity ID.
    cards: FxHashMap<EntityId, Card>,

    /// Position configuration.
    layout: LayoutConfig,

    /// Deterministic shuffle RNG.
    pub rng: GameRng,

    /// Every zone change, oldest first.
    history: Vector<MoveRecord>,

    /// Next entity ID to allocate.
    next_entity_id: u32,
}

fn card_in(cards: &mut FxHashMap<EntityId, Card>, entity: EntityId) -> &mut Card {
    cards
        .get_mut(&entity)
        .unwrap_or_else(|| panic!("Entity {:?} has no card on this table", entity))
}

impl GameState {
    /// Create an empty table with the given layout and shuffle seed.
    #[must_use]
    pub fn new(layout: LayoutConfig, seed: u64) -> Self {
        Self::with_rng(layout, GameRng::new(seed))
    }

    /// Create an empty table from a full configuration.
    ///
    /// Seeds from the OS when the configuration has no seed.
    #[must_use]
    pub fn from_config(config: &TableConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config.layout.clone(), rng)
    }

    fn with_rng(layout: LayoutConfig, rng: GameRng) -> Self {
        Self {
            turn: TurnState::default(),
            zones: ZoneManager::from_layout(&layout),
            cards: FxHashMap::default(),
            layout,
            rng,
            history: Vector::new(),
            next_entity_id: 0,
        }
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    // === Cards ===

    /// Put a new card on top of the deck.
    pub fn add_card(&mut self, data: CardData) -> EntityId {
        let entity = EntityId(self.next_entity_id);
        self.next_entity_id += 1;

        let mut card = Card::new(entity, data, self.layout.card_width, self.layout.card_height);
        card.move_to_point(self.layout.deck.stacked(self.zones.zone_size(ZoneId::Deck)));

        self.cards.insert(entity, card);
        self.zones.add_to_pile(entity, ZoneId::Deck);
        self.record(entity, None, ZoneId::Deck);
        entity
    }

    /// Get a card instance.
    #[must_use]
    pub fn card(&self, entity: EntityId) -> Option<&Card> {
        self.cards.get(&entity)
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    fn card_ref(&self, entity: EntityId) -> &Card {
        self.cards
            .get(&entity)
            .unwrap_or_else(|| panic!("Entity {:?} has no card on this table", entity))
    }

    // === Zones ===

    /// Deck, bottom to top.
    #[must_use]
    pub fn deck(&self) -> &[EntityId] {
        self.zones.pile(ZoneId::Deck)
    }

    /// A side's hand, in layout order.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[EntityId] {
        self.zones.pile(ZoneId::Hand(side))
    }

    /// Prize pile, bottom to top.
    #[must_use]
    pub fn prizes(&self) -> &[EntityId] {
        self.zones.pile(ZoneId::Prizes)
    }

    /// A side's field slots.
    #[must_use]
    pub fn field(&self, side: Side) -> &FieldRow {
        self.zones.field(side)
    }

    /// Every zone change so far.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    fn record(&mut self, entity: EntityId, from: Option<ZoneId>, to: ZoneId) {
        self.history
            .push_back(MoveRecord::new(entity, from, to, self.turn.turn_number()));
    }

    /// Shuffle the deck.
    pub fn shuffle_deck(&mut self) {
        self.zones.shuffle_pile(ZoneId::Deck, &mut self.rng);
        info!(cards = self.deck().len(), "deck shuffled");
    }

    /// Number of shuffles performed on this table.
    #[must_use]
    pub fn shuffle_count(&self) -> u64 {
        self.rng.shuffle_count()
    }

    /// Move the top card of the deck into a side's hand.
    ///
    /// Returns the drawn card, or `None` if the deck is empty.
    pub fn draw(&mut self, side: Side) -> Option<EntityId> {
        let Some(entity) = self.zones.top_card(ZoneId::Deck) else {
            debug!(%side, "deck is empty, nothing to draw");
            return None;
        };

        let hand = ZoneId::Hand(side);
        let from = self.zones.move_to_pile(entity, hand);
        self.record(entity, from, hand);
        self.rearrange_hand(side);

        debug!(%side, %entity, name = %self.card_ref(entity).data.name, "drew card");
        Some(entity)
    }

    /// Deal up to `count` cards from the top of the deck to the prize pile.
    ///
    /// Returns how many were dealt.
    pub fn deal_prizes(&mut self, count: usize) -> usize {
        let mut dealt = 0;
        while dealt < count {
            let Some(entity) = self.zones.top_card(ZoneId::Deck) else {
                break;
            };
            let position = self.layout.prizes.stacked(self.zones.zone_size(ZoneId::Prizes));
            card_in(&mut self.cards, entity).move_to_point(position);
            let from = self.zones.move_to_pile(entity, ZoneId::Prizes);
            self.record(entity, from, ZoneId::Prizes);
            dealt += 1;
        }
        dealt
    }

    /// Put a card into a specific empty field slot on `side`.
    ///
    /// The card is positioned at the slot. If it came from a hand, that hand
    /// is laid out again. Placing a card into the slot it already holds does
    /// nothing.
    ///
    /// Panics if the card is not on the table, the slot does not exist or
    /// another card holds it.
    pub fn place_card(&mut self, entity: EntityId, side: Side, slot: SlotId) {
        let Some(slot_layout) = self.layout.fields[side].get(slot.index()) else {
            panic!(
                "Cannot place {:?}: the {} side has no field slot {:?}",
                entity, side, slot
            );
        };
        let origin = slot_layout.origin();
        if self.zones.field(side).get(slot) == Some(entity) {
            return;
        }

        let from = self
            .zones
            .place_in_slot(entity, side, slot)
            .unwrap_or_else(|| panic!("Entity {:?} is not on the table", entity));

        card_in(&mut self.cards, entity).move_to_point(origin);
        self.record(entity, Some(from), ZoneId::Field(side));

        if let ZoneId::Hand(hand_side) = from {
            self.rearrange_hand(hand_side);
        }
    }

    /// Place the first basic monster in a side's hand into that side's first
    /// empty field slot.
    ///
    /// Returns the card and slot, or `None` if the hand holds no basic
    /// monster or every slot is taken.
    pub fn place_from_hand(&mut self, side: Side) -> Option<(EntityId, SlotId)> {
        let Some(slot) = find_empty_field(self.zones.field(side)) else {
            debug!(%side, "no empty field to place into");
            return None;
        };
        let Some(entity) = self
            .hand(side)
            .iter()
            .copied()
            .find(|&e| self.card_ref(e).is_basic_monster())
        else {
            debug!(%side, "no basic monster in hand");
            return None;
        };

        self.place_card(entity, side, slot);
        debug!(
            %side,
            %entity,
            slot = self.zones.field(side).label(slot),
            "placed card"
        );
        Some((entity, slot))
    }

    /// Lay out a side's hand left to right from its configured origin.
    pub fn rearrange_hand(&mut self, side: Side) {
        let layout = self.layout.hands[side];
        for (index, &entity) in self.zones.pile(ZoneId::Hand(side)).iter().enumerate() {
            card_in(&mut self.cards, entity).move_to_point(layout.fanned(index));
        }
    }

    /// Lay out the opponent's hand.
    pub fn rearrange_vs_hand(&mut self) {
        self.rearrange_hand(Side::Opponent);
    }

    /// Move a card's drawn position without changing its zone.
    ///
    /// Panics if the card is not on the table.
    pub fn drag_card(&mut self, entity: EntityId, x: f32, y: f32) {
        card_in(&mut self.cards, entity).move_to(x, y);
    }

    // === Locator ===

    /// Find the card under a point.
    ///
    /// Hands are checked at each card's own position; field cards at their
    /// slot's configured position. Player hand, opponent hand, player fields
    /// and opponent fields are checked in that order and the first hit wins.
    #[must_use]
    pub fn get_card_at_position(&self, x: f32, y: f32) -> Option<EntityId> {
        let point = Point::new(x, y);

        for side in Side::ALL {
            let hit = self
                .hand(side)
                .iter()
                .copied()
                .find(|&e| self.card_ref(e).bounds().contains(point));
            if hit.is_some() {
                return hit;
            }
        }

        for side in Side::ALL {
            let slots = &self.layout.fields[side];
            let hit = self
                .zones
                .field(side)
                .occupied()
                .find(|&(slot, e)| {
                    self.card_ref(e)
                        .bounds_at(slots[slot.index()].origin())
                        .contains(point)
                })
                .map(|(_, e)| e);
            if hit.is_some() {
                return hit;
            }
        }

        None
    }

    // === Relocator ===

    /// Return the player hand, prizes and both field rows to the deck, then
    /// shuffle it.
    ///
    /// Cards are appended in this order: player hand, prizes, player fields,
    /// opponent fields; each is positioned at the deck slot it lands in. The
    /// opponent hand is left alone. The deck is shuffled exactly once
    /// afterwards, so no order survives.
    pub fn move_all_cards_to_deck(&mut self) {
        let mut returning: Vec<EntityId> = Vec::new();
        returning.extend_from_slice(self.hand(Side::Player));
        returning.extend_from_slice(self.prizes());
        for side in Side::ALL {
            returning.extend(self.zones.field(side).occupied().map(|(_, e)| e));
        }

        let count = returning.len();
        for entity in returning {
            self.return_to_deck(entity);
        }

        info!(returned = count, deck = self.deck().len(), "moved all cards to deck");
        self.shuffle_deck();
    }

    fn return_to_deck(&mut self, entity: EntityId) {
        let position = self.layout.deck.stacked(self.zones.zone_size(ZoneId::Deck));
        card_in(&mut self.cards, entity).move_to_point(position);
        let from = self.zones.move_to_pile(entity, ZoneId::Deck);
        self.record(entity, from, ZoneId::Deck);
    }

    // === Turn ===

    /// Pass the turn. See [`TurnState::switch_turn`].
    pub fn switch_turn(&mut self) {
        self.turn.switch_turn();
    }

    #[must_use]
    pub fn can_place_energy(&self) -> bool {
        self.turn.can_place_energy()
    }

    pub fn mark_energy_placed(&mut self) {
        self.turn.mark_energy_placed();
    }
}
