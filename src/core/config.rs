//! Table configuration types.
//!
//! - `ZoneId`: Names the card collections on the table
//! - `PileLayout` / `SlotLayout`: Where each zone is drawn
//! - `LayoutConfig`: Position configuration for the whole table
//! - `TableConfig`: Layout plus card data source, deck list and seed
//!
//! Every type has a usable `Default` and can be loaded from JSON; missing
//! JSON fields fall back to the defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::side::{Side, SideMap};

/// Zone identifier.
///
/// `Deck`, `Hand` and `Prizes` are ordered piles; `Field` is a row of
/// labelled slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    Deck,
    Hand(Side),
    Prizes,
    Field(Side),
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneId::Deck => write!(f, "deck"),
            ZoneId::Hand(side) => write!(f, "{side} hand"),
            ZoneId::Prizes => write!(f, "prizes"),
            ZoneId::Field(side) => write!(f, "{side} fields"),
        }
    }
}

/// Layout of an ordered pile: origin plus per-card spacing.
///
/// The axis is not configurable. The deck and prizes stack along `y`;
/// hands fan out along `x` at a fixed `y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PileLayout {
    pub x: f32,
    pub y: f32,
    pub spacing: f32,
}

impl PileLayout {
    #[must_use]
    pub const fn new(x: f32, y: f32, spacing: f32) -> Self {
        Self { x, y, spacing }
    }

    /// Position of the card at `index` in a stacked pile (deck, prizes).
    #[must_use]
    pub fn stacked(&self, index: usize) -> Point {
        Point::new(self.x, self.y + index as f32 * self.spacing)
    }

    /// Position of the card at `index` in a fanned pile (hands).
    #[must_use]
    pub fn fanned(&self, index: usize) -> Point {
        Point::new(self.x + index as f32 * self.spacing, self.y)
    }
}

/// Layout of one field slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    pub label: String,
    pub x: f32,
    pub y: f32,
}

impl SlotLayout {
    pub fn new(label: impl Into<String>, x: f32, y: f32) -> Self {
        Self { label: label.into(), x, y }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Position configuration for every zone on the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_width: f32,
    pub card_height: f32,
    pub deck: PileLayout,
    pub prizes: PileLayout,
    pub hands: SideMap<PileLayout>,
    /// Slots per side, in lookup order.
    pub fields: SideMap<Vec<SlotLayout>>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let bench = |y: f32| {
            let mut slots = Vec::with_capacity(6);
            for i in 0..5 {
                slots.push(SlotLayout::new(format!("bench{}", i + 1), 300.0 + i as f32 * 120.0, y));
            }
            slots
        };

        let mut player_fields = vec![SlotLayout::new("active", 540.0, 460.0)];
        player_fields.extend(bench(610.0));
        let mut opponent_fields = vec![SlotLayout::new("active", 540.0, 310.0)];
        opponent_fields.extend(bench(160.0));

        Self {
            card_width: 100.0,
            card_height: 140.0,
            deck: PileLayout::new(1050.0, 380.0, 0.5),
            prizes: PileLayout::new(40.0, 380.0, 12.0),
            hands: SideMap::from_pair(
                PileLayout::new(150.0, 770.0, 110.0),
                PileLayout::new(150.0, 10.0, 110.0),
            ),
            fields: SideMap::from_pair(player_fields, opponent_fields),
        }
    }
}

impl LayoutConfig {
    /// Replace one side's field slots.
    #[must_use]
    pub fn with_fields(mut self, side: Side, slots: Vec<SlotLayout>) -> Self {
        self.fields[side] = slots;
        self
    }

    /// Replace one side's hand layout.
    #[must_use]
    pub fn with_hand(mut self, side: Side, hand: PileLayout) -> Self {
        self.hands[side] = hand;
        self
    }
}

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/AyuMi-tsukuba/pokemon-card-images/main/Images/cards";

/// Complete table configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Base URL of the card data service (`{base}/card/{id}`).
    pub api_base_url: String,

    /// Base URL for card images (`{base}/{name}.png`).
    pub image_base_url: String,

    /// Shuffle seed. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Card ids to load into the deck.
    pub deck: Vec<u32>,

    /// Cards dealt to the prize pile at setup.
    pub prize_count: usize,

    pub layout: LayoutConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_owned(),
            seed: None,
            deck: (1..=20).collect(),
            prize_count: 6,
            layout: LayoutConfig::default(),
        }
    }
}

impl TableConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid table configuration")
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&text)
    }

    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: Vec<u32>) -> Self {
        self.deck = deck;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_id_display() {
        assert_eq!(format!("{}", ZoneId::Deck), "deck");
        assert_eq!(format!("{}", ZoneId::Hand(Side::Opponent)), "opponent hand");
        assert_eq!(format!("{}", ZoneId::Field(Side::Player)), "player fields");
    }

    #[test]
    fn test_pile_positions() {
        let hand = PileLayout::new(100.0, 50.0, 20.0);
        assert_eq!(hand.fanned(0), Point::new(100.0, 50.0));
        assert_eq!(hand.fanned(3), Point::new(160.0, 50.0));

        let deck = PileLayout::new(10.0, 10.0, 2.0);
        assert_eq!(deck.stacked(4), Point::new(10.0, 18.0));
    }

    #[test]
    fn test_default_layout_slots() {
        let layout = LayoutConfig::default();
        let labels: Vec<_> = layout.fields[Side::Player].iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["active", "bench1", "bench2", "bench3", "bench4", "bench5"]);
        assert_eq!(layout.fields[Side::Opponent].len(), 6);
    }

    #[test]
    fn test_pile_axis_not_configurable() {
        let config = TableConfig::from_json_str(
            r#"{ "layout": { "deck": { "x": 5, "y": 7, "spacing": 2, "direction": "Horizontal" } } }"#,
        )
        .unwrap();

        let deck = config.layout.deck;
        assert_eq!(deck, PileLayout::new(5.0, 7.0, 2.0));
        assert_eq!(deck.stacked(3), Point::new(5.0, 13.0));
    }

    #[test]
    fn test_table_config_partial_json() {
        let config = TableConfig::from_json_str(r#"{ "seed": 9, "deck": [4, 5] }"#).unwrap();

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.deck, vec![4, 5]);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn test_table_config_rejects_garbage() {
        assert!(TableConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_table_config_builder() {
        let config = TableConfig::default()
            .with_api_base_url("http://127.0.0.1:9000")
            .with_seed(3)
            .with_deck(vec![1]);

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.deck, vec![1]);
    }
}
