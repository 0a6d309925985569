//! Card data - the static record fetched from the card service.
//!
//! `CardData` holds what the service says about a card: its name, type,
//! stage, hit points and two skill slots. Where the card sits on the table
//! is stored separately in `Card`.

use serde::{Deserialize, Serialize};

/// Card type that may be put into play as a creature.
pub const MONSTER: &str = "Monster";

/// Stage of a monster that does not evolve from anything.
pub const BASIC: &str = "Basic";

/// Name carried by the placeholder record.
pub const PLACEHOLDER_NAME: &str = "Error";

/// One of the two attack slots on a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    pub damage: Option<u32>,
    pub energy_qty: Option<u32>,
    pub energy_type: String,
    pub effect: String,
}

impl Skill {
    /// A skill slot with nothing in it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.damage.is_none()
            && self.energy_qty.is_none()
            && self.energy_type.is_empty()
            && self.effect.is_empty()
    }
}

/// Normalized card record.
///
/// ## Example
///
/// ```
/// use duel_table::cards::CardData;
///
/// let card = CardData::new("Sparkmouse")
///     .with_type("Monster")
///     .with_stage("Basic")
///     .with_hp(60);
///
/// assert!(card.is_basic_monster());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardData {
    pub name: String,
    pub card_type: String,
    /// Evolution stage (`"Basic"`, `"Stage 1"`, ...).
    pub stage: String,
    pub hp: Option<u32>,
    /// Name of the card this one evolves from.
    pub evolves_from: String,
    /// Free text describing what the card does.
    pub function: String,
    pub skills: [Skill; 2],
    /// Empty when no image is known.
    pub image_url: String,
}

impl CardData {
    /// Create a record with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The well-formed stand-in used when a card could not be fetched.
    ///
    /// Named `"Error"`, every other text field empty, no numbers, no image.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_NAME)
    }

    /// Is this the placeholder record?
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }

    /// True iff the card type is `"Monster"` and the stage is `"Basic"`.
    #[must_use]
    pub fn is_basic_monster(&self) -> bool {
        self.card_type == MONSTER && self.stage == BASIC
    }

    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    /// Set skill slot `slot` (0 or 1).
    ///
    /// Panics if `slot` is 2 or more.
    #[must_use]
    pub fn with_skill(mut self, slot: usize, skill: Skill) -> Self {
        assert!(slot < self.skills.len(), "Card {:?} has no skill slot {}", self.name, slot);
        self.skills[slot] = skill;
        self
    }
}

/// Free-function form of [`CardData::is_basic_monster`].
#[must_use]
pub fn is_basic_monster(card: &CardData) -> bool {
    card.is_basic_monster()
}
