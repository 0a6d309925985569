//! Keyboard commands.
//!
//! Each key maps to exactly one table operation:
//!
//! | Key | Command         |
//! |-----|-----------------|
//! | `s` | shuffle deck    |
//! | `d` | draw (player)   |
//! | `f` | draw (opponent) |
//! | `p` | place (player)  |
//! | `o` | place (opponent)|
//!
//! Keys are case-sensitive and take no modifiers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EntityId, GameState, Side};
use crate::zones::SlotId;

/// A table operation triggered from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    ShuffleDeck,
    Draw(Side),
    Place(Side),
}

impl Command {
    /// Every bound command, in key-table order.
    pub const ALL: [Command; 5] = [
        Command::ShuffleDeck,
        Command::Draw(Side::Player),
        Command::Draw(Side::Opponent),
        Command::Place(Side::Player),
        Command::Place(Side::Opponent),
    ];

    /// Look up the command bound to a key.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            's' => Some(Command::ShuffleDeck),
            'd' => Some(Command::Draw(Side::Player)),
            'f' => Some(Command::Draw(Side::Opponent)),
            'p' => Some(Command::Place(Side::Player)),
            'o' => Some(Command::Place(Side::Opponent)),
            _ => None,
        }
    }

    /// The key bound to this command.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Command::ShuffleDeck => 's',
            Command::Draw(Side::Player) => 'd',
            Command::Draw(Side::Opponent) => 'f',
            Command::Place(Side::Player) => 'p',
            Command::Place(Side::Opponent) => 'o',
        }
    }

    /// Run the command against the table.
    pub fn execute(self, state: &mut GameState) -> CommandOutcome {
        match self {
            Command::ShuffleDeck => {
                state.shuffle_deck();
                CommandOutcome::Shuffled
            }
            Command::Draw(side) => CommandOutcome::Drew(side, state.draw(side)),
            Command::Place(side) => CommandOutcome::Placed(side, state.place_from_hand(side)),
        }
    }
}

/// What a command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Shuffled,
    /// Card drawn, `None` if the deck was empty.
    Drew(Side, Option<EntityId>),
    /// Card and slot, `None` if nothing could be placed.
    Placed(Side, Option<(EntityId, SlotId)>),
}

/// Handle a key press: look up its command and run it.
///
/// Returns `None` for unbound keys, leaving the table untouched.
pub fn dispatch_key(state: &mut GameState, key: char) -> Option<CommandOutcome> {
    let command = Command::from_key(key)?;
    debug!(%key, ?command, "dispatching key");
    Some(command.execute(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardData;
    use crate::core::LayoutConfig;

    #[test]
    fn test_key_table() {
        assert_eq!(Command::from_key('s'), Some(Command::ShuffleDeck));
        assert_eq!(Command::from_key('d'), Some(Command::Draw(Side::Player)));
        assert_eq!(Command::from_key('f'), Some(Command::Draw(Side::Opponent)));
        assert_eq!(Command::from_key('p'), Some(Command::Place(Side::Player)));
        assert_eq!(Command::from_key('o'), Some(Command::Place(Side::Opponent)));
    }

    #[test]
    fn test_unbound_keys() {
        for key in ['S', 'D', 'x', ' ', '1'] {
            assert_eq!(Command::from_key(key), None);
        }
    }

    #[test]
    fn test_key_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_key(command.key()), Some(command));
        }
    }

    #[test]
    fn test_dispatch_draw_and_place() {
        let mut state = GameState::new(LayoutConfig::default(), 5);
        let card = state.add_card(CardData::new("A").with_type("Monster").with_stage("Basic"));

        assert_eq!(dispatch_key(&mut state, 'f'), Some(CommandOutcome::Drew(Side::Opponent, Some(card))));
        assert_eq!(
            dispatch_key(&mut state, 'o'),
            Some(CommandOutcome::Placed(Side::Opponent, Some((card, SlotId(0)))))
        );
        assert_eq!(dispatch_key(&mut state, 'd'), Some(CommandOutcome::Drew(Side::Player, None)));
        assert_eq!(dispatch_key(&mut state, 'p'), Some(CommandOutcome::Placed(Side::Player, None)));
    }

    #[test]
    fn test_dispatch_shuffle() {
        let mut state = GameState::new(LayoutConfig::default(), 5);
        assert_eq!(dispatch_key(&mut state, 's'), Some(CommandOutcome::Shuffled));
        assert_eq!(state.shuffle_count(), 1);
    }

    #[test]
    fn test_dispatch_unbound_is_noop() {
        let mut state = GameState::new(LayoutConfig::default(), 5);
        state.add_card(CardData::new("A"));

        assert_eq!(dispatch_key(&mut state, 'q'), None);
        assert_eq!(state.deck().len(), 1);
        assert_eq!(state.shuffle_count(), 0);
    }
}
