//! Turn state: active side and per-turn limits.
//!
//! The energy flag is false at the start of every turn and may flip to true
//! at most once before the next `switch_turn`.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::side::Side;

/// Whose turn it is and what they have already done this turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    active: Side,
    turn_number: u32,
    energy_placed: bool,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(Side::Player)
    }
}

impl TurnState {
    /// Start at turn 1 with `first` active.
    #[must_use]
    pub fn new(first: Side) -> Self {
        Self {
            active: first,
            turn_number: 1,
            energy_placed: false,
        }
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn active(&self) -> Side {
        self.active
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Pass the turn to the other side and clear per-turn limits.
    pub fn switch_turn(&mut self) {
        self.active = self.active.other();
        self.turn_number += 1;
        self.energy_placed = false;
        info!(active = %self.active, turn = self.turn_number, "It's now {}'s turn", self.active);
    }

    /// Whether energy may still be placed this turn.
    #[must_use]
    pub fn can_place_energy(&self) -> bool {
        !self.energy_placed
    }

    /// Record that energy was placed this turn.
    pub fn mark_energy_placed(&mut self) {
        self.energy_placed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_turn_state() {
        let turn = TurnState::default();

        assert_eq!(turn.active(), Side::Player);
        assert_eq!(turn.turn_number(), 1);
        assert!(turn.can_place_energy());
    }

    #[test]
    fn test_switch_turn_alternates() {
        let mut turn = TurnState::new(Side::Opponent);

        turn.switch_turn();
        assert_eq!(turn.active(), Side::Player);
        turn.switch_turn();
        assert_eq!(turn.active(), Side::Opponent);
        assert_eq!(turn.turn_number(), 3);
    }

    #[test]
    fn test_energy_once_per_turn() {
        let mut turn = TurnState::default();

        turn.mark_energy_placed();
        assert!(!turn.can_place_energy());

        // Idempotent
        turn.mark_energy_placed();
        assert!(!turn.can_place_energy());

        turn.switch_turn();
        assert!(turn.can_place_energy());
    }

    #[test]
    fn test_switch_without_energy_keeps_flag_clear() {
        let mut turn = TurnState::default();
        turn.switch_turn();
        assert!(turn.can_place_energy());
    }
}
