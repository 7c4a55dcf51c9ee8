use crate::engine::prelude::*;

/// The public part of a participant: where they stand and how they score.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standing {
    /// `None` until the participant has been placed on the board.
    pub desk: Option<Desk>,
    pub score: u32,
    pub permanent_daily_routine: u32,
    pub permanent_architecture_study: u32,
}

/// The participant we are deciding for. All of its card locations are known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Player {
    pub standing: Standing,
    pub hand: Deck,
    pub draw: Deck,
    pub discard: Deck,
    pub played: Deck,
    pub automated: Deck,
}

impl Player {
    pub fn new(standing: Standing) -> Self {
        Self {
            standing,
            ..Self::default()
        }
    }

    pub fn desk(&self) -> Option<Desk> {
        self.standing.desk
    }

    /// Mana the hand could pay with this turn. Rebuilt on every call.
    pub fn available_mana(&self) -> ManaPool {
        self.hand.provided_mana()
    }
}

/// The other participant. Its hand is hidden, so only the union of its
/// cards and its automated cards are known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Opponent {
    pub standing: Standing,
    pub cards: Deck,
    pub automated: Deck,
}

impl Opponent {
    pub fn new(standing: Standing) -> Self {
        Self {
            standing,
            ..Self::default()
        }
    }

    pub fn desk(&self) -> Option<Desk> {
        self.standing.desk
    }
}
