use std::fmt;

use crate::engine::prelude::*;

pub const CARD_KIND_COUNT: usize = 10;

/// A card as the referee reports it. Cards carry no identity, so two
/// cards of the same kind are interchangeable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Card {
    Generic(Desk),
    Bonus,
    TechDebt,
}

impl Card {
    /// Every card kind, in the referee's index order.
    #[cfg(test)]
    pub fn all() -> impl Iterator<Item = Card> {
        ALL_DESKS
            .into_iter()
            .map(Card::Generic)
            .chain([Card::Bonus, Card::TechDebt])
    }

    pub fn index(self) -> usize {
        match self {
            Card::Generic(desk) => desk.index(),
            Card::Bonus => DESK_COUNT,
            Card::TechDebt => DESK_COUNT + 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Card> {
        match index {
            i if i < DESK_COUNT => Desk::from_index(i).map(Card::Generic),
            i if i == DESK_COUNT => Some(Card::Bonus),
            i if i == DESK_COUNT + 1 => Some(Card::TechDebt),
            _ => None,
        }
    }

    /// The mana this card contributes when it sits in a hand.
    pub fn provided_mana(self) -> Vec<ManaType> {
        use ManaType::*;
        match self {
            Card::Generic(desk) => vec![Specific(desk), Specific(desk), Shoddy, Shoddy],
            Card::Bonus => vec![Wildcard, Shoddy],
            Card::TechDebt => vec![],
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Generic(desk) => write!(f, "{desk}"),
            Card::Bonus => f.write_str("BONUS"),
            Card::TechDebt => f.write_str("TECHNICAL_DEBT"),
        }
    }
}
