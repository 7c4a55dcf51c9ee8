use crate::engine::prelude::*;

/// An unordered set of cards in one location (hand, discard, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>
}

impl Deck {
    /// Expands per-kind counts, given in card index order, into cards.
    pub fn from_counts(counts: &[u32]) -> Result<Self, DecisionError> {
        counts
            .iter()
            .enumerate()
            .map(|(index, count)| {
                Card::from_index(index)
                    .map(|card| std::iter::repeat(card).take(*count as usize))
                    .ok_or_else(|| DecisionError::Malformed {
                        what: "card counts",
                        token: format!("{} counts", counts.len()),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|runs| runs.into_iter().flatten().collect())
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card)
    }

    pub fn extend(&mut self, other: Deck) {
        self.cards.extend(other.cards)
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|held| **held == card).count()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Everything these cards would provide if spent together.
    pub fn provided_mana(&self) -> ManaPool {
        self.cards.iter().flat_map(|card| card.provided_mana()).collect()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(value: Vec<Card>) -> Self {
        Self {cards: value}
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_expand_in_index_order() {
        let deck = Deck::from_counts(&[0, 2, 0, 0, 0, 0, 0, 0, 1, 1]).unwrap();
        assert_eq!(
            deck.cards,
            vec![Card::Generic(Desk::Coding), Card::Generic(Desk::Coding), Card::Bonus, Card::TechDebt]
        );
        assert_eq!(deck.count(Card::Generic(Desk::Coding)), 2);
        assert!(!deck.contains(Card::Generic(Desk::Training)));
    }

    #[test]
    fn too_many_counts_is_an_error() {
        let counts = [0; CARD_KIND_COUNT + 1];
        assert_eq!(
            Deck::from_counts(&counts),
            Err(DecisionError::Malformed { what: "card counts", token: "11 counts".into() })
        );
    }

    #[test]
    fn provided_mana_folds_matching_types() {
        let deck: Deck = vec![Card::Generic(Desk::Coding), Card::Generic(Desk::Coding), Card::Bonus, Card::TechDebt].into();
        let pool = deck.provided_mana();
        assert_eq!(pool.get(ManaType::Specific(Desk::Coding)), 4);
        assert_eq!(pool.get(ManaType::Wildcard), 1);
        assert_eq!(pool.get(ManaType::Shoddy), 5);
        assert_eq!(pool.iter().count(), 3);
    }
}
