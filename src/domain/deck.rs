use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода одной раздачи. В домене – просто упорядоченный список карт;
/// перемешивание делает источник карт (infra::card_source) через RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода: Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять ровно `n` карт сверху. Если карт меньше – колоду не трогаем и возвращаем None.
    pub fn draw_exact(&mut self, n: usize) -> Option<Vec<Card>> {
        if self.cards.len() < n {
            return None;
        }
        let split_at = self.cards.len() - n;
        let mut taken = self.cards.split_off(split_at);
        // Верх колоды – конец вектора, поэтому разворачиваем.
        taken.reverse();
        Some(taken)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let deck = Deck::standard_52();
        let unique: HashSet<_> = deck.cards.iter().copied().collect();
        assert_eq!(deck.len(), 52);
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn draw_exact_is_all_or_nothing() {
        let mut deck = Deck::standard_52();
        let top = *deck.cards.last().unwrap();

        let drawn = deck.draw_exact(3).unwrap();
        assert_eq!(drawn[0], top);
        assert_eq!(deck.len(), 49);

        assert!(deck.draw_exact(50).is_none());
        assert_eq!(deck.len(), 49);
    }
}
