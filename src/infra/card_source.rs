//! Источник карт для борда.
//!
//! Гарантия для движка: карты внутри одной раздачи различны и не повторяются.
//! Перемешивание, RNG и исчерпание колоды живут только здесь.

use std::collections::HashMap;

use parking_lot::Mutex;
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::{GameId, HandId};
use crate::infra::rng::{DeterministicRng, RandomSource, SystemRng};
use crate::infra::rng_seed::RngSeed;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardSourceError {
    #[error("колода раздачи {hand_id} исчерпана: нужно {requested}, осталось {remaining}")]
    DeckExhausted {
        hand_id: HandId,
        requested: usize,
        remaining: usize,
    },

    #[error("источник выдал {delivered} карт вместо {requested}")]
    WrongCount { requested: usize, delivered: usize },
}

pub trait CardSource: Send + Sync {
    /// Следующие `count` карт для раздачи `hand_id` (на борд нужно 1 или 3).
    fn next_cards(
        &self,
        game_id: GameId,
        hand_id: HandId,
        count: usize,
    ) -> Result<Vec<Card>, CardSourceError>;

    /// Раздача закончила открывать борд: колоду можно освободить.
    fn release_hand(&self, _hand_id: HandId) {}
}

enum Shuffler<R> {
    /// Один RNG на все раздачи.
    Shared(R),
    /// Свой RNG на каждую раздачу, выведенный из базового seed.
    PerHand(RngSeed),
}

struct DeckState<R> {
    shuffler: Shuffler<R>,
    decks: HashMap<HandId, Deck>,
}

/// Одна перемешанная 52-карточная колода на раздачу.
///
/// Колода создаётся лениво при первом запросе карт для раздачи.
/// В seeded-режиме колода каждой раздачи перемешивается своим RNG,
/// выведенным из базового seed, поэтому борды воспроизводимы.
pub struct ShuffledDeckSource<R: RandomSource> {
    state: Mutex<DeckState<R>>,
}

impl ShuffledDeckSource<SystemRng> {
    pub fn system() -> Self {
        Self::with_rng(SystemRng)
    }
}

impl ShuffledDeckSource<DeterministicRng> {
    pub fn seeded(seed: RngSeed) -> Self {
        Self::with_shuffler(Shuffler::PerHand(seed))
    }
}

impl<R: RandomSource> ShuffledDeckSource<R> {
    /// Общий RNG на все раздачи.
    pub fn with_rng(rng: R) -> Self {
        Self::with_shuffler(Shuffler::Shared(rng))
    }

    fn with_shuffler(shuffler: Shuffler<R>) -> Self {
        Self {
            state: Mutex::new(DeckState {
                shuffler,
                decks: HashMap::new(),
            }),
        }
    }

    /// Сколько карт осталось в колоде раздачи (None – колоды нет).
    pub fn remaining(&self, hand_id: HandId) -> Option<usize> {
        self.state.lock().decks.get(&hand_id).map(Deck::len)
    }

    /// Освободить колоду завершённой раздачи.
    pub fn forget_hand(&self, hand_id: HandId) {
        self.state.lock().decks.remove(&hand_id);
    }
}

impl<R: RandomSource + Send> CardSource for ShuffledDeckSource<R> {
    fn next_cards(
        &self,
        game_id: GameId,
        hand_id: HandId,
        count: usize,
    ) -> Result<Vec<Card>, CardSourceError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;

        let deck = state.decks.entry(hand_id).or_insert_with(|| {
            let mut deck = Deck::standard_52();
            match &mut state.shuffler {
                Shuffler::Shared(rng) => rng.shuffle(&mut deck.cards),
                Shuffler::PerHand(seed) => {
                    seed.derive(game_id, hand_id, 0).to_rng().shuffle(&mut deck.cards)
                }
            }
            deck
        });

        let remaining = deck.len();
        deck.draw_exact(count).ok_or(CardSourceError::DeckExhausted {
            hand_id,
            requested: count,
            remaining,
        })
    }

    fn release_hand(&self, hand_id: HandId) {
        self.forget_hand(hand_id);
    }
}
