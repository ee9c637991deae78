use serde::{Deserialize, Serialize};

use crate::domain::blinds::BlindLevel;
use crate::domain::board::BoardStage;
use crate::domain::card::Card;
use crate::domain::{GameId, PlayerId, Timestamp};

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Раздача началась.
    HandStarted {
        game_id: GameId,
        started_at: Timestamp,
        button: PlayerId,
        big_blind: PlayerId,
        first_to_act: PlayerId,
    },

    /// С этой раздачи действует новый уровень блайндов.
    BlindLevelRaised { from: BlindLevel, to: BlindLevel },

    /// Открыты общие карты.
    BoardDealt { stage: BoardStage, cards: Vec<Card> },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// История раздачи в порядке событий (для реплея / отладки).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let index = self.events.len() as u32;
        self.events.push(HandEvent { index, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Все открытия борда по порядку.
    pub fn board_reveals(&self) -> impl Iterator<Item = (BoardStage, &[Card])> {
        self.events.iter().filter_map(|e| match &e.kind {
            HandEventKind::BoardDealt { stage, cards } => Some((*stage, cards.as_slice())),
            _ => None,
        })
    }
}
