// src/domain/board.rs

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::BoardId;

/// Стадия борда. Всегда выводится из того, какие слоты заполнены.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoardStage {
    Preflop,
    Flop,
    Turn,
    River,
}

impl BoardStage {
    /// Сколько карт открывается при переходе В эту стадию.
    pub fn cards_revealed(self) -> usize {
        match self {
            BoardStage::Preflop => 0,
            BoardStage::Flop => 3,
            BoardStage::Turn | BoardStage::River => 1,
        }
    }

    /// Из какой стадии разрешён переход в эту.
    pub fn required_before(self) -> Option<BoardStage> {
        match self {
            BoardStage::Preflop => None,
            BoardStage::Flop => Some(BoardStage::Preflop),
            BoardStage::Turn => Some(BoardStage::Flop),
            BoardStage::River => Some(BoardStage::Turn),
        }
    }
}

/// Открытие борда вызвано не по порядку (пропуск или повтор улицы).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("нельзя открыть {target:?}: борд в стадии {actual:?}, нужна {expected:?}")]
pub struct InvalidStageError {
    /// Какую улицу пытались открыть.
    pub target: BoardStage,
    /// В какой стадии должен быть борд.
    pub expected: BoardStage,
    /// В какой стадии борд на самом деле.
    pub actual: BoardStage,
}

/// Общие карты одной раздачи.
///
/// Пять слотов, каждый заполняется ровно один раз и никогда не очищается:
/// `Preflop -> Flop -> Turn -> River`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommunityBoard {
    /// Назначается хранилищем при первом сохранении.
    pub id: Option<BoardId>,
    flop1: Option<Card>,
    flop2: Option<Card>,
    flop3: Option<Card>,
    turn: Option<Card>,
    river: Option<Card>,
}

impl CommunityBoard {
    /// Новый пустой борд (все пять слотов пустые, id ещё нет).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> BoardStage {
        if self.river.is_some() {
            BoardStage::River
        } else if self.turn.is_some() {
            BoardStage::Turn
        } else if self.flop1.is_some() {
            BoardStage::Flop
        } else {
            BoardStage::Preflop
        }
    }

    pub fn flop1(&self) -> Option<Card> {
        self.flop1
    }

    pub fn flop2(&self) -> Option<Card> {
        self.flop2
    }

    pub fn flop3(&self) -> Option<Card> {
        self.flop3
    }

    pub fn turn(&self) -> Option<Card> {
        self.turn
    }

    pub fn river(&self) -> Option<Card> {
        self.river
    }

    pub fn is_empty(&self) -> bool {
        self.stage() == BoardStage::Preflop
    }

    pub fn is_complete(&self) -> bool {
        self.stage() == BoardStage::River
    }

    /// Открытые карты в порядке раздачи.
    pub fn cards(&self) -> Vec<Card> {
        [self.flop1, self.flop2, self.flop3, self.turn, self.river]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Проверить, что из текущей стадии можно перейти в `target`.
    /// Ничего не мутирует – удобно звать до того, как тянуть карты из колоды.
    pub fn check_can_reveal(&self, target: BoardStage) -> Result<(), InvalidStageError> {
        let actual = self.stage();
        // Preflop "открыть" нельзя: он уже есть у любого нового борда.
        let expected = target.required_before().unwrap_or(BoardStage::Preflop);
        if target == BoardStage::Preflop || actual != expected {
            return Err(InvalidStageError {
                target,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Флоп: только из Preflop, все три слота ставятся разом.
    pub fn deal_flop(&mut self, cards: [Card; 3]) -> Result<(), InvalidStageError> {
        self.check_can_reveal(BoardStage::Flop)?;
        let [c1, c2, c3] = cards;
        self.flop1 = Some(c1);
        self.flop2 = Some(c2);
        self.flop3 = Some(c3);
        Ok(())
    }

    /// Тёрн: только из Flop.
    pub fn deal_turn(&mut self, card: Card) -> Result<(), InvalidStageError> {
        self.check_can_reveal(BoardStage::Turn)?;
        self.turn = Some(card);
        Ok(())
    }

    /// Ривер: только из Turn.
    pub fn deal_river(&mut self, card: Card) -> Result<(), InvalidStageError> {
        self.check_can_reveal(BoardStage::River)?;
        self.river = Some(card);
        Ok(())
    }
}

impl fmt::Display for CommunityBoard {
    /// `Ah Td 7c` или `-` для пустого борда.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self.cards();
        if cards.is_empty() {
            return write!(f, "-");
        }
        let rendered: Vec<String> = cards.iter().map(Card::to_string).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
