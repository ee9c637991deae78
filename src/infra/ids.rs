use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{BoardId, GameId, HandId, PlayerId};

/// Генерация ID на монотонных счётчиках: по одному счётчику на тип сущности.
/// Используется хранилищем при первом сохранении; выданный ID больше не меняется.
#[derive(Debug)]
pub struct IdGenerator {
    game_counter: AtomicU64,
    player_counter: AtomicU64,
    hand_counter: AtomicU64,
    board_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Все счётчики стартуют с 1 (0 никогда не выдаётся).
    pub fn new() -> Self {
        Self {
            game_counter: AtomicU64::new(1),
            player_counter: AtomicU64::new(1),
            hand_counter: AtomicU64::new(1),
            board_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_game_id(&self) -> GameId {
        self.game_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_hand_id(&self) -> HandId {
        self.hand_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_board_id(&self) -> BoardId {
        self.board_counter.fetch_add(1, Ordering::Relaxed)
    }
}
