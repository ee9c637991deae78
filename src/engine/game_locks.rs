// src/engine/game_locks.rs

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::GameId;

/// Пер-игровые мьютексы.
///
/// Всё, что трогает одну игру (старт раздачи, открытие борда), выполняется
/// под локом этой игры: эскалация блайндов и переходы борда – это
/// check-then-act. Разные игры друг друга не блокируют: общий лок на карту
/// держится только пока ищем/создаём хэндл игры.
#[derive(Debug, Default)]
pub struct GameLocks {
    locks: Mutex<HashMap<GameId, Arc<Mutex<()>>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self, game_id: GameId) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Выполнить `f` под локом игры `game_id`.
    ///
    /// Лок не реентерабельный: внутри `f` нельзя снова звать `with_game` для той же игры.
    pub fn with_game<T>(&self, game_id: GameId, f: impl FnOnce() -> T) -> T {
        let handle = self.handle(game_id);
        let _guard = handle.lock();
        f()
    }

    /// Сколько игр сейчас отслеживается.
    pub fn tracked_games(&self) -> usize {
        self.locks.lock().len()
    }

    /// Забыть игру (после её завершения). Текущие держатели лока доработают спокойно.
    pub fn release(&self, game_id: GameId) {
        self.locks.lock().remove(&game_id);
    }
}
