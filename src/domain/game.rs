// src/domain/game.rs

use serde::{Deserialize, Serialize};

use crate::domain::blinds::{BlindLevel, BlindSchedule};
use crate::domain::chips::Chips;
use crate::domain::formats::TournamentFormat;
use crate::domain::{GameId, PlayerId};

/// Тип игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameType {
    Cash,
    Tournament,
}

/// Структура игры: стартовый стек + расписание блайндов.
///
/// Можно собрать из пресета (`from_format`) или загрузить из JSON.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStructure {
    pub starting_chips: Chips,
    pub blinds: BlindSchedule,
}

impl GameStructure {
    pub fn new(starting_chips: Chips, blinds: BlindSchedule) -> Self {
        Self {
            starting_chips,
            blinds,
        }
    }

    pub fn from_format(format: TournamentFormat, starting_chips: Chips) -> Self {
        Self::new(starting_chips, format.schedule())
    }

    /// Загрузить структуру из JSON (конфиг турнира) и сразу провалидировать.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let structure: GameStructure =
            serde_json::from_str(json).map_err(|e| format!("GameStructure: bad JSON: {e}"))?;
        structure.validate()?;
        Ok(structure)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.starting_chips.is_zero() {
            return Err("GameStructure: starting_chips = 0".into());
        }
        self.blinds.validate()
    }

    pub fn current_blind_level(&self) -> Option<&BlindLevel> {
        self.blinds.current_level()
    }
}

/// Игра (стол): структура, флаг старта и текущие BTN / BB.
///
/// Рассадка (список `Player`) живёт в хранилище и достаётся по `id` игры.
/// Инвариант: если `started`, то рассадка непустая, а BTN и BB сидят за этой игрой.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game {
    /// Назначается хранилищем при первом сохранении.
    pub id: Option<GameId>,
    pub name: String,
    pub game_type: GameType,
    pub started: bool,
    pub players_remaining: u32,
    pub structure: GameStructure,
    /// Игрок на баттоне.
    pub button: Option<PlayerId>,
    /// Игрок, который ставит большой блайнд.
    pub big_blind: Option<PlayerId>,
}

impl Game {
    pub fn new(name: impl Into<String>, game_type: GameType, structure: GameStructure) -> Self {
        Self {
            id: None,
            name: name.into(),
            game_type,
            started: false,
            players_remaining: 0,
            structure,
            button: None,
            big_blind: None,
        }
    }

    pub fn blinds(&self) -> &BlindSchedule {
        &self.structure.blinds
    }

    pub fn blinds_mut(&mut self) -> &mut BlindSchedule {
        &mut self.structure.blinds
    }
}
