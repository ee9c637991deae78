use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{GameId, PlayerId};

/// Игрок за конкретной игрой (одно место за столом).
///
/// `position` – фиксированный номер места, уникальный в пределах игры,
/// назначается при рассадке и дальше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Назначается хранилищем при первом сохранении.
    pub id: Option<PlayerId>,
    /// Игра, которой принадлежит игрок (на всё время жизни).
    pub game_id: GameId,
    pub name: String,
    /// Текущий стек.
    pub chips: Chips,
    /// Номер места за столом.
    pub position: u32,
}

impl Player {
    pub fn new(game_id: GameId, name: impl Into<String>, chips: Chips, position: u32) -> Self {
        Self {
            id: None,
            game_id,
            name: name.into(),
            chips,
            position,
        }
    }

    pub fn has_chips(&self) -> bool {
        !self.chips.is_zero()
    }
}
