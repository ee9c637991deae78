use serde::{Deserialize, Serialize};

use crate::domain::blinds::BlindLevel;
use crate::domain::board::CommunityBoard;
use crate::domain::history::HandHistory;
use crate::domain::{GameId, HandId, PlayerId, Timestamp};

/// Участник раздачи: связка раздача <-> игрок.
///
/// `rotation_order` считается один раз на старте раздачи (0 = BTN, дальше по часовой)
/// и хранится здесь, чтобы порядок не зависел от живого состояния игры.
/// Сортировка – по `rotation_order` (поэтому поле идёт первым).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandParticipant {
    pub rotation_order: u32,
    pub player_id: PlayerId,
    /// Фиксированное место игрока за столом.
    pub position: u32,
}

/// Одна раздача.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    /// Назначается хранилищем при первом сохранении.
    pub id: Option<HandId>,
    pub game_id: GameId,
    /// Снимок уровня блайндов на момент старта. Дальнейшая эскалация его не меняет.
    pub blind_level: BlindLevel,
    /// Участники, отсортированные по `rotation_order`.
    pub participants: Vec<HandParticipant>,
    /// Борд этой раздачи (1:1, никогда не переиспользуется).
    pub board: CommunityBoard,
    /// Чей сейчас ход.
    pub current_to_act: Option<PlayerId>,
    pub started_at: Timestamp,
    pub history: HandHistory,
}

impl Hand {
    pub fn participants_in_order(&self) -> impl Iterator<Item = &HandParticipant> {
        self.participants.iter()
    }

    pub fn participant_for(&self, player_id: PlayerId) -> Option<&HandParticipant> {
        self.participants.iter().find(|p| p.player_id == player_id)
    }

    /// Участник на баттоне (rotation_order = 0).
    pub fn button(&self) -> Option<&HandParticipant> {
        self.participants.iter().find(|p| p.rotation_order == 0)
    }

    /// Следующий по кругу после текущего актёра.
    pub fn next_to_act(&self) -> Option<PlayerId> {
        let current = self.participant_for(self.current_to_act?)?;
        let n = self.participants.len() as u32;
        let next_order = (current.rotation_order + 1) % n;
        self.participants
            .iter()
            .find(|p| p.rotation_order == next_order)
            .map(|p| p.player_id)
    }
}
