// src/engine/seat_order.rs

use std::collections::HashSet;

use crate::domain::hand::HandParticipant;
use crate::domain::player::Player;
use crate::domain::PlayerId;
use crate::engine::errors::{HandError, HandResult};

/// Порядок рассадки для одной раздачи.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatOrder {
    /// Участники по возрастанию `rotation_order` (первый – BTN).
    pub participants: Vec<HandParticipant>,
    /// Кто ходит первым: следующий по часовой после BB.
    pub first_to_act: HandParticipant,
}

impl SeatOrder {
    /// Участник на баттоне (rotation_order = 0).
    pub fn button(&self) -> Option<&HandParticipant> {
        self.participants.first()
    }
}

/// Посчитать порядок раздачи от баттона.
///
/// Места обходятся по возрастанию `position`, начиная с BTN:
/// `rotation_order = (rank(p) - rank(btn) + N) mod N`, где rank – индекс места
/// в отсортированной рассадке. Для мест 1..N это ровно `position - btn.position`.
/// Первый ход – у участника с `rotation_order = (bb + 1) mod N`.
///
/// Хедз-ап (N = 2) идёт по той же формуле: после BB снова BTN, то есть
/// BTN/SB ходит первым на префлопе. При N = 1 единственный игрок – и BTN, и BB,
/// и первый к ходу.
pub fn compute_seat_order(
    players: &[Player],
    button: PlayerId,
    big_blind: PlayerId,
) -> HandResult<SeatOrder> {
    if players.is_empty() {
        return Err(HandError::InvalidConfiguration(
            "рассадка пустая".into(),
        ));
    }

    let mut seated: Vec<(PlayerId, u32)> = Vec::with_capacity(players.len());
    let mut positions = HashSet::with_capacity(players.len());
    for p in players {
        let id = p.id.ok_or_else(|| {
            HandError::InvalidConfiguration(format!(
                "игрок на месте {} не сохранён (нет id)",
                p.position
            ))
        })?;
        if !positions.insert(p.position) {
            return Err(HandError::InvalidConfiguration(format!(
                "место {} занято дважды",
                p.position
            )));
        }
        seated.push((id, p.position));
    }
    seated.sort_by_key(|&(_, position)| position);

    let rank_of = |player_id: PlayerId, role: &str| {
        seated
            .iter()
            .position(|&(id, _)| id == player_id)
            .ok_or_else(|| {
                HandError::InvalidConfiguration(format!(
                    "{role} (игрок {player_id}) не сидит за столом"
                ))
            })
    };
    let btn_rank = rank_of(button, "BTN")?;
    let bb_rank = rank_of(big_blind, "BB")?;

    let n = seated.len();
    let mut participants: Vec<HandParticipant> = seated
        .iter()
        .enumerate()
        .map(|(rank, &(player_id, position))| HandParticipant {
            rotation_order: ((rank + n - btn_rank) % n) as u32,
            player_id,
            position,
        })
        .collect();
    participants.sort();

    let bb_order = (bb_rank + n - btn_rank) % n;
    // После сортировки индекс == rotation_order.
    let first_to_act = participants[(bb_order + 1) % n];

    Ok(SeatOrder {
        participants,
        first_to_act,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chips::Chips;

    fn seat(id: PlayerId, position: u32) -> Player {
        let mut p = Player::new(1, format!("p{id}"), Chips(1000), position);
        p.id = Some(id);
        p
    }

    #[test]
    fn button_in_the_middle_wraps_around() {
        let players = vec![seat(10, 1), seat(20, 2), seat(30, 3), seat(40, 4)];
        let order = compute_seat_order(&players, 30, 10).unwrap();

        let ids: Vec<_> = order.participants.iter().map(|p| p.player_id).collect();
        assert_eq!(ids, vec![30, 40, 10, 20]);
        assert_eq!(order.button().map(|p| p.player_id), Some(30));
        assert_eq!(order.first_to_act.player_id, 20);
    }

    #[test]
    fn duplicate_position_is_rejected() {
        let players = vec![seat(1, 1), seat(2, 1)];
        assert!(matches!(
            compute_seat_order(&players, 1, 2),
            Err(HandError::InvalidConfiguration(_))
        ));
    }
}
