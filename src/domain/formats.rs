//! Готовые турнирные форматы: список уровней блайндов + длительность уровня.

use serde::{Deserialize, Serialize};

use crate::domain::blinds::{BlindLevel, BlindSchedule};
use crate::domain::chips::Chips;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentFormat {
    /// ~2 часа на 6 игроков: 8 уровней по 15 минут, старт с 10/20.
    TwoHourSixPlayer,
    /// ~1 час на 6 игроков: 6 уровней по 10 минут.
    OneHourSixPlayer,
    /// Турбо на 9 игроков: 10 уровней по 5 минут.
    TurboNinePlayer,
}

impl TournamentFormat {
    /// Длительность одного уровня в минутах.
    pub fn level_duration_minutes(self) -> u32 {
        match self {
            TournamentFormat::TwoHourSixPlayer => 15,
            TournamentFormat::OneHourSixPlayer => 10,
            TournamentFormat::TurboNinePlayer => 5,
        }
    }

    /// Общая продолжительность формата (без учёта последнего "бесконечного" уровня).
    pub fn total_minutes(self) -> u32 {
        self.level_duration_minutes() * self.blind_levels().len() as u32
    }

    pub fn blind_levels(self) -> Vec<BlindLevel> {
        let pairs: &[(u64, u64)] = match self {
            TournamentFormat::TwoHourSixPlayer => &[
                (10, 20),
                (15, 30),
                (20, 40),
                (30, 60),
                (40, 80),
                (50, 100),
                (75, 150),
                (100, 200),
            ],
            TournamentFormat::OneHourSixPlayer => &[
                (10, 20),
                (20, 40),
                (30, 60),
                (50, 100),
                (75, 150),
                (100, 200),
            ],
            TournamentFormat::TurboNinePlayer => &[
                (10, 20),
                (15, 30),
                (25, 50),
                (50, 100),
                (75, 150),
                (100, 200),
                (150, 300),
                (200, 400),
                (300, 600),
                (400, 800),
            ],
        };

        pairs
            .iter()
            .zip(1u32..)
            .map(|(&(sb, bb), level)| BlindLevel::new(level, Chips(sb), Chips(bb)))
            .collect()
    }

    /// Новое расписание по формату: курсор на первом уровне, таймер не запущен.
    pub fn schedule(self) -> BlindSchedule {
        BlindSchedule::new(self.blind_levels(), self.level_duration_minutes())
    }
}
