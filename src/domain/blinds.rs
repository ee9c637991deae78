// src/domain/blinds.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::Timestamp;

const MILLIS_PER_MINUTE: u64 = 60_000;

/// Один уровень блайндов.
/// Пример: level = 2, SB = 15, BB = 30.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindLevel {
    /// Порядковый номер уровня (1, 2, 3, ...).
    pub level: u32,
    /// Малый блайнд.
    pub small_blind: Chips,
    /// Большой блайнд.
    pub big_blind: Chips,
}

impl BlindLevel {
    pub const fn new(level: u32, small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            level,
            small_blind,
            big_blind,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind.is_zero() {
            return Err(format!("BlindLevel {}: small_blind = 0", self.level));
        }
        if self.big_blind <= self.small_blind {
            return Err(format!(
                "BlindLevel {}: big_blind ({}) <= small_blind ({})",
                self.level, self.big_blind, self.small_blind
            ));
        }
        Ok(())
    }
}

impl core::fmt::Display for BlindLevel {
    /// Формат `10/20`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.small_blind, self.big_blind)
    }
}

/// Расписание блайндов игры: список уровней + курсор + таймер текущего уровня.
///
/// Таймер ленивый: фоновых планировщиков нет, эскалация проверяется только
/// при старте новой раздачи (`ensure_started` + `advance_if_expired`).
/// Все времена – Unix timestamp в миллисекундах (UTC).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindSchedule {
    pub levels: Vec<BlindLevel>,
    /// Индекс текущего уровня в `levels`.
    current: usize,
    /// Длительность одного уровня в минутах.
    pub level_duration_minutes: u32,
    /// Когда истекает текущий уровень. None – таймер ещё не запускали.
    current_expiry: Option<Timestamp>,
}

impl BlindSchedule {
    pub fn new(levels: Vec<BlindLevel>, level_duration_minutes: u32) -> Self {
        Self {
            levels,
            current: 0,
            level_duration_minutes,
            current_expiry: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.levels.is_empty() {
            return Err("BlindSchedule: empty levels".into());
        }
        if self.level_duration_minutes == 0 {
            return Err("BlindSchedule: level_duration_minutes = 0".into());
        }
        if self.current >= self.levels.len() {
            return Err(format!(
                "BlindSchedule: cursor {} out of range ({} levels)",
                self.current,
                self.levels.len()
            ));
        }

        let mut expected_level = 1u32;
        for lvl in &self.levels {
            lvl.validate()?;
            if lvl.level != expected_level {
                return Err(format!(
                    "BlindSchedule: expected level {}, got {}",
                    expected_level, lvl.level
                ));
            }
            expected_level += 1;
        }

        Ok(())
    }

    /// Активный уровень (None только для пустого расписания).
    pub fn current_level(&self) -> Option<&BlindLevel> {
        self.levels.get(self.current)
    }

    pub fn current_expiry(&self) -> Option<Timestamp> {
        self.current_expiry
    }

    /// Ручная установка таймера (админка, восстановление, тесты).
    pub fn set_current_expiry(&mut self, expiry: Option<Timestamp>) {
        self.current_expiry = expiry;
    }

    /// Поставить курсор на уровень с номером `level`. Таймер не трогаем.
    pub fn set_current_level(&mut self, level: u32) -> Result<(), String> {
        let idx = self
            .levels
            .iter()
            .position(|lvl| lvl.level == level)
            .ok_or_else(|| format!("BlindSchedule: no level {level}"))?;
        self.current = idx;
        Ok(())
    }

    pub fn is_last_level(&self) -> bool {
        self.current + 1 >= self.levels.len()
    }

    pub fn level_duration_millis(&self) -> u64 {
        u64::from(self.level_duration_minutes) * MILLIS_PER_MINUTE
    }

    /// Сколько миллисекунд осталось до эскалации (None, если таймер не запущен).
    pub fn time_remaining(&self, now: Timestamp) -> Option<u64> {
        self.current_expiry.map(|expiry| expiry.saturating_sub(now))
    }

    /// Запустить таймер, если он ещё не запущен. Возвращает true, если запустили сейчас.
    pub fn ensure_started(&mut self, now: Timestamp) -> bool {
        if self.current_expiry.is_some() {
            return false;
        }
        self.current_expiry = Some(now.saturating_add(self.level_duration_millis()));
        true
    }

    /// Если таймер истёк (now >= expiry) – перейти на следующий уровень
    /// (на последнем уровне остаёмся) и перезапустить таймер от `now`.
    ///
    /// Возвращает true, если таймер истёк и был перезапущен.
    pub fn advance_if_expired(&mut self, now: Timestamp) -> bool {
        match self.current_expiry {
            Some(expiry) if now >= expiry => {
                if !self.is_last_level() {
                    self.current += 1;
                }
                self.current_expiry = Some(now.saturating_add(self.level_duration_millis()));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_levels() -> BlindSchedule {
        BlindSchedule::new(
            vec![
                BlindLevel::new(1, Chips(10), Chips(20)),
                BlindLevel::new(2, Chips(15), Chips(30)),
            ],
            15,
        )
    }

    #[test]
    fn validate_rejects_gaps_and_zero_duration() {
        let mut s = two_levels();
        assert!(s.validate().is_ok());

        s.levels[1].level = 3;
        assert!(s.validate().is_err());

        let s = BlindSchedule::new(vec![BlindLevel::new(1, Chips(10), Chips(20))], 0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn clamps_at_last_level_but_restarts_timer() {
        let mut s = two_levels();
        s.set_current_level(2).unwrap();
        s.set_current_expiry(Some(1_000));

        assert!(s.advance_if_expired(1_000));
        assert_eq!(s.current_level().unwrap().level, 2);
        assert_eq!(s.current_expiry(), Some(1_000 + 15 * 60_000));
    }
}
