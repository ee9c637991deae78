//! Жизненный цикл одной покерной раздачи внутри игры / турнира:
//! - поэтапная раздача борда (флоп, тёрн, ривер) со строгим порядком;
//! - эскалация уровней блайндов по таймеру (ленивая, при старте раздачи);
//! - порядок рассадки и первый к ходу для новой раздачи.
//!
//! Хранилище, колода и часы – внешние коллабораторы (`infra`).

pub mod domain;
pub mod engine;
pub mod infra;

pub use engine::{HandError, HandLifecycle, HandResult};
