//! Доменная модель: карты, игроки, игры, блайнды, борд, раздачи.

pub mod blinds;
pub mod board;
pub mod card;
pub mod chips;
pub mod deck;
pub mod formats;
pub mod game;
pub mod hand;
pub mod history;
pub mod player;

// Идентификаторы назначает хранилище при первом сохранении.
pub type GameId = u64;
pub type PlayerId = u64;
pub type HandId = u64;
pub type BoardId = u64;

/// Unix timestamp в миллисекундах (UTC).
pub type Timestamp = u64;

pub use blinds::*;
pub use board::*;
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use formats::*;
pub use game::*;
pub use hand::*;
pub use history::*;
pub use player::*;
