//! Движок жизненного цикла раздачи.
//!
//! Высокоуровневый объект: `HandLifecycle`
//! Основные операции:
//!   - `start_new_hand` – эскалация блайндов, рассадка, новый пустой борд
//!   - `flop` / `turn` / `river` – открытие борда строго по порядку
//!
//! `compute_seat_order` – чистая функция порядка рассадки от баттона.

pub mod errors;
pub mod game_locks;
pub mod lifecycle;
pub mod seat_order;

pub use errors::{HandError, HandResult};
pub use game_locks::GameLocks;
pub use lifecycle::HandLifecycle;
pub use seat_order::{compute_seat_order, SeatOrder};
