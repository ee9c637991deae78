//! Инфраструктурный слой вокруг движка раздачи:
//! - генерация ID;
//! - хранилище (трейт + in-memory реализация);
//! - источник карт и RNG;
//! - часы для таймера блайндов.

pub mod card_source;
pub mod clock;
pub mod ids;
pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use card_source::{CardSource, CardSourceError, ShuffledDeckSource};
pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::IdGenerator;
pub use persistence::{InMemoryPokerStorage, PokerStorage, StorageError, StorageResult};
pub use rng::{DeterministicRng, RandomSource, SystemRng};
pub use rng_seed::RngSeed;
