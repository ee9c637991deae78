//! RngSeed – доменный seed для RNG колоды.
//!
//! Из одного базового seed детерминированно выводится seed для каждой раздачи:
//!     new = H(domain || base || game_id || hand_id || index)
//! Так любую раздачу можно воспроизвести, зная только базовый seed и ID.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

const DOMAIN_TAG: &[u8] = b"POKER_HAND_DECK_V1";

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes }
    }

    /// Вывести дочерний seed для конкретной раздачи.
    pub fn derive(&self, game_id: u64, hand_id: u64, index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_TAG);
        hasher.update(self.bytes);
        hasher.update(game_id.to_le_bytes());
        hasher.update(hand_id.to_le_bytes());
        hasher.update(index.to_le_bytes());

        Self {
            bytes: hasher.finalize().into(),
        }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_depends_on_every_input() {
        let base = RngSeed::from_u64(7);
        let a = base.derive(1, 1, 0);
        assert_eq!(a, base.derive(1, 1, 0));
        assert_ne!(a, base.derive(2, 1, 0));
        assert_ne!(a, base.derive(1, 2, 0));
        assert_ne!(a, base.derive(1, 1, 1));
    }
}
