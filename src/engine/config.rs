use serde::{Deserialize, Serialize};

use crate::domain::hand::HAND_SIZE;

use super::errors::InvalidArgument;

/// Конфиг одной партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Сколько карт сдаётся каждому (минимум 5; в оценке участвуют 5 старших).
    pub hand_size: usize,
    /// Seed для воспроизводимой тасовки. None — системный RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if self.hand_size < HAND_SIZE {
            return Err(InvalidArgument::HandTooSmall {
                hand_size: self.hand_size,
            });
        }
        Ok(())
    }
}
