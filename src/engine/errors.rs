use crate::domain::Card;

use thiserror::Error;

/// Неверные аргументы операций раздачи.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("n must be > 0!")]
    NonPositiveCount,

    #[error("n must be <= len(deck)!")]
    CountExceedsDeck { requested: usize, available: usize },

    #[error("Размер руки {hand_size} меньше 5 карт")]
    HandTooSmall { hand_size: usize },
}

/// Ошибки движка.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Карта {0} не найдена в руке")]
    NotFound(Card),

    #[error("Обмен карт уже проведён")]
    DrawPhaseFinished,

    #[error("Ошибка ввода при обмене: {0}")]
    Input(String),
}
