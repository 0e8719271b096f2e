//! Модуль оценки силы покерных рук (пятикарточный дро).
//!
//! Основные функции:
//!   `classify(cards) -> HandCategory`
//!   `compare_hands(first, second) -> Showdown`

pub mod comparator;
pub mod evaluator;
pub mod hand_rank;

pub use comparator::{compare_hands, Showdown};
pub use evaluator::{classify, evaluate, tiebreak_score};
pub use hand_rank::{HandCategory, HandRank};
