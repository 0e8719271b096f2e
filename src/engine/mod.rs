//! Движок партии: колода и раздача, обмен карт, вскрытие.
//!
//! Высокоуровневый объект: `DrawGame`
//! Основные операции:
//!   - `build_deck` / `deal_cards` / `replace_card` – работа с колодой и рукой
//!   - `DrawGame::draw_phase` – обмен карт игрока
//!   - `DrawGame::showdown` – сравнение рук игрока и компьютера

pub mod config;
pub mod dealing;
pub mod errors;
pub mod game_loop;

pub use config::GameConfig;
pub use dealing::{build_deck, deal_cards, replace_card};
pub use errors::{EngineError, InvalidArgument};
pub use game_loop::{DrawDecider, DrawGame, DrawPhase, Swap};

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
