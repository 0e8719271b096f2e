//! Пятикарточный дро-покер: колода, классификация и сравнение рук.
//!
//! Слои:
//!   - `domain` – карты, колода, рука;
//!   - `eval` – категория руки и сравнение двух рук;
//!   - `engine` – раздача, обмен, партия игрок против компьютера;
//!   - `infra` – RNG;
//!   - `api` – DTO и формат вывода для консольной оболочки.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
