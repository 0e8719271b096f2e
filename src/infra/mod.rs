//! Инфраструктурный слой вокруг движка:
//! RNG-реализации для тасовки колоды.

pub mod rng;

pub use rng::*;
