//! Внешний слой для оболочки: DTO партии и текстовый формат консоли.

pub mod dto;

pub use dto::*;
