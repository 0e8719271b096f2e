use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

use super::evaluator::evaluate;

/// Итог сравнения двух рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Showdown {
    FirstWins,
    SecondWins,
    Tie,
}

impl Showdown {
    /// Числовой код результата: 0 — первая рука, 1 — вторая, 2 — ничья.
    pub const fn code(self) -> u8 {
        match self {
            Showdown::FirstWins => 0,
            Showdown::SecondWins => 1,
            Showdown::Tie => 2,
        }
    }
}

impl From<Ordering> for Showdown {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Showdown::FirstWins,
            Ordering::Less => Showdown::SecondWins,
            Ordering::Equal => Showdown::Tie,
        }
    }
}

/// Сравнить две руки: сначала категория, при равенстве — числовой тай-брейк.
pub fn compare_hands(first: &[Card], second: &[Card]) -> Showdown {
    let r1 = evaluate(first);
    let r2 = evaluate(second);
    let result = Showdown::from(r1.cmp(&r2));
    log::debug!("сравнение: {:?} vs {:?} -> {:?}", r1, r2, result);
    result
}
