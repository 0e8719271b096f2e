use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Категория покерной руки по силе.
/// Дискриминант = сила категории (high card = 0 ... royal flush = 9).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPairs = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    /// Все категории от слабой к сильной.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPairs,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// Название категории для консоли (строчными, по-английски).
    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPairs => "two pairs",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
            HandCategory::RoyalFlush => "royal flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HandCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandCategory::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("Неизвестная категория руки: {s}"))
    }
}

/// Ранг руки: категория + числовой тай-брейк по рангам карт.
///
/// Порядок полей важен: derive(Ord) сравнивает сначала категорию,
/// затем тай-брейк.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank {
    pub category: HandCategory,
    /// Сумма `p_i * 10^i` по пяти старшим картам, отсортированным по возрастанию.
    pub tiebreak: u32,
}

impl HandRank {
    pub fn new(category: HandCategory, tiebreak: u32) -> Self {
        Self { category, tiebreak }
    }
}
