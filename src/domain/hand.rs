use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Сколько карт участвует в оценке руки.
pub const HAND_SIZE: usize = 5;

/// Рука игрока: карты в порядке получения (НЕ отсортированы по рангу).
/// Замена карты на обмене идёт по позиции, без пересортировки.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Копия руки, отсортированная по рангу (по возрастанию).
    pub fn sorted(&self) -> Vec<Card> {
        sort_cards(&self.cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand::new(cards)
    }
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

/// Стабильная сортировка по силе ранга, по возрастанию.
/// Масть на порядок не влияет: карты одного ранга остаются в исходном порядке.
pub fn sort_cards(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|card| card.rank.power());
    sorted
}

/// Пять старших карт (после стабильной сортировки), по возрастанию.
/// Если карт меньше пяти — возвращаются все.
pub fn top_five(cards: &[Card]) -> Vec<Card> {
    let sorted = sort_cards(cards);
    let skip = sorted.len().saturating_sub(HAND_SIZE);
    sorted[skip..].to_vec()
}
