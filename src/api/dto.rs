use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::top_five;
use crate::engine::{DrawGame, Swap};
use crate::eval::{classify, HandCategory, Showdown};

/// DTO руки: пять старших карт по возрастанию + категория.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandView {
    pub cards: Vec<Card>,
    pub category: HandCategory,
}

impl HandView {
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: top_five(cards),
            category: classify(cards),
        }
    }

    /// Строка для консоли: `{prefix}[('10', 'C'), ...] - royal flush\n\n`.
    pub fn render(&self, prefix: &str) -> String {
        format!(
            "{prefix}{} - {}\n\n",
            render_card_list(&self.cards),
            self.category
        )
    }
}

/// DTO завершённой партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameReport {
    pub user: HandView,
    pub computer: HandView,
    pub swaps: Vec<Swap>,
    pub outcome: Showdown,
    /// Код результата (0 — игрок, 1 — компьютер, 2 — ничья).
    pub outcome_code: u8,
}

impl GameReport {
    pub fn from_game(game: &DrawGame) -> Self {
        let outcome = game.showdown();
        Self {
            user: HandView::from_cards(game.user.as_slice()),
            computer: HandView::from_cards(game.computer.as_slice()),
            swaps: game.swaps.clone(),
            outcome,
            outcome_code: outcome.code(),
        }
    }
}

/// Список карт в виде `[('2', 'C'), ('A', 'H')]`.
pub fn render_card_list(cards: &[Card]) -> String {
    let items: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Отсортированная рука с категорией, в формате консоли.
pub fn render_hand(cards: &[Card], prefix: &str) -> String {
    HandView::from_cards(cards).render(prefix)
}

/// Итоговое сообщение партии (первая рука — игрок, вторая — компьютер).
pub fn outcome_message(outcome: Showdown) -> &'static str {
    match outcome {
        Showdown::FirstWins => "User wins!",
        Showdown::SecondWins => "Computer wins!",
        Showdown::Tie => "Draw!",
    }
}
