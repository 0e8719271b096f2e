//! Колода и раздача: сборка перемешанной колоды, снятие карт сверху,
//! замена карты в руке.

use crate::domain::{Card, Deck, Hand};

use super::errors::{EngineError, InvalidArgument};
use super::RandomSource;

/// Свежая колода: 52 карты в каноническом порядке, затем shuffle через переданный RNG.
pub fn build_deck<R: RandomSource>(rng: &mut R) -> Deck {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    log::debug!("колода собрана и перемешана: {} карт", deck.len());
    deck
}

/// Снять `n` карт с верха колоды.
///
/// Колода изменяется только при успехе: при ошибке остаётся как была.
pub fn deal_cards(n: usize, deck: &mut Deck) -> Result<Vec<Card>, EngineError> {
    if n == 0 {
        return Err(InvalidArgument::NonPositiveCount.into());
    }
    if n > deck.len() {
        return Err(InvalidArgument::CountExceedsDeck {
            requested: n,
            available: deck.len(),
        }
        .into());
    }

    let dealt: Vec<Card> = deck.cards.drain(..n).collect();
    log::debug!("сдано {} карт, в колоде осталось {}", dealt.len(), deck.len());
    Ok(dealt)
}

/// Заменить первое вхождение `old` в руке на `new` (на той же позиции).
pub fn replace_card(hand: &mut Hand, old: Card, new: Card) -> Result<(), EngineError> {
    let slot = hand
        .cards
        .iter_mut()
        .find(|c| **c == old)
        .ok_or(EngineError::NotFound(old))?;
    *slot = new;
    log::debug!("замена {old} -> {new}");
    Ok(())
}
