use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::{top_five, HAND_SIZE};

use super::hand_rank::{HandCategory, HandRank};

/// Ранги роял-флеша по возрастанию.
const ROYAL_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Главная функция: полная оценка руки (категория + тай-брейк).
///
/// Ожидается минимум 5 карт; если карт больше, оцениваются 5 старших.
pub fn evaluate(cards: &[Card]) -> HandRank {
    let five = five_sorted(cards);
    let category = classify_sorted(&five);
    let tiebreak = weighted_sum(&five);
    log::debug!("оценка руки: {} (tiebreak={})", category, tiebreak);
    HandRank::new(category, tiebreak)
}

/// Категория руки. Порядок мастей/карт на входе не важен.
pub fn classify(cards: &[Card]) -> HandCategory {
    classify_sorted(&five_sorted(cards))
}

/// Числовой тай-брейк: пять старших карт по возрастанию как "цифры"
/// десятичного числа, старшая карта — самый старший разряд.
///
/// Это не полноценные правила кикеров: пары внутри руки отдельно не учитываются.
pub fn tiebreak_score(cards: &[Card]) -> u32 {
    weighted_sum(&five_sorted(cards))
}

fn five_sorted(cards: &[Card]) -> [Card; 5] {
    assert!(
        cards.len() >= HAND_SIZE,
        "оценка руки ожидает минимум 5 карт, получено {}",
        cards.len()
    );

    let top = top_five(cards);
    [top[0], top[1], top[2], top[3], top[4]]
}

fn weighted_sum(five: &[Card; 5]) -> u32 {
    five.iter()
        .enumerate()
        .map(|(i, card)| u32::from(card.rank.power()) * 10u32.pow(i as u32))
        .sum()
}

/// Классификация 5 карт, уже отсортированных по возрастанию ранга.
///
/// Проверки идут строго сверху вниз, первая сработавшая побеждает:
/// шаблоны пересекаются (фулл-хаус содержит и сет, и пару).
fn classify_sorted(five: &[Card; 5]) -> HandCategory {
    let [r1, r2, r3, r4, r5] = five.map(|c| c.rank);
    let ranks = [r1, r2, r3, r4, r5];

    if is_single_suit(five) {
        if ranks == ROYAL_RANKS {
            return HandCategory::RoyalFlush;
        }
        if is_consecutive(&ranks) {
            return HandCategory::StraightFlush;
        }
        return HandCategory::Flush;
    }

    // Каре: пятая карта может оказаться и снизу, и сверху.
    if (r1 == r2 && r2 == r3 && r3 == r4) || (r2 == r3 && r3 == r4 && r4 == r5) {
        return HandCategory::FourOfAKind;
    }

    // Full house: 3+2 или 2+3.
    if (r1 == r2 && r2 == r3 && r4 == r5) || (r1 == r2 && r3 == r4 && r4 == r5) {
        return HandCategory::FullHouse;
    }

    if is_consecutive(&ranks) {
        return HandCategory::Straight;
    }

    if (r1 == r2 && r2 == r3) || (r2 == r3 && r3 == r4) || (r3 == r4 && r4 == r5) {
        return HandCategory::ThreeOfAKind;
    }

    if (r1 == r2 && r3 == r4) || (r2 == r3 && r4 == r5) || (r1 == r2 && r4 == r5) {
        return HandCategory::TwoPairs;
    }

    if r1 == r2 || r2 == r3 || r3 == r4 || r4 == r5 {
        return HandCategory::Pair;
    }

    HandCategory::HighCard
}

fn is_single_suit(five: &[Card; 5]) -> bool {
    let first: Suit = five[0].suit;
    five.iter().all(|c| c.suit == first)
}

/// Каждый следующий ранг ровно на 1 старше предыдущего.
/// Туз всегда старший: A-2-3-4-5 стритом не считается.
fn is_consecutive(ranks: &[Rank; 5]) -> bool {
    ranks
        .windows(2)
        .all(|w| w[1].power() == w[0].power() + 1)
}
