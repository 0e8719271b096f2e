//! Колода и раздача: build_deck, deal_cards, replace_card.

use std::collections::HashSet;

use draw_poker::domain::{Card, Deck, Hand, Rank, Suit};
use draw_poker::engine::{build_deck, deal_cards, replace_card, EngineError, InvalidArgument};
use draw_poker::infra::DeterministicRng;

use Rank::*;
use Suit::*;

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn two_card_deck() -> Deck {
    Deck::from_cards(vec![c(Two, Clubs), c(Ace, Hearts)])
}

//
// ---------- build_deck ----------
//

#[test]
fn build_deck_has_52_distinct_cards() {
    let mut rng = DeterministicRng::from_seed(1);
    let deck = build_deck(&mut rng);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    let ranks: HashSet<Rank> = deck.cards.iter().map(|c| c.rank).collect();
    let suits: HashSet<Suit> = deck.cards.iter().map(|c| c.suit).collect();

    assert_eq!(deck.len(), 52);
    assert_eq!(unique.len(), 52);
    assert_eq!(ranks.len(), 13);
    assert_eq!(suits.len(), 4);
}

#[test]
fn build_deck_is_shuffled_and_reproducible() {
    let a = build_deck(&mut DeterministicRng::from_seed(42));
    let b = build_deck(&mut DeterministicRng::from_seed(42));
    let other = build_deck(&mut DeterministicRng::from_seed(43));

    assert_eq!(a, b, "один seed — одна тасовка");
    assert_ne!(a, other);
    assert_ne!(a, Deck::standard_52());
}

//
// ---------- deal_cards ----------
//

#[test]
fn deal_fewer_than_deck() {
    let mut deck = two_card_deck();
    let cards = deal_cards(1, &mut deck).unwrap();

    assert_eq!(cards, vec![c(Two, Clubs)]);
    assert_eq!(deck.cards, vec![c(Ace, Hearts)]);
}

#[test]
fn deal_whole_deck() {
    let mut deck = two_card_deck();
    let cards = deal_cards(2, &mut deck).unwrap();

    assert_eq!(cards, vec![c(Two, Clubs), c(Ace, Hearts)]);
    assert!(deck.is_empty());
}

#[test]
fn deal_keeps_order_and_total() {
    let mut deck = build_deck(&mut DeterministicRng::from_seed(7));
    let before = deck.cards.clone();

    let mut dealt = Vec::new();
    for n in [5, 5, 1, 1, 10, 30] {
        let len_before = deck.len();
        let cards = deal_cards(n, &mut deck).unwrap();
        assert_eq!(cards.len(), n);
        assert_eq!(cards.len() + deck.len(), len_before);
        dealt.extend(cards);
    }

    assert!(deck.is_empty());
    assert_eq!(dealt, before);
}

#[test]
fn deal_zero_is_invalid() {
    let mut deck = two_card_deck();
    let err = deal_cards(0, &mut deck).unwrap_err();

    assert_eq!(
        err,
        EngineError::InvalidArgument(InvalidArgument::NonPositiveCount)
    );
    assert_eq!(err.to_string(), "n must be > 0!");
    assert_eq!(deck, two_card_deck(), "колода не должна меняться при ошибке");
}

#[test]
fn deal_more_than_deck_is_invalid() {
    let mut deck = two_card_deck();
    let err = deal_cards(10, &mut deck).unwrap_err();

    assert_eq!(
        err,
        EngineError::InvalidArgument(InvalidArgument::CountExceedsDeck {
            requested: 10,
            available: 2,
        })
    );
    assert_eq!(err.to_string(), "n must be <= len(deck)!");
    assert_eq!(deck, two_card_deck());
}

#[test]
fn deal_from_empty_deck_is_invalid() {
    let mut deck = Deck::from_cards(Vec::new());
    let err = deal_cards(1, &mut deck).unwrap_err();

    assert_eq!(err.to_string(), "n must be <= len(deck)!");
    assert!(matches!(
        err,
        EngineError::InvalidArgument(InvalidArgument::CountExceedsDeck { available: 0, .. })
    ));
}

//
// ---------- replace_card ----------
//

#[test]
fn replace_card_in_place() {
    let mut hand = Hand::new(vec![
        c(Ten, Clubs),
        c(Jack, Clubs),
        c(Queen, Clubs),
        c(King, Clubs),
        c(Ace, Clubs),
    ]);

    replace_card(&mut hand, c(Queen, Clubs), c(King, Hearts)).unwrap();

    assert_eq!(
        hand.cards,
        vec![
            c(Ten, Clubs),
            c(Jack, Clubs),
            c(King, Hearts),
            c(King, Clubs),
            c(Ace, Clubs),
        ]
    );
}

#[test]
fn replace_card_only_first_occurrence() {
    let mut hand = Hand::new(vec![c(Two, Clubs), c(Five, Hearts), c(Two, Clubs)]);

    replace_card(&mut hand, c(Two, Clubs), c(Nine, Spades)).unwrap();

    assert_eq!(
        hand.cards,
        vec![c(Nine, Spades), c(Five, Hearts), c(Two, Clubs)]
    );
}

#[test]
fn replace_missing_card_is_not_found() {
    let mut hand = Hand::new(vec![c(Two, Clubs), c(Five, Hearts)]);
    let before = hand.clone();

    let err = replace_card(&mut hand, c(Ace, Spades), c(King, Hearts)).unwrap_err();

    assert_eq!(err, EngineError::NotFound(c(Ace, Spades)));
    assert_eq!(hand, before);
}
