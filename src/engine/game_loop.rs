use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::engine::config::GameConfig;
use crate::engine::dealing::{build_deck, deal_cards, replace_card};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::eval::{compare_hands, Showdown};

/// Решение по каждой карте на обмене: менять или оставить.
///
/// Ошибка решателя (например, сбой чтения ввода) прерывает обмен целиком.
pub trait DrawDecider {
    fn should_replace(&mut self, card: Card) -> Result<bool, EngineError>;
}

impl<F> DrawDecider for F
where
    F: FnMut(Card) -> bool,
{
    fn should_replace(&mut self, card: Card) -> Result<bool, EngineError> {
        Ok(self(card))
    }
}

/// Фаза партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawPhase {
    /// Карты сданы, обмен ещё не проводился.
    Dealt,
    /// Обмен проведён, остаётся только вскрытие.
    Drawn,
}

/// Одна замена на обмене.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Swap {
    pub discarded: Card,
    pub received: Card,
}

/// Партия в пятикарточный дро: игрок против компьютера, один обмен.
#[derive(Clone, Debug)]
pub struct DrawGame {
    pub deck: Deck,
    pub user: Hand,
    pub computer: Hand,
    pub swaps: Vec<Swap>,
    pub phase: DrawPhase,
}

impl DrawGame {
    /// Новая партия: свежая колода, сначала сдаётся рука компьютера, затем игрока.
    pub fn new<R: RandomSource>(config: &GameConfig, rng: &mut R) -> Result<Self, EngineError> {
        config.validate()?;

        let mut deck = build_deck(rng);
        let computer = Hand::new(deal_cards(config.hand_size, &mut deck)?);
        let user = Hand::new(deal_cards(config.hand_size, &mut deck)?);

        log::info!(
            "новая партия: по {} карт, в колоде осталось {}",
            config.hand_size,
            deck.len()
        );

        Ok(Self::from_parts(deck, user, computer))
    }

    /// Партия из заранее известных карт (реплей, тесты).
    pub fn from_parts(deck: Deck, user: Hand, computer: Hand) -> Self {
        Self {
            deck,
            user,
            computer,
            swaps: Vec::new(),
            phase: DrawPhase::Dealt,
        }
    }

    /// Обмен: по каждой карте руки игрока (в порядке возрастания ранга)
    /// спрашиваем `decider`; заменённая карта встаёт на место старой.
    ///
    /// Полученные на обмене карты повторно не предлагаются.
    /// Обмен атомарный: при любой ошибке рука, колода и фаза не меняются.
    pub fn draw_phase<D: DrawDecider>(
        &mut self,
        decider: &mut D,
    ) -> Result<&[Swap], EngineError> {
        if self.phase == DrawPhase::Drawn {
            return Err(EngineError::DrawPhaseFinished);
        }

        let mut discards = Vec::new();
        for card in self.user.sorted() {
            if decider.should_replace(card)? {
                discards.push(card);
            }
        }

        // Меняем копии, состояние партии обновляем только после успеха.
        let mut deck = self.deck.clone();
        let mut user = self.user.clone();
        let mut swaps = Vec::with_capacity(discards.len());
        if !discards.is_empty() {
            let received = deal_cards(discards.len(), &mut deck)?;
            for (discarded, received) in discards.into_iter().zip(received) {
                replace_card(&mut user, discarded, received)?;
                swaps.push(Swap { discarded, received });
            }
        }

        self.deck = deck;
        self.user = user;
        self.swaps = swaps;
        self.phase = DrawPhase::Drawn;

        log::info!("обмен завершён: заменено {} карт", self.swaps.len());
        Ok(&self.swaps)
    }

    /// Вскрытие: рука игрока — первая, рука компьютера — вторая.
    pub fn showdown(&self) -> Showdown {
        let result = compare_hands(self.user.as_slice(), self.computer.as_slice());
        log::info!("вскрытие: {:?}", result);
        result
    }
}
