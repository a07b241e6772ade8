use crate::model::card::{Card, CardId, CardSide};
use crate::model::catalog::Catalog;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::str::FromStr;

/// The deck sizes the settings menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckSize {
    Eighteen,
    TwentyFour,
    ThirtyTwo,
}

impl DeckSize {
    pub const ALL: [DeckSize; 3] = [DeckSize::Eighteen, DeckSize::TwentyFour, DeckSize::ThirtyTwo];

    pub const fn card_count(self) -> usize {
        match self {
            DeckSize::Eighteen => 18,
            DeckSize::TwentyFour => 24,
            DeckSize::ThirtyTwo => 32,
        }
    }

    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    pub const fn from_card_count(count: usize) -> Option<Self> {
        match count {
            18 => Some(DeckSize::Eighteen),
            24 => Some(DeckSize::TwentyFour),
            32 => Some(DeckSize::ThirtyTwo),
            _ => None,
        }
    }
}

impl fmt::Display for DeckSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.card_count())
    }
}

impl FromStr for DeckSize {
    type Err = ParseDeckSizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(DeckSize::from_card_count)
            .ok_or(ParseDeckSizeError)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDeckSizeError;

impl fmt::Display for ParseDeckSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("deck size must be 18, 24 or 32")
    }
}

impl std::error::Error for ParseDeckSizeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    InsufficientCatalog { required: usize, available: usize },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::InsufficientCatalog {
                required,
                available,
            } => write!(
                f,
                "catalog has {available} definitions but the deck needs {required}"
            ),
        }
    }
}

impl std::error::Error for DeckError {}

/// Ordered sequence of in-play cards. Positions never change once dealt.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Samples `pairs` distinct definitions from the catalog, makes an
    /// original and a copy of each, and shuffles the combined sequence.
    pub fn deal<R: rand::Rng + ?Sized>(
        catalog: &Catalog,
        pairs: usize,
        rng: &mut R,
    ) -> Result<Self, DeckError> {
        if catalog.len() < pairs {
            return Err(DeckError::InsufficientCatalog {
                required: pairs,
                available: catalog.len(),
            });
        }

        let mut picks: Vec<usize> = (0..catalog.len()).collect();
        picks.shuffle(rng);
        picks.truncate(pairs);

        let mut cards = Vec::with_capacity(pairs * 2);
        for index in picks {
            let definition = &catalog.definitions()[index];
            for side in [CardSide::Original, CardSide::Copy] {
                cards.push(Card::new(
                    CardId::new(definition.pair_id, side),
                    definition.display_name.clone(),
                ));
            }
        }
        cards.shuffle(rng);

        Ok(Self { cards })
    }

    pub fn deal_with_seed(catalog: &Catalog, pairs: usize, seed: u64) -> Result<Self, DeckError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::deal(catalog, pairs, &mut rng)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub fn claimed_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    pub(crate) fn set_flipped(&mut self, id: CardId, flipped: bool) {
        if let Some(card) = self.cards.iter_mut().find(|card| card.id() == id) {
            card.set_flipped(flipped);
        }
    }

    pub(crate) fn mark_matched(&mut self, id: CardId) {
        if let Some(card) = self.cards.iter_mut().find(|card| card.id() == id) {
            card.mark_matched();
        }
    }
}
