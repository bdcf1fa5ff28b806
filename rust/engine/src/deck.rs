use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, parse_cards, Card};
use crate::errors::HandError;

/// Source of cards for a hand. The engine only ever peeks at, pops, or burns
/// the top card, so anything that can do those three things can deal.
pub trait Deck {
    fn is_empty(&self) -> bool;

    /// The card the next [`Deck::draw`] would return, if any.
    fn top_card(&self) -> Option<Card>;

    fn pop_top_card(&mut self);

    fn remaining(&self) -> usize;

    fn draw(&mut self) -> Result<Card, HandError> {
        let card = self.top_card().ok_or(HandError::EmptyDeck)?;
        self.pop_top_card();
        Ok(card)
    }

    /// Discard the top card face down.
    fn burn(&mut self) -> Result<(), HandError> {
        self.draw().map(|_| ())
    }
}

/// Full 52-card deck shuffled with a seeded ChaCha20 RNG.
/// The same seed always produces the same card order.
#[derive(Debug, Clone)]
pub struct ShuffledDeck {
    cards: Vec<Card>,
    position: usize,
}

impl ShuffledDeck {
    pub fn new_with_seed(seed: u64) -> ShuffledDeck {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        ShuffledDeck { cards, position: 0 }
    }
}

impl Deck for ShuffledDeck {
    fn is_empty(&self) -> bool {
        self.position >= self.cards.len()
    }

    fn top_card(&self) -> Option<Card> {
        self.cards.get(self.position).copied()
    }

    fn pop_top_card(&mut self) {
        if !self.is_empty() {
            self.position += 1;
        }
    }

    fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Deck with a fixed, caller-supplied card order. Lets tests know exactly
/// which card comes off the top next.
#[derive(Debug, Clone)]
pub struct StackedDeck {
    cards: Vec<Card>,
    position: usize,
}

impl StackedDeck {
    pub fn new(cards: Vec<Card>) -> StackedDeck {
        StackedDeck { cards, position: 0 }
    }

    /// Builds the deck from card text, top card first: `"As Kd 7c ..."`.
    pub fn parse(s: &str) -> Result<StackedDeck, String> {
        parse_cards(s).map(StackedDeck::new)
    }
}

impl Deck for StackedDeck {
    fn is_empty(&self) -> bool {
        self.position >= self.cards.len()
    }

    fn top_card(&self) -> Option<Card> {
        self.cards.get(self.position).copied()
    }

    fn pop_top_card(&mut self) {
        if !self.is_empty() {
            self.position += 1;
        }
    }

    fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
