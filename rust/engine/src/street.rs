use serde::{Deserialize, Serialize};

use crate::community::CommunityCards;
use crate::deck::Deck;
use crate::errors::HandError;

/// The four betting streets, in play order. Each street knows whether
/// reaching it burns a card and how it extends the community cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    pub fn position(self) -> u8 {
        match self {
            Street::Preflop => 0,
            Street::Flop => 1,
            Street::Turn => 2,
            Street::River => 3,
        }
    }

    /// Every street after the pre-flop discards one card before revealing.
    pub fn burns_before_reveal(self) -> bool {
        !matches!(self, Street::Preflop)
    }

    /// The river has no successor.
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Burn (where this street burns) and reveal this street's community
    /// cards. The hand orchestrator calls this exactly once per transition.
    pub fn deal<D>(self, deck: &mut D, current: &CommunityCards) -> Result<CommunityCards, HandError>
    where
        D: Deck + ?Sized,
    {
        if self.burns_before_reveal() {
            deck.burn()?;
        }
        match self {
            Street::Preflop => Ok(CommunityCards::empty()),
            Street::Flop => Ok(CommunityCards::flop([
                deck.draw()?,
                deck.draw()?,
                deck.draw()?,
            ])),
            Street::Turn => current.with_turn(deck.draw()?),
            Street::River => current.with_river(deck.draw()?),
        }
    }
}
