use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::HandError;

/// The shared cards revealed so far. Streets accumulate: a turn card cannot
/// exist without a flop, nor a river card without a turn.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CommunityCards {
    flop: Option<[Card; 3]>,
    turn: Option<Card>,
    river: Option<Card>,
}

impl CommunityCards {
    pub fn empty() -> CommunityCards {
        CommunityCards::default()
    }

    pub fn flop(cards: [Card; 3]) -> CommunityCards {
        CommunityCards {
            flop: Some(cards),
            turn: None,
            river: None,
        }
    }

    pub fn with_turn(&self, card: Card) -> Result<CommunityCards, HandError> {
        if self.flop.is_none() {
            return Err(HandError::InvalidCommunityCards {
                reason: "turn requires a flop",
            });
        }
        Ok(CommunityCards {
            flop: self.flop,
            turn: Some(card),
            river: None,
        })
    }

    pub fn with_river(&self, card: Card) -> Result<CommunityCards, HandError> {
        if self.turn.is_none() {
            return Err(HandError::InvalidCommunityCards {
                reason: "river requires a turn",
            });
        }
        Ok(CommunityCards {
            flop: self.flop,
            turn: self.turn,
            river: Some(card),
        })
    }

    pub fn flop_cards(&self) -> Option<[Card; 3]> {
        self.flop
    }

    pub fn turn_card(&self) -> Option<Card> {
        self.turn
    }

    pub fn river_card(&self) -> Option<Card> {
        self.river
    }

    /// Every card on the table, in reveal order.
    pub fn cards_dealt(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(5);
        if let Some(flop) = self.flop {
            cards.extend(flop);
        }
        cards.extend(self.turn);
        cards.extend(self.river);
        cards
    }
}
