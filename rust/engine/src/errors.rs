use thiserror::Error;

use crate::chips::Chips;
use crate::player::Player;

/// Everything that can go wrong while a hand is played. All of these are
/// caller errors surfaced at the point of the call; the engine never retries
/// and never partially applies an action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("invalid play: {reason}")]
    InvalidPlay { reason: String },

    #[error("{player} has only {available} chips, tried to put in {tried}")]
    InsufficientStack {
        player: Player,
        available: Chips,
        tried: Chips,
    },

    #[error("chip amount cannot go below zero ({have} minus {take})")]
    NegativeChipValue { have: Chips, take: Chips },

    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    #[error("invalid community cards: {reason}")]
    InvalidCommunityCards { reason: &'static str },

    #[error("the river betting round is over, no further plays accepted")]
    PlayOnFinishedHand,
}

impl HandError {
    pub(crate) fn invalid_play(reason: impl Into<String>) -> HandError {
        HandError::InvalidPlay {
            reason: reason.into(),
        }
    }
}
