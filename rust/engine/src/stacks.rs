use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chips::Chips;
use crate::errors::HandError;
use crate::play::Play;
use crate::player::Player;

/// Remaining chips per player. Applying a play never mutates in place; it
/// produces the next snapshot or fails without side effects.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Stacks {
    balances: BTreeMap<Player, Chips>,
}

impl Stacks {
    pub fn new<I>(balances: I) -> Stacks
    where
        I: IntoIterator<Item = (Player, Chips)>,
    {
        Stacks {
            balances: balances.into_iter().collect(),
        }
    }

    /// A player the ledger does not know has no chips.
    pub fn of_player(&self, player: Player) -> Chips {
        self.balances.get(&player).copied().unwrap_or(Chips::ZERO)
    }

    pub fn players(&self) -> impl Iterator<Item = Player> + '_ {
        self.balances.keys().copied()
    }

    /// Deducts the play's incremental amount from the actor's balance and
    /// returns the updated ledger. Checks and folds pass through unchanged.
    pub fn apply(&self, play: &Play) -> Result<Stacks, HandError> {
        if !play.increases_chips() || play.amount().is_zero() {
            return Ok(self.clone());
        }
        let player = play.player();
        let available = self.of_player(player);
        if play.amount() > available {
            return Err(HandError::InsufficientStack {
                player,
                available,
                tried: play.amount(),
            });
        }
        let mut next = self.clone();
        next.balances.insert(player, available.minus(play.amount())?);
        Ok(next)
    }
}
