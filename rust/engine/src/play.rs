use core::fmt;

use serde::{Deserialize, Serialize};

use crate::chips::Chips;
use crate::player::Player;

/// What a play did, as recorded in a betting round's log.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayKind {
    Check,
    Bet,
    Call,
    Raise,
    Fold,
}

/// A betting action a caller asks the engine to perform. `Bet` and `RaiseTo`
/// carry target amounts; `Call` and `AllIn` derive theirs from the round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Check,
    Bet(Chips),
    Call,
    RaiseTo(Chips),
    Fold,
    AllIn,
}

/// One action in a betting round: who played, what they did, the total they
/// have committed to this round afterwards, and the chips newly added.
/// Created once per action and appended to the round's log, never mutated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    player: Player,
    kind: PlayKind,
    total: Chips,
    amount: Chips,
}

impl Play {
    pub fn check(player: Player) -> Play {
        Play {
            player,
            kind: PlayKind::Check,
            total: Chips::ZERO,
            amount: Chips::ZERO,
        }
    }

    pub fn fold(player: Player) -> Play {
        Play {
            player,
            kind: PlayKind::Fold,
            total: Chips::ZERO,
            amount: Chips::ZERO,
        }
    }

    pub fn bet(player: Player, amount: Chips) -> Play {
        Play {
            player,
            kind: PlayKind::Bet,
            total: amount,
            amount,
        }
    }

    pub fn call(player: Player, total: Chips, amount: Chips) -> Play {
        Play {
            player,
            kind: PlayKind::Call,
            total,
            amount,
        }
    }

    pub fn raise_to(player: Player, total: Chips, amount: Chips) -> Play {
        Play {
            player,
            kind: PlayKind::Raise,
            total,
            amount,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn kind(&self) -> PlayKind {
        self.kind
    }

    /// Total chips this player has committed to the round after this play.
    pub fn total(&self) -> Chips {
        self.total
    }

    /// Chips newly added to the pot by this play alone.
    pub fn amount(&self) -> Chips {
        self.amount
    }

    pub fn played_by(&self, player: Player) -> bool {
        self.player == player
    }

    pub fn is_check(&self) -> bool {
        self.kind == PlayKind::Check
    }

    pub fn is_fold(&self) -> bool {
        self.kind == PlayKind::Fold
    }

    /// Bets, calls and raises move chips; checks and folds do not.
    pub fn increases_chips(&self) -> bool {
        matches!(self.kind, PlayKind::Bet | PlayKind::Call | PlayKind::Raise)
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PlayKind::Check => write!(f, "CHECK by {}", self.player),
            PlayKind::Fold => write!(f, "FOLD by {}", self.player),
            PlayKind::Bet => write!(f, "BET of {} by {}", self.total, self.player),
            PlayKind::Call => write!(f, "CALL to {} by {}", self.total, self.player),
            PlayKind::Raise => write!(f, "RAISE to {} by {}", self.total, self.player),
        }
    }
}
