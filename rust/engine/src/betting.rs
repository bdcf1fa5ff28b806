use std::collections::BTreeSet;

use crate::chips::Chips;
use crate::errors::HandError;
use crate::play::{Action, Play};
use crate::player::Player;
use crate::stacks::Stacks;

/// One street's betting: a fixed seating order, an append-only play log, and
/// the stacks snapshot reflecting every play so far. Every action produces a
/// new round value; nothing here is mutated in place, so any snapshot can be
/// kept, branched from, or queried repeatedly with identical results.
#[derive(Debug, Clone)]
pub struct BettingRound {
    players: Vec<Player>,
    plays: Vec<Play>,
    stacks: Stacks,
    turn: Player,
}

impl BettingRound {
    /// Opens a round with action on the first seat.
    pub fn new(stacks: Stacks, players: &[Player]) -> BettingRound {
        assert!(!players.is_empty(), "a betting round needs players");
        BettingRound {
            players: players.to_vec(),
            plays: Vec::new(),
            stacks,
            turn: players[0],
        }
    }

    /// Dispatches a requested action to the matching operation.
    pub fn act(&self, player: Player, action: Action) -> Result<BettingRound, HandError> {
        match action {
            Action::Check => self.check(player),
            Action::Bet(amount) => self.bet(player, amount),
            Action::Call => self.call(player),
            Action::RaiseTo(target) => self.raise_to(player, target),
            Action::Fold => self.fold(player),
            Action::AllIn => self.all_in(player),
        }
    }

    /// Legal only while nobody has put chips in yet.
    pub fn check(&self, player: Player) -> Result<BettingRound, HandError> {
        if let Some(outstanding) = self.last_chip_increasing_play() {
            return Err(HandError::invalid_play(format!(
                "cannot CHECK, need to CALL/RAISE/FOLD to {outstanding}"
            )));
        }
        self.next_state(Play::check(player))
    }

    /// Opens the betting. Legal only while nobody has put chips in yet.
    pub fn bet(&self, player: Player, amount: Chips) -> Result<BettingRound, HandError> {
        if let Some(outstanding) = self.last_chip_increasing_play() {
            return Err(HandError::invalid_play(format!(
                "cannot BET, need to CALL/RAISE/FOLD to {outstanding}"
            )));
        }
        self.next_state(Play::bet(player, amount))
    }

    /// Matches the outstanding total, adding only the difference to what the
    /// caller has already committed this round.
    pub fn call(&self, player: Player) -> Result<BettingRound, HandError> {
        let target = self
            .last_chip_increasing_play()
            .ok_or_else(|| HandError::invalid_play("cannot CALL, no BET to CALL/RAISE/FOLD on"))?
            .total();
        let amount = target.minus(self.contributed_by(player))?;
        self.next_state(Play::call(player, target, amount))
    }

    /// Raises the outstanding total to `target`. The minimum raise is twice
    /// the total of the play being raised over.
    pub fn raise_to(&self, player: Player, target: Chips) -> Result<BettingRound, HandError> {
        let outstanding = self
            .last_chip_increasing_play()
            .ok_or_else(|| HandError::invalid_play("cannot RAISE, no BET to CALL/RAISE/FOLD on"))?;
        let minimum = outstanding.total().min_raise();
        if target < minimum {
            return Err(HandError::invalid_play(format!(
                "cannot RAISE to {target}, minimum raise over {} is {minimum}",
                outstanding.total()
            )));
        }
        self.raise_unchecked(player, target)
    }

    /// Always legal. Removes the player from the turn rotation for the rest
    /// of this round.
    pub fn fold(&self, player: Player) -> Result<BettingRound, HandError> {
        self.next_state(Play::fold(player))
    }

    /// Pushes the caller's whole remaining stack: a bet when nothing is
    /// outstanding, otherwise a raise. A full stack is always a legal raise
    /// target, so the minimum-raise rule is not applied here.
    pub fn all_in(&self, player: Player) -> Result<BettingRound, HandError> {
        let remaining = self.remaining_chips(player);
        if self.last_chip_increasing_play().is_none() {
            self.bet(player, remaining)
        } else {
            self.raise_unchecked(player, remaining)
        }
    }

    fn raise_unchecked(&self, player: Player, target: Chips) -> Result<BettingRound, HandError> {
        let amount = target.minus(self.contributed_by(player))?;
        self.next_state(Play::raise_to(player, target, amount))
    }

    /// The next player to act, absent once the round is finished.
    pub fn turn(&self) -> Option<Player> {
        if self.is_finished() {
            None
        } else {
            Some(self.turn)
        }
    }

    /// Sum of every play's incremental amount.
    pub fn pot(&self) -> Chips {
        self.plays.iter().map(Play::amount).sum()
    }

    /// Total chips `player` has committed to this round so far.
    pub fn contributed_by(&self, player: Player) -> Chips {
        self.plays
            .iter()
            .filter(|p| p.played_by(player))
            .map(Play::amount)
            .sum()
    }

    pub fn remaining_chips(&self, player: Player) -> Chips {
        self.stacks.of_player(player)
    }

    pub fn stacks(&self) -> &Stacks {
        &self.stacks
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn last_play(&self) -> Option<&Play> {
        self.plays.last()
    }

    pub fn last_chip_increasing_play(&self) -> Option<&Play> {
        self.plays.iter().rev().find(|p| p.increases_chips())
    }

    /// Players that have not folded, in seat order.
    pub fn remaining_players(&self) -> Vec<Player> {
        self.players
            .iter()
            .copied()
            .filter(|p| !self.has_folded(*p))
            .collect()
    }

    /// Derived fresh from the log on every call. The round is over when
    /// everyone has checked it through, when at most one player is left, or
    /// when every non-folded player has matched the same nonzero total.
    pub fn is_finished(&self) -> bool {
        if self.all_players_have_played() && self.plays.iter().all(Play::is_check) {
            return true;
        }
        let remaining = self.remaining_players();
        if remaining.len() < 2 {
            return true;
        }
        let totals: BTreeSet<Chips> = remaining
            .iter()
            .map(|p| self.contributed_by(*p))
            .collect();
        totals.len() == 1 && !totals.contains(&Chips::ZERO)
    }

    fn all_players_have_played(&self) -> bool {
        self.players
            .iter()
            .all(|player| self.plays.iter().any(|play| play.played_by(*player)))
    }

    fn has_folded(&self, player: Player) -> bool {
        self.plays
            .iter()
            .any(|play| play.is_fold() && play.played_by(player))
    }

    fn next_state(&self, play: Play) -> Result<BettingRound, HandError> {
        if !play.played_by(self.turn) {
            return Err(HandError::invalid_play(format!(
                "cannot play {play}, wrong player: {}, next player is: {}",
                play.player(),
                self.turn
            )));
        }
        let stacks = self.stacks.apply(&play)?;
        let mut next = self.clone();
        next.plays.push(play);
        next.stacks = stacks;
        next.turn = next.next_after(self.turn);
        Ok(next)
    }

    /// Next seat after `current` that has not folded, wrapping around. Falls
    /// back to `current` when nobody else remains (the round is finished then).
    fn next_after(&self, current: Player) -> Player {
        let start = self
            .players
            .iter()
            .position(|p| *p == current)
            .unwrap_or(0);
        for offset in 1..=self.players.len() {
            let candidate = self.players[(start + offset) % self.players.len()];
            if candidate != current && !self.has_folded(candidate) {
                return candidate;
            }
        }
        current
    }
}
