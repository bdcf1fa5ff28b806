use std::collections::BTreeMap;

use crate::betting::BettingRound;
use crate::blinds::BlindConfig;
use crate::cards::Card;
use crate::chips::Chips;
use crate::community::CommunityCards;
use crate::deck::Deck;
use crate::errors::HandError;
use crate::play::Action;
use crate::player::Player;
use crate::showdown::Showdown;
use crate::stacks::Stacks;
use crate::street::Street;

/// The two private cards dealt to each player at hand start.
#[derive(Debug, Clone)]
pub struct HoleCards {
    assignment: BTreeMap<Player, [Card; 2]>,
}

impl HoleCards {
    /// Draws two cards per player, round-robin: one card to each player in
    /// seat order, then a second pass.
    pub fn deal<D>(deck: &mut D, players: &[Player]) -> Result<HoleCards, HandError>
    where
        D: Deck + ?Sized,
    {
        let mut firsts = Vec::with_capacity(players.len());
        for _ in players {
            firsts.push(deck.draw()?);
        }
        let mut assignment = BTreeMap::new();
        for (player, first) in players.iter().zip(firsts) {
            assignment.insert(*player, [first, deck.draw()?]);
        }
        Ok(HoleCards { assignment })
    }

    pub fn of(&self, player: Player) -> Option<[Card; 2]> {
        self.assignment.get(&player).copied()
    }
}

/// One hand of hold'em from the deal to the showdown. Maps the sequence of
/// betting rounds onto pre-flop, flop, turn and river, burning and revealing
/// community cards exactly once per street transition. Every accepted action
/// yields a new `Hand` snapshot; the deck travels along inside it.
#[derive(Debug, Clone)]
pub struct Hand<D> {
    deck: D,
    players: Vec<Player>,
    blinds: BlindConfig,
    hole_cards: HoleCards,
    rounds: BTreeMap<Street, BettingRound>,
    community: CommunityCards,
}

impl<D: Deck> Hand<D> {
    /// Deals hole cards and opens the pre-flop betting round. Blinds and
    /// betting state do not exist until the cards are out.
    pub fn new(
        mut deck: D,
        players: Vec<Player>,
        stacks: Stacks,
        blinds: BlindConfig,
    ) -> Result<Hand<D>, HandError> {
        assert!(players.len() >= 2, "a hand needs at least two players");
        let hole_cards = HoleCards::deal(&mut deck, &players)?;
        let mut rounds = BTreeMap::new();
        rounds.insert(Street::Preflop, BettingRound::new(stacks, &players));
        Ok(Hand {
            deck,
            players,
            blinds,
            hole_cards,
            rounds,
            community: CommunityCards::empty(),
        })
    }

    pub fn hole_cards(&self, player: Player) -> Option<[Card; 2]> {
        self.hole_cards.of(player)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn small_blind(&self) -> Player {
        self.players[0]
    }

    pub fn big_blind(&self) -> Player {
        self.players[1]
    }

    /// Heads-up convention: the button is the big-blind seat.
    pub fn button(&self) -> Player {
        self.players[1]
    }

    pub fn under_the_gun(&self) -> Player {
        self.players[0]
    }

    pub fn blinds(&self) -> BlindConfig {
        self.blinds
    }

    /// Display size of the starting pot: the posted blinds.
    pub fn pot_size(&self) -> Chips {
        self.blinds.small_blind() + self.blinds.big_blind()
    }

    pub fn community(&self) -> &CommunityCards {
        &self.community
    }

    /// The street whose betting round is currently open. `None` once the
    /// river round has finished; that is the hand's terminal state.
    pub fn current_street(&self) -> Option<Street> {
        let (latest, round) = self.latest_round();
        if round.is_finished() {
            latest.next()
        } else {
            Some(latest)
        }
    }

    pub fn round(&self, street: Street) -> Option<&BettingRound> {
        self.rounds.get(&street)
    }

    /// Whether the given street's betting round has been played to the end.
    pub fn street_played(&self, street: Street) -> bool {
        self.rounds
            .get(&street)
            .is_some_and(BettingRound::is_finished)
    }

    /// Stacks as of the latest betting round.
    pub fn stacks(&self) -> &Stacks {
        self.latest_round().1.stacks()
    }

    // The rounds map is never empty: construction inserts the pre-flop round
    // and rounds are only ever added.
    fn latest_round(&self) -> (Street, &BettingRound) {
        let (street, round) = self
            .rounds
            .iter()
            .next_back()
            .expect("hand has at least the pre-flop round");
        (*street, round)
    }

    pub fn is_finished(&self) -> bool {
        self.current_street().is_none()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Available once the hand is finished: one combination per player that
    /// has not folded out of the final round.
    pub fn showdown(&self) -> Option<Showdown> {
        if !self.is_finished() {
            return None;
        }
        let river = self.rounds.get(&Street::River)?;
        Some(Showdown::new(
            &self.hole_cards,
            &self.community,
            &river.remaining_players(),
        ))
    }
}

impl<D: Deck + Clone> Hand<D> {
    /// Applies one betting action to the current street's round. If that
    /// finishes the street, the next round is opened with the carried-over
    /// stacks and its community cards are burned and revealed immediately,
    /// exactly once. Failed actions leave this snapshot untouched.
    pub fn on_current_round(&self, player: Player, action: Action) -> Result<Hand<D>, HandError> {
        let street = self.current_street().ok_or(HandError::PlayOnFinishedHand)?;
        let round = self
            .rounds
            .get(&street)
            .ok_or(HandError::PlayOnFinishedHand)?
            .act(player, action)?;
        let mut next = self.clone();
        next.rounds.insert(street, round);
        next.advance_past(street)?;
        Ok(next)
    }

    fn advance_past(&mut self, street: Street) -> Result<(), HandError> {
        let round = &self.rounds[&street];
        if !round.is_finished() {
            return Ok(());
        }
        let Some(upcoming) = street.next() else {
            return Ok(());
        };
        let carried = round.stacks().clone();
        self.community = upcoming.deal(&mut self.deck, &self.community)?;
        self.rounds
            .insert(upcoming, BettingRound::new(carried, &self.players));
        Ok(())
    }
}
