use core::cmp::Ordering;
use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// The nine hand categories, weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Label {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Trips = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
}

impl Label {
    /// Detection order, strongest first. High card is the fallback and is
    /// not detected, it is what remains.
    pub const DETECTION_ORDER: [Label; 8] = [
        Label::StraightFlush,
        Label::Quads,
        Label::FullHouse,
        Label::Flush,
        Label::Straight,
        Label::Trips,
        Label::TwoPair,
        Label::Pair,
    ];

    pub fn strength(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Label::HighCard => "high card",
            Label::Pair => "pair",
            Label::TwoPair => "two pair",
            Label::Trips => "three of a kind",
            Label::Straight => "straight",
            Label::Flush => "flush",
            Label::FullHouse => "full house",
            Label::Quads => "four of a kind",
            Label::StraightFlush => "straight flush",
        };
        write!(f, "{name}")
    }
}

/// A player's best five cards: the category, the cards that make it (the
/// core), and the kickers that fill the hand up to five. Core and kickers
/// always total exactly five cards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Combination {
    label: Label,
    core: Vec<Card>,
    kickers: Vec<Card>,
}

impl Combination {
    /// Classifies a pool of five to seven cards. Categories are tried from
    /// strongest to weakest and the first match wins; kickers are the highest
    /// remaining cards once the core is fixed.
    pub fn of(cards: &[Card]) -> Combination {
        debug_assert!(
            (5..=7).contains(&cards.len()),
            "combination pools hold 5 to 7 cards"
        );
        let analysis = Analysis::new(cards);
        for label in Label::DETECTION_ORDER {
            if let Some(core) = detect(label, &analysis) {
                let kickers = analysis.kickers_for(&core);
                return Combination {
                    label,
                    core,
                    kickers,
                };
            }
        }
        let kickers = analysis.kickers_for(&[]);
        Combination {
            label: Label::HighCard,
            core: Vec::new(),
            kickers,
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// The cards that define the category, strongest grouping first. Empty
    /// for a high-card hand.
    pub fn core(&self) -> &[Card] {
        &self.core
    }

    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// Core followed by kickers; always five cards.
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = self.core.clone();
        cards.extend_from_slice(&self.kickers);
        cards
    }
}

/// Combinations order by label strength, then core ranks, then kicker ranks,
/// each high to low. Equal everywhere means a genuine tie.
impl Ord for Combination {
    fn cmp(&self, other: &Combination) -> Ordering {
        self.label
            .cmp(&other.label)
            .then_with(|| rank_key(&self.core).cmp(&rank_key(&other.core)))
            .then_with(|| rank_key(&self.kickers).cmp(&rank_key(&other.kickers)))
    }
}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Combination) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn rank_key(cards: &[Card]) -> Vec<Rank> {
    cards.iter().map(|c| c.rank).collect()
}

/// Rank and suit groupings computed once per evaluation. Every detector
/// reads from here instead of rescanning the pool.
struct Analysis {
    cards: Vec<Card>,
    by_rank: BTreeMap<Rank, Vec<Card>>,
    suit_counts: BTreeMap<Suit, usize>,
}

impl Analysis {
    fn new(cards: &[Card]) -> Analysis {
        let mut by_rank: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
        let mut suit_counts: BTreeMap<Suit, usize> = BTreeMap::new();
        for &card in cards {
            by_rank.entry(card.rank).or_default().push(card);
            *suit_counts.entry(card.suit).or_insert(0) += 1;
        }
        Analysis {
            cards: cards.to_vec(),
            by_rank,
            suit_counts,
        }
    }

    /// Ranks represented exactly `n` times, strongest first.
    fn ranks_of_count(&self, n: usize) -> Vec<Rank> {
        self.by_rank
            .iter()
            .rev()
            .filter(|(_, group)| group.len() == n)
            .map(|(rank, _)| *rank)
            .collect()
    }

    fn cards_of_rank(&self, rank: Rank) -> &[Card] {
        self.by_rank.get(&rank).map_or(&[], Vec::as_slice)
    }

    fn distinct_ranks_desc(&self) -> Vec<Rank> {
        self.by_rank.keys().rev().copied().collect()
    }

    fn most_common_suit(&self) -> Option<Suit> {
        self.suit_counts
            .iter()
            .max_by_key(|(suit, count)| (**count, **suit))
            .map(|(suit, _)| *suit)
    }

    /// Most common suit among the cards whose rank falls in `window`.
    fn most_common_suit_in(&self, window: &[Rank]) -> Option<Suit> {
        let mut counts: BTreeMap<Suit, usize> = BTreeMap::new();
        for rank in window {
            for card in self.cards_of_rank(*rank) {
                *counts.entry(card.suit).or_insert(0) += 1;
            }
        }
        counts
            .iter()
            .max_by_key(|(suit, count)| (**count, **suit))
            .map(|(suit, _)| *suit)
    }

    fn cards_of_suit_desc(&self, suit: Suit) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .cards
            .iter()
            .copied()
            .filter(|c| c.suit == suit)
            .collect();
        cards.sort_by(|a, b| b.rank.cmp(&a.rank));
        cards
    }

    /// Highest remaining cards once the core is fixed, descending by rank,
    /// truncated so core plus kickers total five.
    fn kickers_for(&self, core: &[Card]) -> Vec<Card> {
        let mut rest: Vec<Card> = self
            .cards
            .iter()
            .copied()
            .filter(|c| !core.contains(c))
            .collect();
        rest.sort_by(|a, b| b.rank.cmp(&a.rank).then_with(|| b.suit.cmp(&a.suit)));
        rest.truncate(5 - core.len());
        rest
    }
}

fn detect(label: Label, a: &Analysis) -> Option<Vec<Card>> {
    match label {
        Label::StraightFlush => detect_straight_flush(a),
        Label::Quads => rank_group(a, 4),
        Label::FullHouse => detect_full_house(a),
        Label::Flush => detect_flush(a),
        Label::Straight => straight_windows(a).into_iter().next(),
        Label::Trips => rank_group(a, 3),
        Label::TwoPair => detect_two_pair(a),
        Label::Pair => rank_group(a, 2),
        Label::HighCard => None,
    }
}

/// Highest rank represented exactly `n` times, as a core.
fn rank_group(a: &Analysis, n: usize) -> Option<Vec<Card>> {
    let rank = a.ranks_of_count(n).into_iter().next()?;
    Some(a.cards_of_rank(rank).to_vec())
}

fn detect_two_pair(a: &Analysis) -> Option<Vec<Card>> {
    let pairs = a.ranks_of_count(2);
    if pairs.len() < 2 {
        return None;
    }
    let mut core = a.cards_of_rank(pairs[0]).to_vec();
    core.extend_from_slice(a.cards_of_rank(pairs[1]));
    Some(core)
}

fn detect_flush(a: &Analysis) -> Option<Vec<Card>> {
    let suit = a.most_common_suit()?;
    let cards = a.cards_of_suit_desc(suit);
    if cards.len() < 5 {
        return None;
    }
    Some(cards[..5].to_vec())
}

/// Trips plus a pair. The pair slot is filled by a genuine pair, or by
/// downgrading a second trips when one exists.
fn detect_full_house(a: &Analysis) -> Option<Vec<Card>> {
    let trips = a.ranks_of_count(3);
    let top = *trips.first()?;
    let mut core = a.cards_of_rank(top).to_vec();
    if let Some(pair_rank) = a.ranks_of_count(2).first() {
        core.extend_from_slice(a.cards_of_rank(*pair_rank));
    } else if let Some(second) = trips.get(1) {
        core.extend_from_slice(&a.cards_of_rank(*second)[..2]);
    } else {
        return None;
    }
    Some(core)
}

/// All 5-rank windows of consecutive distinct ranks, strongest first, each
/// materialized with a bias toward the window's most common suit so that a
/// straight flush hiding in the window survives the card selection. The
/// ace-low wheel is checked last so any higher straight wins.
fn straight_windows(a: &Analysis) -> Vec<Vec<Card>> {
    let ranks = a.distinct_ranks_desc();
    let mut windows = Vec::new();
    if ranks.len() >= 5 {
        for i in 0..=ranks.len() - 5 {
            let window = &ranks[i..i + 5];
            if window[0] as u8 - window[4] as u8 == 4 {
                windows.extend(materialize(a, window));
            }
        }
    }
    let wheel = [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    if wheel.iter().all(|r| !a.cards_of_rank(*r).is_empty()) {
        windows.extend(materialize(a, &wheel));
    }
    windows
}

/// Picks one card per rank in the window, preferring the window's most
/// common suit where a rank offers a choice.
fn materialize(a: &Analysis, window: &[Rank]) -> Option<Vec<Card>> {
    let preferred = a.most_common_suit_in(window)?;
    window
        .iter()
        .map(|rank| {
            let group = a.cards_of_rank(*rank);
            group
                .iter()
                .find(|c| c.suit == preferred)
                .or_else(|| group.first())
                .copied()
        })
        .collect()
}

fn detect_straight_flush(a: &Analysis) -> Option<Vec<Card>> {
    straight_windows(a)
        .into_iter()
        .find(|window| window.iter().all(|c| c.suit == window[0].suit))
}
