use std::collections::BTreeMap;

use crate::cards::Card;
use crate::community::CommunityCards;
use crate::eval::Combination;
use crate::hand::HoleCards;
use crate::player::Player;

/// End-of-hand comparison: each remaining player's best five-card hand,
/// computed from their hole cards and everything on the board.
#[derive(Debug, Clone)]
pub struct Showdown {
    combinations: BTreeMap<Player, Combination>,
}

impl Showdown {
    pub(crate) fn new(
        hole_cards: &HoleCards,
        community: &CommunityCards,
        players: &[Player],
    ) -> Showdown {
        let mut combinations = BTreeMap::new();
        for &player in players {
            let Some(hole) = hole_cards.of(player) else {
                continue;
            };
            let mut pool: Vec<Card> = hole.to_vec();
            pool.extend(community.cards_dealt());
            combinations.insert(player, Combination::of(&pool));
        }
        Showdown { combinations }
    }

    pub fn combination(&self, player: Player) -> Option<&Combination> {
        self.combinations.get(&player)
    }

    pub fn combinations(&self) -> impl Iterator<Item = (Player, &Combination)> {
        self.combinations.iter().map(|(p, c)| (*p, c))
    }

    /// Every player holding the strongest combination. More than one entry
    /// means a genuine tie: same label, same core ranks, same kicker ranks.
    pub fn winners(&self) -> Vec<Player> {
        let Some(best) = self.combinations.values().max() else {
            return Vec::new();
        };
        self.combinations
            .iter()
            .filter(|(_, c)| *c == best)
            .map(|(p, _)| *p)
            .collect()
    }
}
