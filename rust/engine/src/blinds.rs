use serde::{Deserialize, Serialize};

use crate::chips::Chips;

/// Blind sizes for a hand. The big blind is always twice the small blind.
/// Blinds feed the starting pot-size display only; betting legality never
/// consults them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlindConfig {
    small_blind: Chips,
}

impl BlindConfig {
    pub fn new(small_blind: Chips) -> BlindConfig {
        BlindConfig { small_blind }
    }

    pub fn small_blind(self) -> Chips {
        self.small_blind
    }

    pub fn big_blind(self) -> Chips {
        Chips::new(self.small_blind.value() * 2)
    }
}
