use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one seat at the table. Players are plain identities; their
/// chips live in [`crate::stacks::Stacks`] and their cards in
/// [`crate::hand::HoleCards`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Player(pub usize);

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}
