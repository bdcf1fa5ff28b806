use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::errors::HandError;

/// A non-negative amount of chips. Wrapper over `u64` so chip amounts cannot
/// be confused with ordinary numbers, and so an amount below zero is
/// unrepresentable.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Chips(u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub const fn new(amount: u64) -> Chips {
        Chips(amount)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The minimum legal raise target over this bet: twice its amount.
    pub fn min_raise(self) -> Chips {
        Chips(self.0.saturating_mul(2))
    }

    /// Checked subtraction. Going below zero is a caller error, never a wrap.
    pub fn minus(self, other: Chips) -> Result<Chips, HandError> {
        self.0
            .checked_sub(other.0)
            .map(Chips)
            .ok_or(HandError::NegativeChipValue {
                have: self,
                take: other,
            })
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Chips {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Chips {
        iter.fold(Chips::ZERO, Add::add)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
