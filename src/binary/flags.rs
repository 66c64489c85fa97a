//! ALU status flags.
//!
//! The flags record reports four conditions: negative, zero, positive and
//! overflow. The first three are carried as a single [`Sign`] so that an
//! operation can only ever report one of them; overflow is independent.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Sign of an arithmetic result or comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    /// Result is negative (or `a < b` for a comparison).
    Negative,
    /// Result is zero (or the operands are equal).
    #[default]
    Zero,
    /// Result is positive (or `a > b` for a comparison).
    Positive,
}

impl Sign {
    /// All sign values in order: Negative, Zero, Positive.
    pub const ALL: [Sign; 3] = [Sign::Negative, Sign::Zero, Sign::Positive];

    /// Convert to -1, 0 or +1.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

impl From<std::cmp::Ordering> for Sign {
    fn from(ordering: std::cmp::Ordering) -> Self {
        match ordering {
            std::cmp::Ordering::Less => Sign::Negative,
            std::cmp::Ordering::Equal => Sign::Zero,
            std::cmp::Ordering::Greater => Sign::Positive,
        }
    }
}

/// Status flags produced by a single ALU operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AluFlags {
    /// Which of negative / zero / positive holds.
    pub sign: Sign,
    /// Set when a carry (addition) or borrow (subtraction) falls off the
    /// most significant bit.
    pub overflow: bool,
}

impl AluFlags {
    /// Create a flags record.
    #[inline]
    pub const fn new(sign: Sign, overflow: bool) -> Self {
        Self { sign, overflow }
    }

    #[inline]
    pub const fn negative(&self) -> bool {
        matches!(self.sign, Sign::Negative)
    }

    #[inline]
    pub const fn zero(&self) -> bool {
        matches!(self.sign, Sign::Zero)
    }

    #[inline]
    pub const fn positive(&self) -> bool {
        matches!(self.sign, Sign::Positive)
    }

    #[inline]
    pub const fn overflow(&self) -> bool {
        self.overflow
    }
}

impl fmt::Display for AluFlags {
    /// Formats as a status register, e.g. `N- Z- P+ V-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |set: bool| if set { '+' } else { '-' };
        write!(
            f,
            "N{} Z{} P{} V{}",
            mark(self.negative()),
            mark(self.zero()),
            mark(self.positive()),
            mark(self.overflow),
        )
    }
}
