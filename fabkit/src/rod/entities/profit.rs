use std::fmt::{Display, Formatter};
use std::ops::Add;

/// Best achievable revenue for a (sub)rod.
///
/// Variant order matters: the derived [`Ord`] places [`Profit::Unsolvable`] below every
/// [`Profit::Solved`] value, so a forward scan with strict `>` never prefers an
/// unsolvable candidate over a solvable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Profit {
    /// No sequence of priced segments covers the length exactly
    Unsolvable,
    /// Revenue of the best decomposition
    Solved(u64),
}

impl Profit {
    pub const ZERO: Profit = Profit::Solved(0);

    pub fn value(self) -> Option<u64> {
        match self {
            Profit::Unsolvable => None,
            Profit::Solved(v) => Some(v),
        }
    }

    pub fn is_solved(self) -> bool {
        matches!(self, Profit::Solved(_))
    }
}

/// Adding a segment price to an unsolvable remainder stays unsolvable.
///
/// Panics if the sum exceeds `u64`. The solvers bound every profit by `max_price * length`
/// before solving, so the sum never wraps.
impl Add<u64> for Profit {
    type Output = Profit;

    fn add(self, price: u64) -> Profit {
        match self {
            Profit::Unsolvable => Profit::Unsolvable,
            Profit::Solved(v) => Profit::Solved(v.checked_add(price).expect("profit overflows u64")),
        }
    }
}

impl From<Option<u64>> for Profit {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Profit::Unsolvable, Profit::Solved)
    }
}

impl Display for Profit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Profit::Unsolvable => write!(f, "unsolvable"),
            Profit::Solved(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Profit;

    #[test]
    fn unsolvable_is_below_every_value() {
        assert!(Profit::Unsolvable < Profit::Solved(0));
        assert!(Profit::Solved(3) > Profit::Solved(2));
        assert!(!(Profit::Unsolvable > Profit::Unsolvable));
    }

    #[test]
    fn unsolvable_absorbs_prices() {
        assert_eq!(Profit::Unsolvable + 10, Profit::Unsolvable);
        assert_eq!(Profit::Solved(4) + 10, Profit::Solved(14));
    }

    #[test]
    #[should_panic(expected = "profit overflows u64")]
    fn overflow_never_wraps() {
        let _ = Profit::Solved(u64::MAX) + 1;
    }
}
