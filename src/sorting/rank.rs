//! Ordering keys attached to class tokens

use crate::sorting::compare::compare_weights;
use num_bigint::BigInt;
use std::cmp::Ordering;
use std::fmt;

/// Position of a class in the canonical order.
///
/// `Unranked` is used for classes the ranking engine does not know about.
/// They always come first, ahead of every ranked class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rank {
    Unranked,
    Ranked(BigInt),
}

impl Rank {
    pub fn is_ranked(&self) -> bool {
        matches!(self, Rank::Ranked(_))
    }

    pub fn weight(&self) -> Option<&BigInt> {
        match self {
            Rank::Unranked => None,
            Rank::Ranked(weight) => Some(weight),
        }
    }
}

impl From<BigInt> for Rank {
    fn from(weight: BigInt) -> Self {
        Rank::Ranked(weight)
    }
}

impl From<Option<BigInt>> for Rank {
    fn from(weight: Option<BigInt>) -> Self {
        weight.map_or(Rank::Unranked, Rank::Ranked)
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Rank::Unranked, Rank::Unranked) => Ordering::Equal,
            (Rank::Unranked, Rank::Ranked(_)) => Ordering::Less,
            (Rank::Ranked(_), Rank::Unranked) => Ordering::Greater,
            (Rank::Ranked(a), Rank::Ranked(b)) => compare_weights(a, b),
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Unranked => write!(f, "unranked"),
            Rank::Ranked(weight) => write!(f, "{}", weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unranked_orders_first() {
        let ranked = Rank::Ranked(BigInt::from(-1000));
        assert!(Rank::Unranked < ranked);
        assert!(ranked > Rank::Unranked);
        assert_eq!(Rank::Unranked.cmp(&Rank::Unranked), Ordering::Equal);
    }

    #[test]
    fn test_ranked_compare_by_weight() {
        let low = Rank::from(BigInt::from(1) << 100usize);
        let high = Rank::from((BigInt::from(1) << 100usize) + 1);
        assert!(low < high);
        assert_eq!(low.cmp(&low.clone()), Ordering::Equal);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Rank::from(None::<BigInt>), Rank::Unranked);
        assert_eq!(
            Rank::from(Some(BigInt::from(7))).weight(),
            Some(&BigInt::from(7))
        );
    }
}
