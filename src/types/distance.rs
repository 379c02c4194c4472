use super::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Best-known distance from the source
///
/// `Infinite` marks a vertex that has not been reached. Ordering puts every
/// finite distance before `Infinite`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Distance {
    Finite(Weight),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Finite value, if any
    pub fn value(&self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }
}

/// Extend a distance by one edge
///
/// Overflowing `u64` saturates to `Infinite`, so an overflowing candidate
/// can never win a relaxation.
impl Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => d
                .checked_add(weight)
                .map(Distance::Finite)
                .unwrap_or(Distance::Infinite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl From<Weight> for Distance {
    fn from(value: Weight) -> Self {
        Distance::Finite(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}
