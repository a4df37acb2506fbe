//! Section length.

use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// Physical length of a section of track.
///
/// Distances are unsigned, so a negative length cannot be constructed.
/// Arithmetic always produces a new value.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let a = Distance::new(10);
/// let b = Distance::new(4);
/// assert_eq!(a.plus(b), Some(Distance::new(14)));
/// assert_eq!(Distance::new(u32::MAX).plus(b), None);
/// assert_eq!(a.minus(b), Distance::new(6));
/// assert!(a.is_at_least(b));
/// assert!(!b.is_at_least(a));
/// ```
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Distance(u32);

impl Distance {
    /// Create a distance from a raw length.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw length.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Sum of two distances, or `None` if it does not fit in a `u32`.
    pub fn plus(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.0).map(Distance)
    }

    /// Difference of two distances.
    ///
    /// Callers only subtract a strictly smaller distance (see
    /// [`is_at_least`](Self::is_at_least)), so the result never underflows.
    pub fn minus(self, other: Distance) -> Distance {
        debug_assert!(self.0 >= other.0, "distance subtraction underflow");
        Distance(self.0.saturating_sub(other.0))
    }

    /// True when `self >= other`.
    pub fn is_at_least(self, other: Distance) -> bool {
        self.0 >= other.0
    }
}

impl Sub for Distance {
    type Output = Distance;

    fn sub(self, rhs: Distance) -> Distance {
        self.minus(rhs)
    }
}

impl From<u32> for Distance {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Subtracting what was added gives back the original.
        #[test]
        fn plus_then_minus(a in any::<u32>(), b in any::<u32>()) {
            let a = Distance::new(a);
            let b = Distance::new(b);
            match a.plus(b) {
                Some(sum) => prop_assert_eq!(sum.minus(b), a),
                None => prop_assert!(u64::from(a.value()) + u64::from(b.value()) > u64::from(u32::MAX)),
            }
        }

        /// `is_at_least` agrees with the derived ordering.
        #[test]
        fn is_at_least_matches_ord(a in any::<u32>(), b in any::<u32>()) {
            let a = Distance::new(a);
            let b = Distance::new(b);
            prop_assert_eq!(a.is_at_least(b), a >= b);
        }
    }
}
