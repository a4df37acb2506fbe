//! Section type.
//!
//! A `Section` is one directed stretch of track between two adjacent
//! stations on a line.

use super::{Distance, LineError, Station};

/// One directed edge of a line's chain.
///
/// # Invariants
///
/// - `up != down`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up: Station,
    down: Station,
    distance: Distance,
}

impl Section {
    /// Construct a section, rejecting a loop back to the same station.
    pub fn new(up: Station, down: Station, distance: Distance) -> Result<Self, LineError> {
        if up == down {
            return Err(LineError::ChainIntegrity(
                "up and down stations must differ",
            ));
        }
        Ok(Self { up, down, distance })
    }

    /// The upstream ("from") station.
    pub fn up(&self) -> &Station {
        &self.up
    }

    /// The downstream ("to") station.
    pub fn down(&self) -> &Station {
        &self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// True if `station` is either endpoint.
    pub fn contains(&self, station: &Station) -> bool {
        self.up == *station || self.down == *station
    }

    /// True if exactly one endpoint is shared with `other`.
    pub fn shares_one_endpoint_with(&self, other: &Section) -> bool {
        let shared = [&self.up, &self.down]
            .into_iter()
            .filter(|s| other.contains(s))
            .count();
        shared == 1
    }

    /// Fuse two consecutive sections (`self` ending where `next` starts)
    /// into one covering both.
    pub(super) fn fuse(&self, next: &Section) -> Result<Section, LineError> {
        if self.down != next.up || !self.shares_one_endpoint_with(next) {
            return Err(LineError::ChainIntegrity("sections are not consecutive"));
        }
        let distance = self
            .distance
            .plus(next.distance)
            .ok_or(LineError::DistanceOverflow {
                left: self.distance,
                right: next.distance,
            })?;
        Section::new(self.up.clone(), next.down.clone(), distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u64) -> Station {
        Station::new(StationId::new(id), format!("S{id}"))
    }

    fn section(up: u64, down: u64, d: u32) -> Section {
        Section::new(station(up), station(down), Distance::new(d)).unwrap()
    }

    #[test]
    fn rejects_self_loop() {
        let err = Section::new(station(1), station(1), Distance::new(3)).unwrap_err();
        assert!(matches!(err, LineError::ChainIntegrity(_)));
    }

    #[test]
    fn accessors() {
        let s = section(1, 2, 5);
        assert_eq!(s.up(), &station(1));
        assert_eq!(s.down(), &station(2));
        assert_eq!(s.distance(), Distance::new(5));
        assert!(s.contains(&station(1)));
        assert!(s.contains(&station(2)));
        assert!(!s.contains(&station(3)));
    }

    #[test]
    fn shares_one_endpoint() {
        let ab = section(1, 2, 5);
        assert!(ab.shares_one_endpoint_with(&section(2, 3, 1)));
        assert!(ab.shares_one_endpoint_with(&section(0, 1, 1)));
        assert!(!ab.shares_one_endpoint_with(&section(3, 4, 1)));
        // Both endpoints shared is not "exactly one".
        assert!(!ab.shares_one_endpoint_with(&section(2, 1, 1)));
    }

    #[test]
    fn fuse_consecutive() {
        let fused = section(1, 2, 5).fuse(&section(2, 3, 10)).unwrap();
        assert_eq!(fused, section(1, 3, 15));
    }

    #[test]
    fn fuse_rejects_overflow() {
        let err = section(1, 2, u32::MAX).fuse(&section(2, 3, 1)).unwrap_err();
        assert_eq!(
            err,
            LineError::DistanceOverflow {
                left: Distance::new(u32::MAX),
                right: Distance::new(1),
            }
        );
    }

    #[test]
    fn fuse_rejects_non_consecutive() {
        assert!(section(1, 2, 5).fuse(&section(3, 4, 1)).is_err());
        assert!(section(2, 3, 5).fuse(&section(1, 2, 1)).is_err());
    }
}
