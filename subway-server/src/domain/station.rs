//! Station identity types.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque key identifying a station.
///
/// Ids are allocated by whoever owns the station registry; the domain layer
/// only compares them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subway station.
///
/// Equality and hashing use the [`StationId`] only. The name is a display
/// attribute: two stations sharing a name are still different stations.
/// Cloning is cheap (the name is reference counted).
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Station, StationId};
///
/// let a = Station::new(StationId::new(1), "강남역");
/// let b = Station::new(StationId::new(2), "강남역");
/// assert_ne!(a, b);
/// assert_eq!(a, Station::new(StationId::new(1), "renamed"));
/// ```
#[derive(Clone)]
pub struct Station {
    id: StationId,
    name: Arc<str>,
}

impl Station {
    /// Create a station.
    pub fn new(id: StationId, name: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the station key.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({}, {})", self.id.0, self.name)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId::new(id), name)
    }

    #[test]
    fn equality_ignores_name() {
        assert_eq!(station(1, "교대역"), station(1, "Gyodae"));
        assert_ne!(station(1, "교대역"), station(2, "교대역"));
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(station(1, "교대역"));
        assert!(set.contains(&station(1, "anything")));
        assert!(!set.contains(&station(2, "교대역")));
    }

    #[test]
    fn accessors() {
        let s = station(7, "양재역");
        assert_eq!(s.id(), StationId::new(7));
        assert_eq!(s.id().get(), 7);
        assert_eq!(s.name(), "양재역");
    }

    #[test]
    fn display() {
        assert_eq!(station(3, "강남역").to_string(), "강남역");
        assert_eq!(StationId::new(3).to_string(), "3");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", station(3, "강남역")), "Station(3, 강남역)");
        assert_eq!(format!("{:?}", StationId::new(3)), "StationId(3)");
    }
}
