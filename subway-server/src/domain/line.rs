//! Subway line type and its section-chain editing rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::chain::{SectionChain, Sections};
use super::{Distance, LineError, Section, Station};

/// Opaque key identifying a line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u64);

impl LineId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named subway line owning an ordered chain of sections.
///
/// # Invariants
///
/// After every successful edit:
///
/// - consecutive sections connect (`sections[i].down == sections[i + 1].up`)
/// - no station appears twice, so the chain never branches or loops
/// - a non-empty line keeps at least one section
///
/// Every edit validates fully before touching the chain; a failed edit leaves
/// the line unchanged.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Distance, Line, LineId, Station, StationId};
///
/// let a = Station::new(StationId::new(1), "A");
/// let b = Station::new(StationId::new(2), "B");
/// let c = Station::new(StationId::new(3), "C");
///
/// let mut line = Line::new(LineId::new(1), "2호선", "green");
/// line.add_section(a.clone(), c.clone(), Distance::new(10)).unwrap();
/// line.add_section(a.clone(), b.clone(), Distance::new(4)).unwrap();
///
/// assert_eq!(line.stations(), vec![a, b, c]);
/// let distances: Vec<u32> = line.sections().map(|s| s.distance().value()).collect();
/// assert_eq!(distances, vec![4, 6]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    chain: SectionChain,
}

impl Line {
    /// Create a line with no sections.
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            chain: SectionChain::default(),
        }
    }

    /// Create a line seeded with its first section.
    pub fn with_section(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<Self, LineError> {
        let mut line = Self::new(id, name, color);
        line.add_section(up, down, distance)?;
        Ok(line)
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Change the display attributes. The chain is untouched.
    pub fn rename(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// True if the line has no sections yet.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// True if any section of the line touches `station`.
    pub fn contains(&self, station: &Station) -> bool {
        self.chain.contains(station)
    }

    /// Most upstream station.
    pub fn first_station(&self) -> Option<&Station> {
        self.chain.first()
    }

    /// Most downstream station.
    pub fn last_station(&self) -> Option<&Station> {
        self.chain.last()
    }

    /// Sections in chain order, upstream first.
    pub fn sections(&self) -> Sections<'_> {
        self.chain.iter()
    }

    /// Stations in chain order, upstream terminal first.
    ///
    /// An empty line has no stations.
    pub fn stations(&self) -> Vec<Station> {
        let mut stations = Vec::with_capacity(self.len() + 1);
        if let Some(first) = self.chain.first() {
            stations.push(first.clone());
        }
        stations.extend(self.sections().map(|s| s.down().clone()));
        stations
    }

    /// Sum of all section distances.
    ///
    /// Widened to `u64`: every section fits in a `u32` but their sum need not.
    pub fn total_distance(&self) -> u64 {
        self.sections()
            .map(|s| u64::from(s.distance().value()))
            .sum()
    }

    /// Insert a section from `up` to `down`.
    ///
    /// The first section of an empty line is always accepted. Afterwards the
    /// new section must connect to the chain in exactly one of these ways:
    ///
    /// - `down` is the first station: prepend
    /// - `up` is the last station: append
    /// - `up` starts an existing section and `down` is new: split that
    ///   section at `down`
    /// - `down` ends an existing section and `up` is new: split that section
    ///   at `up`
    ///
    /// # Errors
    ///
    /// - [`LineError::ChainIntegrity`] if both stations or neither station
    ///   are already on the line, or `up == down`
    /// - [`LineError::InvalidSplitDistance`] if a split would not leave a
    ///   positive remainder (`distance` must be strictly shorter)
    pub fn add_section(
        &mut self,
        up: Station,
        down: Station,
        distance: Distance,
    ) -> Result<(), LineError> {
        let section = Section::new(up, down, distance)?;

        if self.chain.is_empty() {
            debug!(line = %self.name, up = %section.up(), down = %section.down(), "seeding line");
            self.chain.seed(section);
            return Ok(());
        }

        let has_up = self.chain.contains(section.up());
        let has_down = self.chain.contains(section.down());

        if has_up && has_down {
            return Err(LineError::ChainIntegrity(
                "both stations are already on the line",
            ));
        }
        if !has_up && !has_down {
            return Err(LineError::ChainIntegrity(
                "neither station is on the line",
            ));
        }

        if self.chain.first() == Some(section.down()) {
            debug!(line = %self.name, station = %section.up(), "extending upstream terminal");
            self.chain.push_front(section);
            return Ok(());
        }
        if self.chain.last() == Some(section.up()) {
            debug!(line = %self.name, station = %section.down(), "extending downstream terminal");
            self.chain.push_back(section);
            return Ok(());
        }

        if has_up {
            self.split_after_up(section)
        } else {
            self.split_before_down(section)
        }
    }

    /// `up` is interior (or the first station): split the section leaving it.
    fn split_after_up(&mut self, section: Section) -> Result<(), LineError> {
        let (idx, existing) = self
            .chain
            .leaving(section.up())
            .ok_or(LineError::ChainIntegrity("no section leaves the up station"))?;
        check_split(&section, existing)?;

        let tail = Section::new(
            section.down().clone(),
            existing.down().clone(),
            existing.distance().minus(section.distance()),
        )?;

        debug!(
            line = %self.name,
            station = %section.down(),
            "splitting section after {}",
            section.up()
        );
        self.chain.split(idx, section, tail);
        Ok(())
    }

    /// `down` is interior (or the last station): split the section arriving at it.
    fn split_before_down(&mut self, section: Section) -> Result<(), LineError> {
        let (idx, existing) = self
            .chain
            .arriving(section.down())
            .ok_or(LineError::ChainIntegrity(
                "no section arrives at the down station",
            ))?;
        check_split(&section, existing)?;

        let head = Section::new(
            existing.up().clone(),
            section.up().clone(),
            existing.distance().minus(section.distance()),
        )?;

        debug!(
            line = %self.name,
            station = %section.up(),
            "splitting section before {}",
            section.down()
        );
        self.chain.split(idx, head, section);
        Ok(())
    }

    /// Remove `station` from the line.
    ///
    /// A terminal station takes its one section with it. An interior station
    /// fuses its two sections into one whose distance is their sum.
    ///
    /// # Errors
    ///
    /// - [`LineError::ChainTooSmall`] if the line has one section or fewer
    /// - [`LineError::UnknownStation`] if no section touches `station`
    /// - [`LineError::DistanceOverflow`] if the fused section would be
    ///   longer than a [`Distance`] can hold
    pub fn delete_section(&mut self, station: &Station) -> Result<(), LineError> {
        if self.chain.len() <= 1 {
            return Err(LineError::ChainTooSmall {
                sections: self.chain.len(),
            });
        }
        if !self.chain.contains(station) {
            return Err(LineError::UnknownStation(station.clone()));
        }

        if self.chain.first() == Some(station) {
            debug!(line = %self.name, %station, "removing upstream terminal");
            self.chain.pop_front();
            return Ok(());
        }
        if self.chain.last() == Some(station) {
            debug!(line = %self.name, %station, "removing downstream terminal");
            self.chain.pop_back();
            return Ok(());
        }

        let (a, arriving) = self
            .chain
            .arriving(station)
            .ok_or(LineError::ChainIntegrity("interior station has no arriving section"))?;
        let (b, leaving) = self
            .chain
            .leaving(station)
            .ok_or(LineError::ChainIntegrity("interior station has no leaving section"))?;
        let fused = arriving.fuse(leaving)?;

        debug!(line = %self.name, %station, distance = %fused.distance(), "fusing sections");
        self.chain.fuse(a, b, fused);
        Ok(())
    }
}

/// A split must leave a positive remainder on the existing section.
fn check_split(new: &Section, existing: &Section) -> Result<(), LineError> {
    if new.distance().is_at_least(existing.distance()) {
        return Err(LineError::InvalidSplitDistance {
            requested: new.distance(),
            existing: existing.distance(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
