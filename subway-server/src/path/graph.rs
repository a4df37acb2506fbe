//! Weighted station graph built from lines.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{Line, Station, StationId};

use super::dijkstra::{Edge, ShortestPaths, dijkstra};
use super::PathError;

/// A shortest route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stations in travel order, both endpoints included.
    pub stations: Vec<Station>,

    /// Sum of section distances along the route.
    pub distance: u64,
}

/// Graph over every station of a set of lines.
///
/// Each section contributes an edge in its own direction and one in the
/// opposite direction, both weighted by the section distance. Sections from
/// different lines joining the same pair of stations stay as separate
/// parallel edges.
///
/// The graph is a snapshot: build it from the current lines for each query.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Distance, Line, LineId, Station, StationId};
/// use subway_server::path::PathGraph;
///
/// let a = Station::new(StationId::new(1), "A");
/// let b = Station::new(StationId::new(2), "B");
/// let line = Line::with_section(LineId::new(1), "1", "blue", a.clone(), b.clone(), Distance::new(3)).unwrap();
///
/// let graph = PathGraph::build([&line]);
/// assert_eq!(graph.shortest_distance(&b, &a).unwrap(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathGraph {
    index: HashMap<StationId, usize>,
    stations: Vec<Station>,
    adjacency: Vec<Vec<Edge>>,
    sections: usize,
}

impl PathGraph {
    /// Build the graph from every section of every line.
    pub fn build<'a>(lines: impl IntoIterator<Item = &'a Line>) -> Self {
        let mut graph = Self::default();

        for line in lines {
            for section in line.sections() {
                let up = graph.vertex(section.up());
                let down = graph.vertex(section.down());
                let weight = u64::from(section.distance().value());

                graph.adjacency[up].push(Edge { to: down, weight });
                graph.adjacency[down].push(Edge { to: up, weight });
                graph.sections += 1;
            }
        }

        debug!(
            stations = graph.stations.len(),
            sections = graph.sections,
            "built path graph"
        );
        graph
    }

    /// Number of distinct stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of sections the graph was built from.
    pub fn section_count(&self) -> usize {
        self.sections
    }

    /// True if any section touches `station`.
    pub fn contains(&self, station: &Station) -> bool {
        self.index.contains_key(&station.id())
    }

    /// Stations along the shortest route from `source` to `target`.
    ///
    /// # Errors
    ///
    /// - [`PathError::SameStation`] if `source == target`
    /// - [`PathError::UnknownStation`] if either station is not in the graph
    /// - [`PathError::NoPath`] if the stations are not connected
    pub fn find_shortest_path(
        &self,
        source: &Station,
        target: &Station,
    ) -> Result<Vec<Station>, PathError> {
        let (paths, target_idx) = self.search(source, target)?;
        let vertices = paths
            .path_to(target_idx)
            .ok_or_else(|| no_path(source, target))?;

        Ok(vertices
            .into_iter()
            .map(|v| self.stations[v].clone())
            .collect())
    }

    /// Total distance of the shortest route from `source` to `target`.
    ///
    /// Fails exactly when [`find_shortest_path`](Self::find_shortest_path)
    /// does, and always agrees with the route it returns.
    pub fn shortest_distance(&self, source: &Station, target: &Station) -> Result<u64, PathError> {
        let (paths, target_idx) = self.search(source, target)?;
        paths
            .distance_to(target_idx)
            .ok_or_else(|| no_path(source, target))
    }

    /// Shortest route and its distance from a single search.
    pub fn shortest_route(&self, source: &Station, target: &Station) -> Result<Route, PathError> {
        let (paths, target_idx) = self.search(source, target)?;
        let (Some(vertices), Some(distance)) =
            (paths.path_to(target_idx), paths.distance_to(target_idx))
        else {
            return Err(no_path(source, target));
        };

        Ok(Route {
            stations: vertices
                .into_iter()
                .map(|v| self.stations[v].clone())
                .collect(),
            distance,
        })
    }

    /// Validate the query and run Dijkstra up to the target.
    fn search(
        &self,
        source: &Station,
        target: &Station,
    ) -> Result<(ShortestPaths, usize), PathError> {
        if source == target {
            return Err(PathError::SameStation);
        }
        let source_idx = self.lookup(source)?;
        let target_idx = self.lookup(target)?;

        trace!(%source, %target, "searching shortest path");
        Ok((
            dijkstra(&self.adjacency, source_idx, Some(target_idx)),
            target_idx,
        ))
    }

    fn lookup(&self, station: &Station) -> Result<usize, PathError> {
        self.index
            .get(&station.id())
            .copied()
            .ok_or_else(|| PathError::UnknownStation(station.clone()))
    }

    /// Index of `station`, adding it on first sight.
    fn vertex(&mut self, station: &Station) -> usize {
        if let Some(&idx) = self.index.get(&station.id()) {
            return idx;
        }
        let idx = self.stations.len();
        self.index.insert(station.id(), idx);
        self.stations.push(station.clone());
        self.adjacency.push(Vec::new());
        idx
    }
}

fn no_path(source: &Station, target: &Station) -> PathError {
    PathError::NoPath {
        from: source.clone(),
        to: target.clone(),
    }
}
