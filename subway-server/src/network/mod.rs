//! In-memory registry of stations and lines.
//!
//! The registry resolves station and line ids to domain entities, runs the
//! line editing and path operations on them, and keeps the results. It is
//! the only place lines are mutated, and it serialises those mutations behind
//! a write lock.

mod error;

pub use error::NetworkError;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{Distance, Line, LineId, Station, StationId};
use crate::path::{PathGraph, Route};

#[derive(Debug, Default)]
struct Registry {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
    last_station_id: u64,
    last_line_id: u64,
}

impl Registry {
    fn station(&self, id: StationId) -> Result<&Station, NetworkError> {
        self.stations
            .get(&id)
            .ok_or(NetworkError::StationNotFound(id))
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut Line, NetworkError> {
        self.lines.get_mut(&id).ok_or(NetworkError::LineNotFound(id))
    }
}

/// Thread-safe subway network.
///
/// Cloning shares the same underlying registry.
#[derive(Clone, Default)]
pub struct Network {
    inner: Arc<RwLock<Registry>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new station. Ids are allocated sequentially from 1.
    pub async fn create_station(&self, name: impl Into<String>) -> Station {
        let name: String = name.into();
        let mut guard = self.inner.write().await;
        guard.last_station_id += 1;
        let station = Station::new(StationId::new(guard.last_station_id), name);
        guard.stations.insert(station.id(), station.clone());

        info!(id = %station.id(), name = %station, "created station");
        station
    }

    /// All stations ordered by id.
    pub async fn stations(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.stations.values().cloned().collect()
    }

    /// Look up a station by id.
    pub async fn station(&self, id: StationId) -> Result<Station, NetworkError> {
        let guard = self.inner.read().await;
        guard.station(id).cloned()
    }

    /// Remove a station that no line serves.
    pub async fn delete_station(&self, id: StationId) -> Result<(), NetworkError> {
        let mut guard = self.inner.write().await;
        let station = guard.station(id)?;

        if let Some(line) = guard.lines.values().find(|l| l.contains(station)) {
            return Err(NetworkError::StationInUse {
                station: station.name().to_string(),
                line: line.name().to_string(),
            });
        }

        guard.stations.remove(&id);
        info!(%id, "deleted station");
        Ok(())
    }

    /// Create a line seeded with one section.
    pub async fn create_line(
        &self,
        name: impl Into<String>,
        color: impl Into<String>,
        up: StationId,
        down: StationId,
        distance: Distance,
    ) -> Result<Line, NetworkError> {
        let mut guard = self.inner.write().await;
        let up = guard.station(up)?.clone();
        let down = guard.station(down)?.clone();

        let id = LineId::new(guard.last_line_id + 1);
        let line = Line::with_section(id, name, color, up, down, distance)?;
        guard.last_line_id += 1;
        guard.lines.insert(id, line.clone());

        info!(%id, name = line.name(), "created line");
        Ok(line)
    }

    /// All lines ordered by id.
    pub async fn lines(&self) -> Vec<Line> {
        let guard = self.inner.read().await;
        guard.lines.values().cloned().collect()
    }

    /// Look up a line by id.
    pub async fn line(&self, id: LineId) -> Result<Line, NetworkError> {
        let guard = self.inner.read().await;
        guard
            .lines
            .get(&id)
            .cloned()
            .ok_or(NetworkError::LineNotFound(id))
    }

    /// Change a line's display attributes.
    pub async fn update_line(
        &self,
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Line, NetworkError> {
        let mut guard = self.inner.write().await;
        let line = guard.line_mut(id)?;
        line.rename(name, color);

        info!(%id, name = line.name(), "updated line");
        Ok(line.clone())
    }

    /// Remove a line and all its sections.
    pub async fn delete_line(&self, id: LineId) -> Result<(), NetworkError> {
        let mut guard = self.inner.write().await;
        guard
            .lines
            .remove(&id)
            .ok_or(NetworkError::LineNotFound(id))?;

        info!(%id, "deleted line");
        Ok(())
    }

    /// Insert a section into a line.
    pub async fn add_section(
        &self,
        line_id: LineId,
        up: StationId,
        down: StationId,
        distance: Distance,
    ) -> Result<Line, NetworkError> {
        let mut guard = self.inner.write().await;
        let up = guard.station(up)?.clone();
        let down = guard.station(down)?.clone();
        let line = guard.line_mut(line_id)?;

        line.add_section(up, down, distance)?;

        info!(line = %line_id, sections = line.len(), "added section");
        Ok(line.clone())
    }

    /// Remove a station from a line.
    pub async fn delete_section(
        &self,
        line_id: LineId,
        station: StationId,
    ) -> Result<Line, NetworkError> {
        let mut guard = self.inner.write().await;
        let station = guard.station(station)?.clone();
        let line = guard.line_mut(line_id)?;

        line.delete_section(&station)?;

        info!(line = %line_id, %station, sections = line.len(), "removed station from line");
        Ok(line.clone())
    }

    /// Shortest route between two stations across every line.
    pub async fn find_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<Route, NetworkError> {
        let guard = self.inner.read().await;
        let source = guard.station(source)?;
        let target = guard.station(target)?;

        let graph = PathGraph::build(guard.lines.values());
        let route = graph.shortest_route(source, target)?;

        info!(
            %source,
            %target,
            distance = route.distance,
            hops = route.stations.len() - 1,
            "found path"
        );
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineError;
    use crate::path::PathError;

    async fn names(network: &Network, line: LineId) -> Vec<String> {
        network
            .line(line)
            .await
            .unwrap()
            .stations()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    #[tokio::test]
    async fn station_ids_are_sequential() {
        let network = Network::new();
        let a = network.create_station("강남역").await;
        let b = network.create_station("역삼역").await;

        assert_eq!(a.id(), StationId::new(1));
        assert_eq!(b.id(), StationId::new(2));
        assert_eq!(network.stations().await, vec![a.clone(), b]);
        assert_eq!(network.station(a.id()).await.unwrap().name(), "강남역");
        assert_eq!(
            network.station(StationId::new(9)).await,
            Err(NetworkError::StationNotFound(StationId::new(9)))
        );
    }

    #[tokio::test]
    async fn line_lifecycle() {
        let network = Network::new();
        let sinnonhyeon = network.create_station("신논현역").await;
        let gangnam = network.create_station("강남역").await;
        let yangjae = network.create_station("양재역").await;

        let line = network
            .create_line(
                "신분당선",
                "bg-red-600",
                sinnonhyeon.id(),
                gangnam.id(),
                Distance::new(10),
            )
            .await
            .unwrap();
        assert_eq!(line.id(), LineId::new(1));

        let line = network
            .add_section(line.id(), gangnam.id(), yangjae.id(), Distance::new(10))
            .await
            .unwrap();
        assert_eq!(line.stations().len(), 3);
        assert_eq!(
            names(&network, line.id()).await,
            vec!["신논현역", "강남역", "양재역"]
        );

        let line = network
            .update_line(line.id(), "새노선", "blue")
            .await
            .unwrap();
        assert_eq!(line.name(), "새노선");

        network
            .delete_section(line.id(), gangnam.id())
            .await
            .unwrap();
        assert_eq!(names(&network, line.id()).await, vec!["신논현역", "양재역"]);
        assert_eq!(
            network.line(line.id()).await.unwrap().total_distance(),
            20
        );

        network.delete_line(line.id()).await.unwrap();
        assert!(network.lines().await.is_empty());
        assert_eq!(
            network.delete_line(line.id()).await,
            Err(NetworkError::LineNotFound(line.id()))
        );
    }

    #[tokio::test]
    async fn rejected_edit_keeps_line() {
        let network = Network::new();
        let a = network.create_station("A").await;
        let b = network.create_station("B").await;
        let line = network
            .create_line("L", "c", a.id(), b.id(), Distance::new(5))
            .await
            .unwrap();

        let err = network
            .delete_section(line.id(), b.id())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            NetworkError::Line(LineError::ChainTooSmall { sections: 1 })
        );
        assert_eq!(names(&network, line.id()).await, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn overflowing_fusion_keeps_line() {
        let network = Network::new();
        let a = network.create_station("A").await;
        let b = network.create_station("B").await;
        let c = network.create_station("C").await;
        let line = network
            .create_line("L", "c", a.id(), b.id(), Distance::new(u32::MAX))
            .await
            .unwrap();
        network
            .add_section(line.id(), b.id(), c.id(), Distance::new(1))
            .await
            .unwrap();

        assert_eq!(
            network.delete_section(line.id(), b.id()).await,
            Err(NetworkError::Line(LineError::DistanceOverflow {
                left: Distance::new(u32::MAX),
                right: Distance::new(1),
            }))
        );
        assert_eq!(names(&network, line.id()).await, vec!["A", "B", "C"]);
        assert_eq!(
            network.line(line.id()).await.unwrap().total_distance(),
            u64::from(u32::MAX) + 1
        );
    }

    #[tokio::test]
    async fn unknown_ids_rejected() {
        let network = Network::new();
        let a = network.create_station("A").await;

        assert_eq!(
            network
                .create_line("L", "c", a.id(), StationId::new(77), Distance::new(5))
                .await
                .unwrap_err(),
            NetworkError::StationNotFound(StationId::new(77))
        );
        assert_eq!(
            network
                .add_section(LineId::new(4), a.id(), a.id(), Distance::new(5))
                .await
                .unwrap_err(),
            NetworkError::LineNotFound(LineId::new(4))
        );
        // A failed create does not consume a line id.
        let b = network.create_station("B").await;
        let line = network
            .create_line("L", "c", a.id(), b.id(), Distance::new(5))
            .await
            .unwrap();
        assert_eq!(line.id(), LineId::new(1));
    }

    #[tokio::test]
    async fn station_in_use_cannot_be_deleted() {
        let network = Network::new();
        let a = network.create_station("A").await;
        let b = network.create_station("B").await;
        let c = network.create_station("C").await;
        network
            .create_line("L", "c", a.id(), b.id(), Distance::new(5))
            .await
            .unwrap();

        assert_eq!(
            network.delete_station(a.id()).await,
            Err(NetworkError::StationInUse {
                station: "A".into(),
                line: "L".into(),
            })
        );
        network.delete_station(c.id()).await.unwrap();
        assert_eq!(network.stations().await, vec![a, b]);
    }

    #[tokio::test]
    async fn find_path_across_lines() {
        let network = Network::new();
        let gyodae = network.create_station("교대역").await;
        let gangnam = network.create_station("강남역").await;
        let yangjae = network.create_station("양재역").await;
        let nambu = network.create_station("남부터미널역").await;

        network
            .create_line("2호선", "green", gyodae.id(), gangnam.id(), Distance::new(10))
            .await
            .unwrap();
        network
            .create_line("신분당선", "red", gangnam.id(), yangjae.id(), Distance::new(10))
            .await
            .unwrap();
        let line3 = network
            .create_line("3호선", "orange", gyodae.id(), nambu.id(), Distance::new(2))
            .await
            .unwrap();
        network
            .add_section(line3.id(), nambu.id(), yangjae.id(), Distance::new(3))
            .await
            .unwrap();

        let route = network.find_path(gangnam.id(), nambu.id()).await.unwrap();
        assert_eq!(route.stations, vec![gangnam.clone(), gyodae.clone(), nambu.clone()]);
        assert_eq!(route.distance, 12);

        let route = network.find_path(gyodae.id(), yangjae.id()).await.unwrap();
        assert_eq!(route.stations, vec![gyodae.clone(), nambu, yangjae]);
        assert_eq!(route.distance, 5);

        assert_eq!(
            network.find_path(gyodae.id(), gyodae.id()).await,
            Err(NetworkError::Path(PathError::SameStation))
        );
    }

    #[tokio::test]
    async fn find_path_for_unserved_station() {
        let network = Network::new();
        let a = network.create_station("A").await;
        let b = network.create_station("B").await;
        let lonely = network.create_station("Lonely").await;
        network
            .create_line("L", "c", a.id(), b.id(), Distance::new(5))
            .await
            .unwrap();

        assert_eq!(
            network.find_path(a.id(), lonely.id()).await,
            Err(NetworkError::Path(PathError::UnknownStation(lonely)))
        );
    }
}
