//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Distance, Line, LineId, Section, Station, StationId};
use crate::path::Route;

/// Request to create a station.
#[derive(Debug, Deserialize)]
pub struct StationRequest {
    /// Display name
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

/// Request to create a line with its first section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: Distance,
}

/// Request to change a line's display attributes.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

/// A line with its stations in chain order.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,

    /// Stations from upstream terminal to downstream terminal
    pub stations: Vec<StationResponse>,

    /// Sections in chain order
    pub sections: Vec<SectionResponse>,
}

/// One section of a line.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: Distance,
}

/// Request to add a section to a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: Distance,
}

/// Query for removing a station from a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSectionQuery {
    pub station_id: StationId,
}

/// Query for a shortest path.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub source: StationId,
    pub target: StationId,
}

/// Shortest path result.
#[derive(Debug, Serialize, Deserialize)]
pub struct PathResponse {
    /// Stations in travel order, both endpoints included
    pub stations: Vec<StationResponse>,

    /// Total distance
    pub distance: u64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&Station> for StationResponse {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id(),
            name: station.name().to_string(),
        }
    }
}

impl From<&Section> for SectionResponse {
    fn from(section: &Section) -> Self {
        Self {
            up_station_id: section.up().id(),
            down_station_id: section.down().id(),
            distance: section.distance(),
        }
    }
}

impl From<&Line> for LineResponse {
    fn from(line: &Line) -> Self {
        Self {
            id: line.id(),
            name: line.name().to_string(),
            color: line.color().to_string(),
            stations: line.stations().iter().map(StationResponse::from).collect(),
            sections: line.sections().map(SectionResponse::from).collect(),
        }
    }
}

impl From<&Route> for PathResponse {
    fn from(route: &Route) -> Self {
        Self {
            stations: route.stations.iter().map(StationResponse::from).collect(),
            distance: route.distance,
        }
    }
}
