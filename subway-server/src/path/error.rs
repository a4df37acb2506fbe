//! Path query error types.

use crate::domain::Station;

/// Errors from a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and target are the same station
    #[error("source and target stations must differ")]
    SameStation,

    /// The station is not served by any line
    #[error("station {0} is not on any line")]
    UnknownStation(Station),

    /// No route connects the stations
    #[error("no route from {from} to {to}")]
    NoPath { from: Station, to: Station },
}
