//! Network registry error types.

use crate::domain::{LineError, LineId, StationId};
use crate::path::PathError;

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// No station with this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No line with this id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// A line still has a section touching the station
    #[error("station {station} is still served by line {line}")]
    StationInUse { station: String, line: String },

    /// The section edit was rejected by the line
    #[error(transparent)]
    Line(#[from] LineError),

    /// The path query was rejected
    #[error(transparent)]
    Path(#[from] PathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            NetworkError::StationNotFound(StationId::new(3)).to_string(),
            "station 3 not found"
        );
        assert_eq!(
            NetworkError::LineNotFound(LineId::new(8)).to_string(),
            "line 8 not found"
        );
        assert_eq!(
            NetworkError::StationInUse {
                station: "강남역".into(),
                line: "2호선".into(),
            }
            .to_string(),
            "station 강남역 is still served by line 2호선"
        );
        assert_eq!(
            NetworkError::from(LineError::ChainTooSmall { sections: 1 }).to_string(),
            "line has 1 section(s); cannot remove a station"
        );
        assert_eq!(
            NetworkError::from(PathError::SameStation).to_string(),
            "source and target stations must differ"
        );
    }
}
