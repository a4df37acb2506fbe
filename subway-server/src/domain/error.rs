//! Domain error types.
//!
//! These errors report section-chain edits that would break a line's
//! invariants. Every one of them is a caller input error: the line is left
//! exactly as it was before the failed call.

use super::{Distance, Station};

/// Errors from editing a line's section chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// The new section would disconnect, duplicate or branch the chain
    #[error("section chain integrity violated: {0}")]
    ChainIntegrity(&'static str),

    /// A split section must be strictly shorter than the one it divides
    #[error("new section distance {requested} must be shorter than existing section distance {existing}")]
    InvalidSplitDistance {
        requested: Distance,
        existing: Distance,
    },

    /// The only remaining section cannot be removed
    #[error("line has {sections} section(s); cannot remove a station")]
    ChainTooSmall { sections: usize },

    /// Fusing two sections would give a length too large to represent
    #[error("fused section distance {left} + {right} overflows")]
    DistanceOverflow { left: Distance, right: Distance },

    /// The station is not on this line
    #[error("station {0} is not on the line")]
    UnknownStation(Station),
}
