//! Domain types for the subway network.
//!
//! This module contains the line/section editing model. Lines own their
//! section chains and enforce the chain invariants on every edit, so code
//! that receives a `Line` can trust that its sections form one simple path.

mod chain;
mod distance;
mod error;
mod line;
mod section;
mod station;

pub use chain::Sections;
pub use distance::Distance;
pub use error::LineError;
pub use line::{Line, LineId};
pub use section::Section;
pub use station::{Station, StationId};
