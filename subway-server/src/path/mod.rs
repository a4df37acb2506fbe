//! Shortest-path search across all lines.
//!
//! Every query builds a [`PathGraph`] from the current lines, merging their
//! sections into one weighted graph, then runs Dijkstra between two stations.
//! Nothing is cached between queries.

mod dijkstra;
mod error;
mod graph;

pub use error::PathError;
pub use graph::{PathGraph, Route};
