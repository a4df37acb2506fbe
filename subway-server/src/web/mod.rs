//! Web layer for the subway network.
//!
//! Provides HTTP endpoints for managing stations and lines and for
//! shortest-path queries. Handlers only translate between JSON and the
//! [`Network`](crate::network::Network) registry.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
