//! Application state for the web layer.

use crate::network::Network;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone, Default)]
pub struct AppState {
    /// Stations and lines
    pub network: Network,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network) -> Self {
        Self { network }
    }
}
