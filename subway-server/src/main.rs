use subway_server::config::ServerConfig;
use subway_server::network::Network;
use subway_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("subway_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::new(Network::new());
    let app = create_router(state);

    let addr = config.addr();
    info!("Subway path server listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET    /health                          - Health check");
    info!("  GET    /stations, POST /stations        - List / create stations");
    info!("  DELETE /stations/:id                    - Delete an unused station");
    info!("  GET    /lines, POST /lines              - List / create lines");
    info!("  GET    /lines/:id, PUT, DELETE          - Read / rename / delete a line");
    info!("  POST   /lines/:id/sections              - Add a section");
    info!("  DELETE /lines/:id/sections?stationId=   - Remove a station from a line");
    info!("  GET    /paths?source=&target=           - Shortest path");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
