use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rotation_server::config::ServerConfig;
use rotation_server::rotation::RotationConfig;
use rotation_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let server = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let rotation = RotationConfig::default();
    info!(
        lines = rotation.lines.len(),
        stations = rotation.stations.len(),
        "loaded rotation layout"
    );

    // Build app state
    let state = AppState::new(rotation, Local::now().date_naive());

    // Create router
    let app = create_router(state, &server.static_dir);

    // Bind and serve
    let addr = server.addr;
    info!("Station Rotation listening on http://{addr}");
    info!("  GET  /                  - Configuration form");
    info!("  POST /schedule          - Generate and download");
    info!("  GET  /schedule/preview  - Printable preview");
    info!("  POST /api/schedule      - JSON schedule");
    info!("  GET  /health            - Health check");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
