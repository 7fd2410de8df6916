use postboard::config::CONFIG;
use postboard::{InMemoryStorage, PostboardService, build_app};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter = EnvFilter::try_new(&CONFIG.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let service = Arc::new(PostboardService::new(InMemoryStorage::new()));
    let app = build_app(service, CONFIG.request_timeout);

    // Start server
    let addr = SocketAddr::new(CONFIG.host, CONFIG.port);
    info!("Server running on port {}", CONFIG.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
