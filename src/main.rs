use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use firewatch::adapters::{FileStore, MemoryStore};
use firewatch::application::SensorLogService;
use firewatch::config::Config;
use firewatch::interface::http::create_router;
use firewatch::ports::ReadingStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("firewatch={},tower_http=info", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting Firewatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", config);

    // Pick the store backing: JSON snapshot file if configured,
    // otherwise purely in-memory
    let store: Arc<dyn ReadingStore> = match &config.data_file {
        Some(path) => {
            info!("✓ Persisting readings to {}", path.display());
            Arc::new(FileStore::open(path, config.max_logs))
        }
        None => Arc::new(MemoryStore::new(config.max_logs)),
    };

    let service = Arc::new(SensorLogService::new(store));
    info!("✓ Sensor log service initialized (max_logs={})", config.max_logs);

    // Create HTTP server
    let app = create_router(service);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("✓ Firewatch listening on {}", addr);
    info!("  → Dashboard: http://localhost:{}", config.port);
    info!("  → API: http://localhost:{}/api/stats", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
