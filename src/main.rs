use anyhow::Context;
use product_service::{
    app::product::{MemoryProductStore, PgProductStore, ProductStore},
    build_router,
    config::{self, StorageBackend},
    infrastructure::{DatabaseManager, Logger},
};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("failed to load configuration")?;
    Logger::init(&config.logging.level);

    info!("Starting product service...");

    let store: Arc<dyn ProductStore> = match config.storage.backend {
        StorageBackend::Postgres => {
            let db = DatabaseManager::new(&config.database).await.map_err(|e| {
                error!("Failed to initialize database: {}", e);
                e
            })?;
            if config.database.ensure_schema {
                db.ensure_schema().await?;
            }
            Arc::new(PgProductStore::new(db.into_pool()))
        }
        StorageBackend::Memory => {
            info!("Using in-memory product store");
            Arc::new(MemoryProductStore::new())
        }
    };

    let app = build_router(store);

    let listener = TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    let addr = listener.local_addr()?;

    info!("🚀 Product service running on http://{}", addr);
    info!("   GET    /products      - List products");
    info!("   GET    /product/:id   - Get product");
    info!("   POST   /product       - Create product");
    info!("   PUT    /product/:id   - Update product");
    info!("   DELETE /product/:id   - Delete product");
    info!("   GET    /health        - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Product service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for ctrl+c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
