use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, SeedConfig};
use service::{seed, store::InMemoryCustomerStore};
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

/// Create the customer store, seeded according to configuration.
pub async fn build_state(seed_cfg: &SeedConfig) -> Result<AppState, StartupError> {
    let store = if seed_cfg.sample_customers {
        InMemoryCustomerStore::with_customers(seed::sample_customers()).await?
    } else {
        InMemoryCustomerStore::new()
    };
    Ok(AppState::new(Arc::new(store)))
}

/// Serve the router on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.seed).await?;
    let seeded = state.customers.len().await;
    info!(customers = seeded, "customer store ready");

    let app = routes::build_router(state);

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(%addr, "starting server");
    serve(listener, app).await
}
