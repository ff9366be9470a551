use chrono::Utc;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use cssd_roster::modules::shift_swaps::adapters::outbound::roster_store_in_memory::{
    InMemoryRosterStore, RosterSeed,
};
use cssd_roster::shell::config::AppConfig;
use cssd_roster::shell::http::router;
use cssd_roster::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let store = match &config.seed_file {
        Some(path) => {
            let store = RosterSeed::from_file(path)?.into_store(Utc::now())?;
            tracing::info!(seed = %path.display(), "roster seed loaded");
            store
        }
        None => InMemoryRosterStore::new(),
    };

    let app = router(AppState::new(Arc::new(store))).layer(config.cors_layer());

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    tracing::info!("HTTP API: http://{}/api/swaps", config.http_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.http_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
