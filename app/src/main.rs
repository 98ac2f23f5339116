//! Bedrock Explorer server binary
//!
//! Loads the refreshed catalog data once, then serves read-only queries
//! over it until shutdown.

mod cli;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bx_server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bedrock_explorer=info,bx_loader=info,bx_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = cli::Cli::parse_args();

    info!("Loading catalog data...");
    let store = cli
        .loader()
        .load()
        .await
        .context("Failed to load catalog data")?;
    info!(
        models = store.model_count(),
        profiles = store.profile_count(),
        "Catalog ready"
    );

    let app = build_router(AppState::new(store));

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
