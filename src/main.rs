use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::info;

use sim_relay::{config::Config, logging, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = Config::from_env().context("invalid configuration")?;
    info!(?config, "Configuration loaded");

    let state = AppState::shared(config.relay.clone());

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Chat relay running at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
