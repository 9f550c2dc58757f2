// src/main.rs

use std::sync::Arc;

use rota_views::{config::Settings, logging, optimizer::OptimizerClient, routes, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();
    logging::init();

    let settings = Settings::from_env();
    let client = OptimizerClient::new(&settings)?;
    tracing::info!(optimizer = %client.endpoint(), timeout = ?settings.optimizer_timeout, "optimizer client ready");

    let state = AppState::new(Arc::new(client));
    let api = routes::router(state);

    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("API listening on http://127.0.0.1:{}", settings.port);

    axum::serve(listener, api.into_make_service()).await?;
    Ok(())
}
