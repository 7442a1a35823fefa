//! CDC API server binary.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use cdc_api::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cdc_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing CDC API...");
    let state = Arc::new(AppState::from_env());
    if state.gemini.is_none() {
        info!("GEMINI_API_KEY not set; document analysis and chat are disabled");
    }

    let app = router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting CDC API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
