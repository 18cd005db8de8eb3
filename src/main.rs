mod agent;
mod asr;
mod config;
mod conversations;
mod error;
mod handlers;
mod openai_service;
mod routes;
mod state;
mod tts;
mod utils;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the key may come from the real environment.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("talkmate_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::load()?;
    let addr = config.server.bind_addr();

    let app_state = AppState::new(config)?;
    let app = routes::create_routes(app_state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
