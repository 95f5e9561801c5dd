use dotenvy::dotenv;
use std::sync::Arc;

use steam_user_proxy::config::ServerConfig;
use steam_user_proxy::services::steam_api::SteamService;
use steam_user_proxy::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let steam = SteamService::new(config.steam_api_base.clone(), config.steam_api_timeout)?;

    let state = Arc::new(AppState { steam });
    let app = app(state);

    tracing::info!("proxying Steam Web API at {}", config.steam_api_base);
    tracing::info!("listening on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
