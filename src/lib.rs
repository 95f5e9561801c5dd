use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod client;
pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

use services::steam_api::SteamService;

// Application State
pub struct AppState {
    pub steam: SteamService,
}

#[derive(OpenApi)]
#[openapi(
    paths(handlers::steam_user::get_user, handlers::games::get_games),
    components(schemas(
        models::player::PlayerProfile,
        models::player::OpenProfile,
        models::player::RestrictedProfile,
        models::games::OwnedGames,
        models::games::OwnedGame
    )),
    tags((name = "steam-user-proxy", description = "Simplified Steam Web API lookups"))
)]
pub struct ApiDoc;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(handlers::usage))
        .route("/api/steamuser", get(handlers::steam_user::get_user))
        .route("/api/games", get(handlers::games::get_games))
        .merge(SwaggerUi::new("/api/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
