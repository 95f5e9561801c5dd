use axum::{extract::State, Json};
use std::sync::Arc;

use crate::handlers::{error::ApiError, params::SteamQuery};
use crate::models::games::OwnedGames;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/games",
    params(
        ("steamid" = String, Query, description = "Vanity name from steamcommunity.com/id/STEAMID"),
        ("X-API-Key" = String, Header, description = "Steam Web API key")
    ),
    responses(
        (status = 200, description = "Owned games in Steam's order", body = OwnedGames),
        (status = 400, description = "Missing steamid parameter or X-API-Key header"),
        (status = 404, description = "Vanity name does not resolve to an account"),
        (status = 500, description = "Steam Web API failure")
    )
)]
pub async fn get_games(
    State(state): State<Arc<AppState>>,
    query: SteamQuery,
) -> Result<Json<OwnedGames>, ApiError> {
    let steam_id_64 = query.resolve(&state.steam).await?;
    let games = state.steam.get_owned_games(&query.api_key, &steam_id_64).await?;

    tracing::debug!("{} owns {} games", steam_id_64, games.game_count);
    Ok(Json(games))
}
