use axum::{extract::State, Json};
use std::sync::Arc;

use crate::handlers::{error::ApiError, params::SteamQuery};
use crate::models::player::{map_player_record, PlayerProfile};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/steamuser",
    params(
        ("steamid" = String, Query, description = "Vanity name from steamcommunity.com/id/STEAMID"),
        ("X-API-Key" = String, Header, description = "Steam Web API key")
    ),
    responses(
        (status = 200, description = "Player profile, shape depends on visibility", body = PlayerProfile),
        (status = 400, description = "Missing steamid parameter or X-API-Key header"),
        (status = 404, description = "Vanity name does not resolve to an account"),
        (status = 500, description = "Steam Web API failure")
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    query: SteamQuery,
) -> Result<Json<PlayerProfile>, ApiError> {
    let steam_id_64 = query.resolve(&state.steam).await?;
    let player = state.steam.get_player_summary(&query.api_key, &steam_id_64).await?;

    Ok(Json(map_player_record(&player)))
}
