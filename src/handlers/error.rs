use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::steam_api::SteamError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing steamuser=STEAMID parameter")]
    MissingSteamId,

    #[error("Missing X-API-Key header")]
    MissingApiKey,

    #[error("Could not find user based on their vanity URL {0}")]
    UserNotFound(String),

    #[error(transparent)]
    Upstream(#[from] SteamError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingSteamId | ApiError::MissingApiKey => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent to the caller. Upstream failures only ever expose a fixed
    /// message per category; the details go to the log.
    fn public_message(&self) -> String {
        match self {
            ApiError::Upstream(SteamError::Request(_)) => "Could not reach the Steam Web API".to_string(),
            ApiError::Upstream(SteamError::Status(status))
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN =>
            {
                "Steam Web API rejected the provided API key".to_string()
            }
            ApiError::Upstream(SteamError::Status(_)) => "Steam Web API returned an error".to_string(),
            ApiError::Upstream(SteamError::Decode(_)) => {
                "Steam Web API returned an unexpected response".to_string()
            }
            ApiError::Upstream(SteamError::NoPlayers(_)) => "Steam Web API returned no player data".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.public_message();
        let body = match &self {
            ApiError::MissingSteamId | ApiError::MissingApiKey => json!({ "query error": message }),
            ApiError::UserNotFound(_) => json!({ "user error": message }),
            ApiError::Upstream(e) => {
                tracing::error!("Steam API Error: {}", e);
                json!({ "error": message })
            }
        };

        (self.status(), Json(body)).into_response()
    }
}
