use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::handlers::error::ApiError;
use crate::services::steam_api::SteamService;

pub const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Deserialize)]
struct SteamIdParam {
    steamid: Option<String>,
}

/// The vanity name and API key every proxied endpoint requires.
///
/// The `steamid` parameter is checked before the header, and an empty value
/// counts as missing.
#[derive(Debug, Clone)]
pub struct SteamQuery {
    pub vanity: String,
    pub api_key: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for SteamQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let vanity = Query::<SteamIdParam>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(param)| param.steamid)
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::MissingSteamId)?;

        let api_key = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|header| header.to_str().ok())
            .filter(|key| !key.is_empty())
            .ok_or(ApiError::MissingApiKey)?
            .to_string();

        Ok(Self { vanity, api_key })
    }
}

impl SteamQuery {
    pub async fn resolve(&self, steam: &SteamService) -> Result<String, ApiError> {
        steam
            .resolve_vanity(&self.api_key, &self.vanity)
            .await?
            .ok_or_else(|| ApiError::UserNotFound(self.vanity.clone()))
    }
}
