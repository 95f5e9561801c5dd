use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::models::games::OwnedGames;
use crate::models::player::PlayerSummary;

pub const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

#[derive(Debug, Error)]
pub enum SteamError {
    #[error("failed to reach the Steam Web API: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Steam Web API responded with {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode Steam Web API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Steam Web API returned no player for {0}")]
    NoPlayers(String),
}

// Every Steam Web API payload is wrapped in `{"response": ...}`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: T,
}

#[derive(Debug, Deserialize)]
struct ResolveVanityData {
    steamid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlayerSummariesData {
    #[serde(default)]
    players: Vec<PlayerSummary>,
}

#[derive(Clone)]
pub struct SteamService {
    client: reqwest::Client,
    base_url: String,
}

impl SteamService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SteamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SteamError::Request)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, SteamError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(SteamError::Request)?;

        if !resp.status().is_success() {
            return Err(SteamError::Status(resp.status()));
        }

        // The client timeout also covers reading the body.
        let envelope = resp.json::<Envelope<T>>().await.map_err(|e| {
            if e.is_timeout() {
                SteamError::Request(e)
            } else {
                SteamError::Decode(e)
            }
        })?;
        Ok(envelope.response)
    }

    /// Resolves a vanity name to a SteamID64. `Ok(None)` means no account uses it.
    pub async fn resolve_vanity(&self, api_key: &str, vanity: &str) -> Result<Option<String>, SteamError> {
        let data: ResolveVanityData = self
            .get(
                "/ISteamUser/ResolveVanityURL/v1/",
                &[("key", api_key), ("vanityurl", vanity), ("format", "json")],
            )
            .await?;

        if data.steamid.is_none() {
            tracing::info!("Could not find user based on their vanity URL {}", vanity);
        }
        Ok(data.steamid)
    }

    pub async fn get_player_summary(&self, api_key: &str, steam_id_64: &str) -> Result<PlayerSummary, SteamError> {
        let data: PlayerSummariesData = self
            .get(
                "/ISteamUser/GetPlayerSummaries/v0002/",
                &[("key", api_key), ("steamids", steam_id_64)],
            )
            .await?;

        data.players
            .into_iter()
            .next()
            .ok_or_else(|| SteamError::NoPlayers(steam_id_64.to_string()))
    }

    pub async fn get_owned_games(&self, api_key: &str, steam_id_64: &str) -> Result<OwnedGames, SteamError> {
        self.get(
            "/IPlayerService/GetOwnedGames/v0001/",
            &[
                ("key", api_key),
                ("steamid", steam_id_64),
                ("format", "json"),
                ("include_appinfo", "true"),
            ],
        )
        .await
    }
}
