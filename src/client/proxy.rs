use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::client::Session;
use crate::config::ClientConfig;
use crate::handlers::params::API_KEY_HEADER;
use crate::models::games::OwnedGames;
use crate::models::player::PlayerProfile;

pub const PROFILE_PATH: &str = "/api/steamuser";
pub const GAMES_PATH: &str = "/api/games";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach the proxy: {0}")]
    Request(#[source] reqwest::Error),

    #[error("{message} ({status})")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("unexpected response from the proxy: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Pulls the human-readable message out of a proxy error body.
fn error_message(body: &Value) -> Option<String> {
    ["query error", "user error", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

#[derive(Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        if config.accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled for {}", config.proxy_url);
        }

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url: config.proxy_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of a proxy endpoint for `vanity`, as it is requested.
    pub fn endpoint_url(&self, path: &str, vanity: &str) -> String {
        format!("{}{}?steamid={}", self.base_url, path, vanity)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, session: &Session, vanity: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .http
            .get(&url)
            .query(&[("steamid", vanity)])
            .header(API_KEY_HEADER, &session.api_key)
            .send()
            .await
            .map_err(ClientError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| error_message(&body))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
            return Err(ClientError::Api { status, message });
        }

        resp.json::<T>().await.map_err(ClientError::Decode)
    }

    pub async fn fetch_profile(&self, session: &Session, vanity: &str) -> Result<PlayerProfile, ClientError> {
        self.get(PROFILE_PATH, session, vanity).await
    }

    pub async fn fetch_games(&self, session: &Session, vanity: &str) -> Result<OwnedGames, ClientError> {
        self.get(GAMES_PATH, session, vanity).await
    }
}
