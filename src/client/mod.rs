//! Interactive client for the proxy's `/api/steamuser` and `/api/games` endpoints.

pub mod menu;
pub mod proxy;
pub mod render;

/// Per-run state of the CLI. The API key lives only in process memory.
#[derive(Debug, Clone)]
pub struct Session {
    pub api_key: String,
}

impl Session {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }
}
