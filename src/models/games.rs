use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// `GetOwnedGames` response body, passed through to callers as Steam shapes it.
///
/// Only the fields the client reads are typed; everything else Steam sends
/// rides along in `extra`. Steam omits `games` (and sometimes `game_count`)
/// for private libraries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnedGames {
    #[serde(default)]
    pub game_count: u32,
    #[serde(default)]
    pub games: Vec<OwnedGame>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnedGame {
    pub appid: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub playtime_forever: u64, // Minutes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OwnedGame {
    pub fn hours_played(&self) -> f64 {
        self.playtime_forever as f64 / 60.0
    }
}

impl OwnedGames {
    /// Games ordered by total playtime, most played first, optionally cut to `limit`.
    pub fn most_played(&self, limit: Option<usize>) -> Vec<&OwnedGame> {
        let mut sorted: Vec<&OwnedGame> = self.games.iter().collect();
        sorted.sort_by(|a, b| b.playtime_forever.cmp(&a.playtime_forever));
        if let Some(limit) = limit {
            sorted.truncate(limit);
        }
        sorted
    }
}
