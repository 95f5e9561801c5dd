use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NO_REAL_NAME: &str = "Player does not have their real name set.";
pub const NO_COUNTRY: &str = "User does not display their country.";
pub const NOT_IN_GAME: &str = "User is not currently in game.";
pub const UNKNOWN_STATUS: &str = "Unknown status.";

/// Visibility code Steam uses for private and friends-only profiles.
pub const VISIBILITY_RESTRICTED: i64 = 1;

/// A single entry of `GetPlayerSummaries`' `players` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub steamid: String,
    pub personaname: Option<String>,
    pub avatarfull: Option<String>,
    pub personastate: Option<i64>,
    pub communityvisibilitystate: Option<i64>,
    pub realname: Option<String>,
    pub profileurl: Option<String>,
    pub loccountrycode: Option<String>,
    pub gameextrainfo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestrictedProfile {
    #[serde(rename = "Display Name")]
    pub display_name: Option<String>,
    #[serde(rename = "SteamID64")]
    pub steam_id_64: String,
    #[serde(rename = "Full Avatar URL")]
    pub avatar_url: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OpenProfile {
    #[serde(rename = "Display Name")]
    pub display_name: Option<String>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "SteamID64")]
    pub steam_id_64: String,
    #[serde(rename = "Vanity URL")]
    pub vanity_url: Option<String>,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "User Status")]
    pub user_status: String,
    #[serde(rename = "Current Game")]
    pub current_game: String,
}

/// The simplified player payload served by `/api/steamuser`.
///
/// Untagged so the JSON carries only the display keys. `Open` is tried first
/// when deserializing because its key set is a strict superset in size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PlayerProfile {
    Open(OpenProfile),
    Restricted(RestrictedProfile),
}

impl PlayerProfile {
    pub fn display_name(&self) -> Option<&str> {
        match self {
            PlayerProfile::Open(p) => p.display_name.as_deref(),
            PlayerProfile::Restricted(p) => p.display_name.as_deref(),
        }
    }

    /// Label/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let or_none = |v: &Option<String>| v.clone().unwrap_or_else(|| "None".to_string());
        match self {
            PlayerProfile::Restricted(p) => vec![
                ("Display Name", or_none(&p.display_name)),
                ("SteamID64", p.steam_id_64.clone()),
                ("Full Avatar URL", or_none(&p.avatar_url)),
                ("Status", p.status.clone()),
            ],
            PlayerProfile::Open(p) => vec![
                ("Display Name", or_none(&p.display_name)),
                ("Name", p.name.clone()),
                ("SteamID64", p.steam_id_64.clone()),
                ("Vanity URL", or_none(&p.vanity_url)),
                ("Country", p.country.clone()),
                ("User Status", p.user_status.clone()),
                ("Current Game", p.current_game.clone()),
            ],
        }
    }
}

pub fn status_label(code: Option<i64>) -> &'static str {
    match code {
        Some(0) => "Offline",
        Some(1) => "Online",
        Some(2) => "Busy",
        Some(3) => "Away",
        Some(4) => "Snooze",
        Some(5) => "Looking to trade",
        Some(6) => "Looking to play",
        _ => UNKNOWN_STATUS,
    }
}

/// Picks the output shape for a player based on their visibility state.
pub fn map_player_record(player: &PlayerSummary) -> PlayerProfile {
    let status = status_label(player.personastate).to_string();

    if player.communityvisibilitystate == Some(VISIBILITY_RESTRICTED) {
        return PlayerProfile::Restricted(RestrictedProfile {
            display_name: player.personaname.clone(),
            steam_id_64: player.steamid.clone(),
            avatar_url: player.avatarfull.clone(),
            status,
        });
    }

    PlayerProfile::Open(OpenProfile {
        display_name: player.personaname.clone(),
        name: player.realname.clone().unwrap_or_else(|| NO_REAL_NAME.to_string()),
        steam_id_64: player.steamid.clone(),
        vanity_url: player.profileurl.clone(),
        country: player.loccountrycode.clone().unwrap_or_else(|| NO_COUNTRY.to_string()),
        user_status: status,
        current_game: player.gameextrainfo.clone().unwrap_or_else(|| NOT_IN_GAME.to_string()),
    })
}
