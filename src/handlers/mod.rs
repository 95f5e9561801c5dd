pub mod error;
pub mod games;
pub mod params;
pub mod steam_user;

pub const USAGE: &str = "Welcome to the Steam user API.
Curl the following URLs, replacing STEAMID with the desired ID found at steamcommunity.com/id/STEAMID.
    /api/steamuser?steamid=STEAMID
    /api/games?steamid=STEAMID
To pass your Steam Web API key with your request, include an HTTP header with the curl flag '-H' and the header field 'X-API-Key'
";

pub async fn usage() -> &'static str {
    USAGE
}
