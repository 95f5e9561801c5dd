#![allow(dead_code)]

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use steam_user_proxy::services::steam_api::SteamService;
use steam_user_proxy::{app, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const GOOD_KEY: &str = "good-key";
pub const GABEN_ID: &str = "76561197960287930";
pub const PRIVATE_ID: &str = "76561197960000001";
pub const BROKEN_ID: &str = "76561197960000002";
/// Vanity the fake Steam API sits on for longer than `SHORT_TIMEOUT`.
pub const SLOW_VANITY: &str = "slowpoke";
pub const SHORT_TIMEOUT: Duration = Duration::from_secs(1);

type Params = Query<HashMap<String, String>>;

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("key").map(String::as_str) == Some(GOOD_KEY)
}

async fn resolve_vanity(Query(params): Params) -> Response {
    if !authorized(&params) {
        return StatusCode::FORBIDDEN.into_response();
    }

    if params.get("vanityurl").map(String::as_str) == Some(SLOW_VANITY) {
        tokio::time::sleep(Duration::from_secs(3)).await;
    }

    let steamid = match params.get("vanityurl").map(String::as_str) {
        Some("gaben") => GABEN_ID,
        Some("privateguy") => PRIVATE_ID,
        Some("brokenjson") => BROKEN_ID,
        _ => return Json(json!({ "response": { "success": 42, "message": "No match" } })).into_response(),
    };
    Json(json!({ "response": { "steamid": steamid, "success": 1 } })).into_response()
}

async fn player_summaries(Query(params): Params) -> Response {
    if !authorized(&params) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let player = match params.get("steamids").map(String::as_str) {
        Some(GABEN_ID) => json!({
            "steamid": GABEN_ID,
            "communityvisibilitystate": 3,
            "profilestate": 1,
            "personaname": "Rabscuttle",
            "profileurl": "https://steamcommunity.com/id/gaben/",
            "avatarfull": "https://avatars.example/gaben_full.jpg",
            "personastate": 6,
            "realname": "Gabe Newell",
            "loccountrycode": "US"
        }),
        Some(PRIVATE_ID) => json!({
            "steamid": PRIVATE_ID,
            "communityvisibilitystate": 1,
            "personaname": "shy",
            "profileurl": "https://steamcommunity.com/id/privateguy/",
            "avatarfull": "https://avatars.example/shy_full.jpg",
            "personastate": 0
        }),
        Some(BROKEN_ID) => return (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => return Json(json!({ "response": { "players": [] } })).into_response(),
    };
    Json(json!({ "response": { "players": [player] } })).into_response()
}

pub fn gaben_games() -> serde_json::Value {
    // 15 games with distinct playtimes, in Steam's (appid) order.
    let minutes = [30, 600, 45, 1200, 5, 90, 3000, 61, 720, 15, 2400, 100, 360, 1, 4500];
    let games: Vec<_> = minutes
        .iter()
        .enumerate()
        .map(|(i, m)| {
            json!({
                "appid": 10 * (i + 1),
                "name": format!("Game {}", i),
                "playtime_forever": m,
                "img_icon_url": format!("icon{}", i),
                "has_community_visible_stats": true,
                "playtime_deck_forever": i,
                "content_descriptorids": [2, 5]
            })
        })
        .collect();
    json!({ "game_count": 15, "games": games, "more": false })
}

async fn owned_games(Query(params): Params) -> Response {
    if !authorized(&params) {
        return StatusCode::FORBIDDEN.into_response();
    }
    if params.get("include_appinfo").map(String::as_str) != Some("true") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match params.get("steamid").map(String::as_str) {
        Some(GABEN_ID) => Json(json!({ "response": gaben_games() })).into_response(),
        // Private libraries come back as an empty response object.
        _ => Json(json!({ "response": {} })).into_response(),
    }
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Starts a stand-in for the Steam Web API and returns its base URL.
pub async fn spawn_fake_steam() -> String {
    let router = Router::new()
        .route("/ISteamUser/ResolveVanityURL/v1/", get(resolve_vanity))
        .route("/ISteamUser/GetPlayerSummaries/v0002/", get(player_summaries))
        .route("/IPlayerService/GetOwnedGames/v0001/", get(owned_games));
    serve(router).await
}

/// Starts a server that sends response headers and part of a JSON body, then
/// never finishes it.
pub async fn spawn_stalled_steam() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let head = "HTTP/1.1 200 OK\r\n\
                            Content-Type: application/json\r\n\
                            Content-Length: 100\r\n\r\n\
                            {\"response\": {";
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.flush().await;
                tokio::time::sleep(Duration::from_secs(10)).await;
            });
        }
    });
    format!("http://{}", addr)
}

pub fn proxy_app_with_timeout(steam_base: &str, timeout: Duration) -> Router {
    let steam = SteamService::new(steam_base, timeout).unwrap();
    app(Arc::new(AppState { steam }))
}

pub fn proxy_app(steam_base: &str) -> Router {
    proxy_app_with_timeout(steam_base, Duration::from_secs(5))
}

/// Starts the proxy in front of `steam_base` and returns its base URL.
pub async fn spawn_proxy(steam_base: &str) -> String {
    serve(proxy_app(steam_base)).await
}
