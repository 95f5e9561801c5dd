pub mod steam_api;
