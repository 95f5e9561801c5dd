//! Environment-driven settings for the proxy and the CLI client.
//!
//! Both binaries call `dotenvy::dotenv()` first, so any of these may also come
//! from a `.env` file.

use anyhow::Context;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::services::steam_api::DEFAULT_BASE_URL;

/// Reads a setting by name; `std::env::var` in the binaries.
type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn var_or(lookup: Lookup, name: &str, default: &str) -> String {
    lookup(name).unwrap_or_else(|| default.to_string())
}

fn parse_var<T>(lookup: Lookup, name: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = var_or(lookup, name, default);
    raw.parse::<T>().with_context(|| format!("invalid {} value {:?}", name, raw))
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub steam_api_base: String,
    pub steam_api_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&env_lookup)
    }

    fn from_lookup(lookup: Lookup) -> anyhow::Result<Self> {
        let host = var_or(lookup, "SERVER_HOST", "0.0.0.0");
        let port = var_or(lookup, "SERVER_PORT", "5000");
        let addr = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .context("Invalid address")?;

        Ok(Self {
            addr,
            steam_api_base: var_or(lookup, "STEAM_API_BASE", DEFAULT_BASE_URL),
            steam_api_timeout: Duration::from_secs(parse_var(lookup, "STEAM_API_TIMEOUT_SECS", "10")?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub proxy_url: String,
    /// Off unless explicitly enabled, e.g. for a proxy behind a self-signed cert.
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&env_lookup)
    }

    fn from_lookup(lookup: Lookup) -> anyhow::Result<Self> {
        Ok(Self {
            proxy_url: var_or(lookup, "PROXY_URL", "https://localhost"),
            accept_invalid_certs: parse_var(lookup, "PROXY_ACCEPT_INVALID_CERTS", "false")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn server_defaults() {
        let config = ServerConfig::from_lookup(&vars(&[])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.steam_api_base, DEFAULT_BASE_URL);
        assert_eq!(config.steam_api_timeout, Duration::from_secs(10));
    }

    #[test]
    fn server_overrides() {
        let lookup = vars(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("STEAM_API_BASE", "http://steam.test"),
            ("STEAM_API_TIMEOUT_SECS", "3"),
        ]);
        let config = ServerConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.steam_api_base, "http://steam.test");
        assert_eq!(config.steam_api_timeout, Duration::from_secs(3));
    }

    #[test]
    fn bad_server_values_are_errors() {
        let err = ServerConfig::from_lookup(&vars(&[("STEAM_API_TIMEOUT_SECS", "abc")])).unwrap_err();
        assert!(err.to_string().contains("STEAM_API_TIMEOUT_SECS"));

        assert!(ServerConfig::from_lookup(&vars(&[("SERVER_PORT", "http")])).is_err());
    }

    #[test]
    fn client_verifies_certificates_by_default() {
        let config = ClientConfig::from_lookup(&vars(&[])).unwrap();
        assert_eq!(config.proxy_url, "https://localhost");
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn client_cert_check_is_opt_out() {
        let config = ClientConfig::from_lookup(&vars(&[("PROXY_ACCEPT_INVALID_CERTS", "true")])).unwrap();
        assert!(config.accept_invalid_certs);

        let err = ClientConfig::from_lookup(&vars(&[("PROXY_ACCEPT_INVALID_CERTS", "yes")])).unwrap_err();
        assert!(err.to_string().contains("PROXY_ACCEPT_INVALID_CERTS"));
    }
}
