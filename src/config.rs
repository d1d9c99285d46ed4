use std::net::SocketAddr;
use url::Url;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";
const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Startup configuration, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the listings API, no trailing slash.
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads `MARKET_API_BASE` and `MARKET_BIND`, falling back to
    /// local-dev defaults when unset.
    pub fn from_env() -> Result<Self, String> {
        let base = std::env::var("MARKET_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let bind = std::env::var("MARKET_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        Self::from_values(&base, &bind)
    }

    fn from_values(base: &str, bind: &str) -> Result<Self, String> {
        let parsed = Url::parse(base).map_err(|e| format!("MARKET_API_BASE is not a valid URL ({base}): {e}"))?;

        let bind_addr: SocketAddr = bind
            .parse()
            .map_err(|e| format!("MARKET_BIND is not a valid socket address ({bind}): {e}"))?;

        Ok(Self {
            api_base_url: parsed.as_str().trim_end_matches('/').to_string(),
            bind_addr,
        })
    }
}
