use secrecy::Secret;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// 10 MiB of image grows to ~13.4 MiB once base64'd and wrapped in JSON.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Provider credential. Never printed by `Debug`.
pub type ApiKey = Secret<String>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value}")]
    InvalidAddr { key: &'static str, value: String },

    #[error("{key} must be a positive integer, got {value}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Server configuration, read once at startup and handed to the router.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when `GOOGLE_API_KEY` is unset; every provider-backed route then
    /// answers 500 without touching the network.
    pub api_key: Option<ApiKey>,
    pub model: String,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidAddr {
            key: "BIND_ADDR",
            value: bind.clone(),
        })?;

        let max_body_bytes = match get("MAX_BODY_BYTES") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: "MAX_BODY_BYTES",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Config {
            api_key: get("GOOGLE_API_KEY").map(Secret::new),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: get("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            bind_addr,
            max_body_bytes,
        })
    }
}
