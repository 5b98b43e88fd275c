//! Server configuration parsed from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Error returned by [`ServerConfig::from_env`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory served for image assets; the Leptos site root when unset.
    pub assets_dir: Option<PathBuf>,
    pub compression: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: directory holding the gallery images
    /// - `COMPRESSION`: `true` (default) or `false`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a number in
    /// `1..=65535`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let assets_dir = parse_assets_dir(std::env::var("ASSETS_DIR").ok().as_deref());
        let compression = env_bool("COMPRESSION").unwrap_or(true);
        Ok(Self { port, assets_dir, compression })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_owned())),
        Ok(port) => Ok(port),
    }
}

fn parse_assets_dir(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| parse_bool(&raw))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
