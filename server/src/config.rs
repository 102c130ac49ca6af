//! Listen-address configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid PORT {value:?}: expected 0-65535")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build config from the environment.
    ///
    /// Optional:
    /// - `HOST`: IP to bind; defaults to the host of `fallback`
    /// - `PORT`: port to bind; defaults to the port of `fallback`
    ///
    /// `fallback` is the Leptos `site_addr`.
    pub fn from_env(fallback: SocketAddr) -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        Self::from_vars(host.as_deref(), port.as_deref(), fallback)
    }

    /// Same as [`Self::from_env`], with the raw values passed in. Blank values
    /// count as unset.
    pub fn from_vars(host: Option<&str>, port: Option<&str>, fallback: SocketAddr) -> Result<Self, ConfigError> {
        let ip = match non_blank(host) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost { value: raw.to_string() })?,
            None => fallback.ip(),
        };
        let port = match non_blank(port) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw.to_string() })?,
            None => fallback.port(),
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
