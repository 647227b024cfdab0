use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),
    #[error("PORT {0} leaves no fallback port above it")]
    NoFallbackPort(u16),
    #[error("cannot parse listen address {0}")]
    InvalidAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Replaces the embedded seed catalog when set.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let seed_path = lookup("ROSTER_SEED_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            static_dir,
            seed_path,
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        addr(&self.host, self.port)
    }

    /// Next port up, used when the configured one is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        let port = self
            .port
            .checked_add(1)
            .ok_or(ConfigError::NoFallbackPort(self.port))?;
        addr(&self.host, port)
    }
}

fn addr(host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let raw = format!("{}:{}", host, port);
    raw.parse().map_err(|_| ConfigError::InvalidAddr(raw))
}
