use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_SITE_ADDR: &str = "127.0.0.1:3007";
const DEFAULT_SITE_ROOT: &str = "target/site";
const DEFAULT_TOKEN_PARAM: &str = "token";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SITE_ADDR '{value}': {source}")]
    Addr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub site_addr: SocketAddr,
    pub site_root: PathBuf,
    pub token_param: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let addr = value("SITE_ADDR", DEFAULT_SITE_ADDR);
        let site_addr = addr
            .parse()
            .map_err(|source| ConfigError::Addr { value: addr, source })?;

        Ok(Self {
            site_addr,
            site_root: PathBuf::from(value("SITE_ROOT", DEFAULT_SITE_ROOT)),
            token_param: value("TOKEN_PARAM", DEFAULT_TOKEN_PARAM),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_root.join("index.html")
    }
}
