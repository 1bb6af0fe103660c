//! Bot configuration from the environment

use reqwest::Url;
use thiserror::Error;

const URI_VAR: &str = "URI";
const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";
const STREAMING_URI_VAR: &str = "STREAMING_URI";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUri { var: &'static str, reason: String },
}

/// Connection settings for the feed server
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Server base URL
    pub uri: Url,
    pub access_token: String,
    /// Base URL for the streaming API; defaults to `uri`
    pub streaming_uri: Url,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let uri = parse_url(URI_VAR, &required(URI_VAR)?)?;
        let access_token = required(ACCESS_TOKEN_VAR)?;
        let streaming_uri = match lookup(STREAMING_URI_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_url(STREAMING_URI_VAR, &raw)?,
            None => uri.clone(),
        };

        Ok(Self {
            uri,
            access_token,
            streaming_uri,
        })
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUri {
        var,
        reason: e.to_string(),
    })
}
