//! Client configuration.
//!
//! The API key is not part of the configuration; it travels with each query.

use crate::QueryError;

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_USER_AGENT: &str = concat!("marketwire/", env!("CARGO_PKG_VERSION"));

pub const BASE_URL_ENV: &str = "MARKETWIRE_BASE_URL";
pub const TIMEOUT_MS_ENV: &str = "MARKETWIRE_TIMEOUT_MS";

/// Endpoint and transport settings shared by every request a client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout_ms: Option<u64>,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl ClientConfig {
    /// Reads `MARKETWIRE_BASE_URL` and `MARKETWIRE_TIMEOUT_MS`, falling back
    /// to the defaults for unset variables.
    pub fn from_env() -> Result<Self, QueryError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, QueryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }

        if let Some(raw) = lookup(TIMEOUT_MS_ENV).filter(|value| !value.trim().is_empty()) {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(QueryError::InvalidConfig {
                    name: TIMEOUT_MS_ENV,
                    value: raw.clone(),
                })?;
            config = config.with_timeout_ms(Some(timeout_ms));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
