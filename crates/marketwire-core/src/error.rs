use thiserror::Error;

use crate::http_client::HttpError;

/// Caller-input errors raised while parsing or building a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("api key cannot be empty")]
    EmptyApiKey,

    #[error("multiplier must be greater than zero")]
    ZeroMultiplier,
    #[error("limit must be greater than zero")]
    ZeroLimit,
    #[error("end date {end} is before start date {start}")]
    InvertedRange { start: String, end: String },

    #[error("invalid sort order '{value}', expected one of asc, desc")]
    InvalidSortOrder { value: String },
    #[error("invalid adjusted flag '{value}', expected one of true, false")]
    InvalidAdjusted { value: String },
    #[error(
        "invalid timespan '{value}', expected one of minute, hour, day, week, month, quarter, year"
    )]
    InvalidTimespan { value: String },
    #[error("date must be formatted YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },

    #[error("invalid configuration value for {name}: '{value}'")]
    InvalidConfig { name: &'static str, value: String },
}

/// Coarse classification of a [`MarketDataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidQuery,
    Transport,
    Api,
    MalformedResponse,
}

/// Top-level error returned by every client operation.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("api returned status {status}")]
    Api { status: u16, body: String },

    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

impl MarketDataError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidQuery(_) => ErrorKind::InvalidQuery,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Api,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }

    /// HTTP status carried by an [`ErrorKind::Api`] error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
