use marketwire_core::{ErrorKind, MarketDataError, QueryError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error("an api key is required: pass --api-key or set MARKETWIRE_API_KEY")]
    MissingApiKey,

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Query(_) | Self::MissingApiKey => 2,
            Self::MarketData(error) => match error.kind() {
                ErrorKind::InvalidQuery => 2,
                ErrorKind::Api => 3,
                ErrorKind::Transport => 4,
                ErrorKind::MalformedResponse => 5,
            },
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
