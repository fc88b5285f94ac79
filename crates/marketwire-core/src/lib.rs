//! # Marketwire Core
//!
//! Ticker resolution, request building and response projection for a
//! Polygon-style market-data REST API.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`MarketDataClient`]: URL building, fetch, projection |
//! | [`config`] | Base URL, timeout and user agent |
//! | [`domain`] | Queries, [`Bar`], [`TickerDetails`] |
//! | [`error`] | [`MarketDataError`] and [`QueryError`] |
//! | [`http_client`] | Transport trait and reqwest implementation |
//! | [`resolver`] | Company name to ticker symbol lookup |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marketwire_core::{parse_date, BarsQuery, MarketDataClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketDataClient::default();
//!
//!     let query = BarsQuery::builder("Apple", parse_date("2022-01-01")?, parse_date("2022-06-01")?)
//!         .build(std::env::var("MARKETWIRE_API_KEY")?)?;
//!
//!     for bar in client.fetch_bars(&query).await? {
//!         println!("{} vwap={:.2}", bar.ticker_symbol, bar.volume_weighted_average_price);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Flow
//!
//! ```text
//! caller ─▶ TickerResolver ─▶ build_*_url ─▶ HttpClient (GET) ─▶ JSON ─▶ Bar / TickerDetails
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use marketwire_core::{ErrorKind, MarketDataError};
//!
//! fn describe(error: &MarketDataError) -> &'static str {
//!     match error.kind() {
//!         ErrorKind::InvalidQuery => "the request was bad",
//!         ErrorKind::Transport | ErrorKind::Api => "the network or API failed",
//!         ErrorKind::MalformedResponse => "the API response shape changed",
//!     }
//! }
//! ```
//!
//! API keys are passed per query, are never part of [`ClientConfig`], and are
//! redacted from `Debug` output and logs.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod resolver;

pub use client::{project_bars, project_details, redact_api_key, MarketDataClient};

pub use config::ClientConfig;

pub use domain::{
    format_date, parse_adjusted, parse_date, Bar, BarsQuery, BarsQueryBuilder, DetailsQuery,
    SortOrder, TickerDetails, Timespan,
};

pub use error::{ErrorKind, MarketDataError, QueryError};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use resolver::{resolve, TickerAlias, TickerResolver};

// Date type used by the query builders.
pub use time::Date;
