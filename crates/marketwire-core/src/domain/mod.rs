//! # Domain Models
//!
//! Query value objects and projected result records.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`BarsQuery`] | Validated aggregates request |
//! | [`DetailsQuery`] | Validated ticker-details request |
//! | [`Timespan`] | Bar bucket unit (minute .. year) |
//! | [`SortOrder`] | Result ordering (`asc` / `desc`) |
//! | [`Bar`] | One projected aggregate row |
//! | [`TickerDetails`] | Flattened reference-data record |
//!
//! ## Validation
//!
//! Queries validate at `build` time and are immutable afterwards:
//!
//! ```rust,ignore
//! use marketwire_core::{BarsQuery, QueryError, parse_date};
//!
//! let start = parse_date("2022-01-01")?;
//! let end = parse_date("2022-06-01")?;
//!
//! let query = BarsQuery::builder("Apple", start, end).limit(120).build("KEY")?;
//!
//! let invalid = BarsQuery::builder("Apple", start, end).multiplier(0).build("KEY");
//! assert!(matches!(invalid, Err(QueryError::ZeroMultiplier)));
//! ```

mod bar;
mod date;
mod details;
mod query;
mod timespan;

pub use bar::Bar;
pub use date::{format_date, parse_date};
pub use details::TickerDetails;
pub use query::{parse_adjusted, BarsQuery, BarsQueryBuilder, DetailsQuery};
pub use timespan::{SortOrder, Timespan};
