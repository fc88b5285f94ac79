use std::fmt::{Debug, Formatter};

use time::Date;

use super::{format_date, SortOrder, Timespan};
use crate::QueryError;

const REDACTED: &str = "<redacted>";

/// Parses the `adjusted` flag; only `true` and `false` are accepted.
pub fn parse_adjusted(value: &str) -> Result<bool, QueryError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(QueryError::InvalidAdjusted {
            value: value.to_owned(),
        }),
    }
}

fn validate_ticker(ticker: &str) -> Result<(), QueryError> {
    if ticker.trim().is_empty() {
        return Err(QueryError::EmptyTicker);
    }
    Ok(())
}

fn validate_api_key(api_key: &str) -> Result<(), QueryError> {
    if api_key.trim().is_empty() {
        return Err(QueryError::EmptyApiKey);
    }
    Ok(())
}

/// Aggregates request. Only obtainable through [`BarsQueryBuilder::build`].
#[derive(Clone, PartialEq, Eq)]
pub struct BarsQuery {
    ticker: String,
    start: Date,
    end: Date,
    multiplier: u32,
    timespan: Timespan,
    adjusted: bool,
    sort_order: SortOrder,
    limit: u32,
    api_key: String,
}

impl BarsQuery {
    pub const DEFAULT_LIMIT: u32 = 50_000;

    pub fn builder(ticker: impl Into<String>, start: Date, end: Date) -> BarsQueryBuilder {
        BarsQueryBuilder {
            ticker: ticker.into(),
            start,
            end,
            multiplier: 1,
            timespan: Timespan::Day,
            adjusted: true,
            sort_order: SortOrder::Ascending,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub const fn timespan(&self) -> Timespan {
        self.timespan
    }

    pub const fn adjusted(&self) -> bool {
        self.adjusted
    }

    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Debug for BarsQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarsQuery")
            .field("ticker", &self.ticker)
            .field("start", &format_date(self.start))
            .field("end", &format_date(self.end))
            .field("multiplier", &self.multiplier)
            .field("timespan", &self.timespan)
            .field("adjusted", &self.adjusted)
            .field("sort_order", &self.sort_order)
            .field("limit", &self.limit)
            .field("api_key", &REDACTED)
            .finish()
    }
}

/// Staging area for a [`BarsQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarsQueryBuilder {
    ticker: String,
    start: Date,
    end: Date,
    multiplier: u32,
    timespan: Timespan,
    adjusted: bool,
    sort_order: SortOrder,
    limit: u32,
}

impl BarsQueryBuilder {
    pub fn multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn timespan(mut self, timespan: Timespan) -> Self {
        self.timespan = timespan;
        self
    }

    pub fn adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = adjusted;
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(self, api_key: impl Into<String>) -> Result<BarsQuery, QueryError> {
        let api_key = api_key.into();
        validate_ticker(&self.ticker)?;
        validate_api_key(&api_key)?;

        if self.multiplier == 0 {
            return Err(QueryError::ZeroMultiplier);
        }
        if self.limit == 0 {
            return Err(QueryError::ZeroLimit);
        }
        if self.end < self.start {
            return Err(QueryError::InvertedRange {
                start: format_date(self.start),
                end: format_date(self.end),
            });
        }

        Ok(BarsQuery {
            ticker: self.ticker,
            start: self.start,
            end: self.end,
            multiplier: self.multiplier,
            timespan: self.timespan,
            adjusted: self.adjusted,
            sort_order: self.sort_order,
            limit: self.limit,
            api_key,
        })
    }
}

/// Ticker reference-data request.
#[derive(Clone, PartialEq, Eq)]
pub struct DetailsQuery {
    ticker: String,
    as_of_date: Option<Date>,
    api_key: String,
}

impl DetailsQuery {
    pub fn new(
        ticker: impl Into<String>,
        as_of_date: Option<Date>,
        api_key: impl Into<String>,
    ) -> Result<Self, QueryError> {
        let ticker = ticker.into();
        let api_key = api_key.into();
        validate_ticker(&ticker)?;
        validate_api_key(&api_key)?;

        Ok(Self {
            ticker,
            as_of_date,
            api_key,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub const fn as_of_date(&self) -> Option<Date> {
        self.as_of_date
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Debug for DetailsQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailsQuery")
            .field("ticker", &self.ticker)
            .field("as_of_date", &self.as_of_date.map(format_date))
            .field("api_key", &REDACTED)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_date;

    fn date(value: &str) -> Date {
        parse_date(value).expect("valid date")
    }

    #[test]
    fn builder_applies_documented_defaults() {
        let query = BarsQuery::builder("Apple", date("2022-01-01"), date("2022-06-01"))
            .build("K")
            .expect("valid query");

        assert_eq!(query.multiplier(), 1);
        assert_eq!(query.timespan(), Timespan::Day);
        assert!(query.adjusted());
        assert_eq!(query.sort_order(), SortOrder::Ascending);
        assert_eq!(query.limit(), 50_000);
    }

    #[test]
    fn rejects_zero_multiplier_and_limit() {
        let builder = BarsQuery::builder("AAPL", date("2022-01-01"), date("2022-06-01"));

        let err = builder.clone().multiplier(0).build("K").expect_err("must fail");
        assert_eq!(err, QueryError::ZeroMultiplier);

        let err = builder.limit(0).build("K").expect_err("must fail");
        assert_eq!(err, QueryError::ZeroLimit);
    }

    #[test]
    fn rejects_inverted_range() {
        let err = BarsQuery::builder("AAPL", date("2022-06-01"), date("2022-01-01"))
            .build("K")
            .expect_err("must fail");
        assert!(matches!(err, QueryError::InvertedRange { .. }));
    }

    #[test]
    fn requires_ticker_and_api_key() {
        let err = DetailsQuery::new("  ", None, "K").expect_err("must fail");
        assert_eq!(err, QueryError::EmptyTicker);

        let err = DetailsQuery::new("AAPL", None, "").expect_err("must fail");
        assert_eq!(err, QueryError::EmptyApiKey);
    }

    #[test]
    fn debug_output_never_contains_api_key() {
        let bars = BarsQuery::builder("AAPL", date("2022-01-01"), date("2022-01-31"))
            .build("super-secret")
            .expect("valid query");
        let details = DetailsQuery::new("AAPL", Some(date("2023-01-03")), "super-secret")
            .expect("valid query");

        for rendered in [format!("{bars:?}"), format!("{details:?}")] {
            assert!(!rendered.contains("super-secret"), "{rendered}");
            assert!(rendered.contains(REDACTED));
        }
    }

    #[test]
    fn adjusted_flag_accepts_only_booleans() {
        assert_eq!(parse_adjusted("TRUE"), Ok(true));
        assert_eq!(parse_adjusted("false"), Ok(false));
        assert!(matches!(
            parse_adjusted("yes"),
            Err(QueryError::InvalidAdjusted { .. })
        ));
    }
}
