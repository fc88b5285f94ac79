//! Request building and response projection for the aggregates and
//! ticker-details endpoints.
//!
//! Every fetch is a single GET: no retry, no pagination, no caching.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::domain::{format_date, Bar, BarsQuery, DetailsQuery, TickerDetails};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::resolver::TickerResolver;
use crate::MarketDataError;

const API_KEY_PARAM: &str = "apiKey=";

/// Client for the market-data REST API.
#[derive(Clone)]
pub struct MarketDataClient {
    http_client: Arc<dyn HttpClient>,
    config: ClientConfig,
    resolver: TickerResolver,
}

impl Default for MarketDataClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl MarketDataClient {
    pub fn new(config: ClientConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(config.user_agent()));
        Self::with_http_client(http_client, config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
            resolver: TickerResolver::default(),
        }
    }

    pub fn with_resolver(mut self, resolver: TickerResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn resolver(&self) -> &TickerResolver {
        &self.resolver
    }

    /// `{base}/v2/aggs/ticker/{symbol}/range/{multiplier}/{timespan}/{start}/{end}/`
    /// followed by `sort`, `adjusted`, `limit` and `apiKey`, in that order.
    pub fn build_bars_url(&self, query: &BarsQuery) -> String {
        let symbol = self.resolver.resolve(query.ticker());
        format!(
            "{}?sort={}&adjusted={}&limit={}&{API_KEY_PARAM}{}",
            self.bars_path(query, &symbol),
            query.sort_order().as_str(),
            query.adjusted(),
            query.limit(),
            urlencoding::encode(query.api_key()),
        )
    }

    /// `{base}/v3/reference/tickers/{symbol}` with an optional leading `date`.
    pub fn build_details_url(&self, query: &DetailsQuery) -> String {
        let symbol = self.resolver.resolve(query.ticker());
        let api_key = urlencoding::encode(query.api_key());
        match query.as_of_date() {
            Some(date) => format!(
                "{}?date={}&{API_KEY_PARAM}{api_key}",
                self.details_path(&symbol),
                format_date(date),
            ),
            None => format!("{}?{API_KEY_PARAM}{api_key}", self.details_path(&symbol)),
        }
    }

    pub async fn fetch_bars(&self, query: &BarsQuery) -> Result<Vec<Bar>, MarketDataError> {
        let symbol = self.resolver.resolve(query.ticker());
        log::debug!(
            "requesting aggregates {} ({} rows max)",
            self.bars_path(query, &symbol),
            query.limit()
        );

        let body = self.get(self.build_bars_url(query)).await?;
        let bars = project_bars(&body, &symbol).inspect_err(|error| {
            log::warn!("aggregates response for {symbol} could not be projected: {error}");
        })?;

        log::debug!("received {} aggregate rows for {symbol}", bars.len());
        Ok(bars)
    }

    pub async fn fetch_details(
        &self,
        query: &DetailsQuery,
    ) -> Result<TickerDetails, MarketDataError> {
        let symbol = self.resolver.resolve(query.ticker());
        log::debug!("requesting ticker details {}", self.details_path(&symbol));

        let body = self.get(self.build_details_url(query)).await?;
        project_details(&body).inspect_err(|error| {
            log::warn!("details response for {symbol} could not be projected: {error}");
        })
    }

    fn bars_path(&self, query: &BarsQuery, symbol: &str) -> String {
        format!(
            "{}/v2/aggs/ticker/{}/range/{}/{}/{}/{}/",
            self.config.base_url(),
            urlencoding::encode(symbol),
            query.multiplier(),
            query.timespan().as_str(),
            format_date(query.start()),
            format_date(query.end()),
        )
    }

    fn details_path(&self, symbol: &str) -> String {
        format!(
            "{}/v3/reference/tickers/{}",
            self.config.base_url(),
            urlencoding::encode(symbol),
        )
    }

    async fn get(&self, url: String) -> Result<String, MarketDataError> {
        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms());

        let response = self.http_client.execute(request).await.map_err(|error| {
            log::warn!("market data transport error: {}", error.message());
            MarketDataError::Transport(error)
        })?;

        if !response.is_success() {
            log::warn!("market data api returned status {}", response.status);
            return Err(MarketDataError::Api {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}

/// Replaces the `apiKey` value in a request URL, for display.
pub fn redact_api_key(url: &str) -> String {
    match url.find(API_KEY_PARAM) {
        Some(index) => {
            let value_start = index + API_KEY_PARAM.len();
            let value_end = url[value_start..]
                .find('&')
                .map_or(url.len(), |offset| value_start + offset);
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_owned(),
    }
}

/// Projects an aggregates body into bars. `fallback_ticker` is attached when
/// the body carries no top-level `ticker`.
pub fn project_bars(body: &str, fallback_ticker: &str) -> Result<Vec<Bar>, MarketDataError> {
    let response: AggregatesResponse = parse_object(body, "aggregates")?;

    let ticker = response
        .ticker
        .unwrap_or_else(|| fallback_ticker.to_owned());

    Ok(response
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|payload| normalize_bar(&ticker, payload))
        .collect())
}

/// Projects a ticker-details body into a flat record.
pub fn project_details(body: &str) -> Result<TickerDetails, MarketDataError> {
    let response: DetailsResponse = parse_object(body, "ticker details")?;

    match response.results {
        Some(Value::Object(object)) => Ok(TickerDetails::from_object(object)),
        Some(_) => Err(MarketDataError::malformed(
            "ticker details `results` is not an object",
        )),
        None => Err(MarketDataError::malformed(
            "no `results` object in ticker details response",
        )),
    }
}

fn parse_object<T>(body: &str, what: &str) -> Result<T, MarketDataError>
where
    T: serde::de::DeserializeOwned,
{
    let value: Value = serde_json::from_str(body).map_err(|e| {
        MarketDataError::malformed(format!("failed to parse {what} response: {e}"))
    })?;
    if !value.is_object() {
        return Err(MarketDataError::malformed(format!(
            "{what} response is not a JSON object"
        )));
    }

    serde_json::from_value(value).map_err(|e| {
        MarketDataError::malformed(format!("unexpected {what} response shape: {e}"))
    })
}

fn normalize_bar(ticker: &str, payload: AggregatePayload) -> Bar {
    Bar {
        ticker_symbol: ticker.to_owned(),
        volume: payload.volume,
        volume_weighted_average_price: payload.vwap,
        open: payload.open,
        close: payload.close,
        high: payload.high,
        low: payload.low,
        transaction_count: payload.transactions,
    }
}

// Wire shapes. Everything besides `ticker` and `results` is ignored.
#[derive(Debug, Deserialize)]
struct AggregatesResponse {
    #[serde(default)]
    ticker: Option<String>,
    #[serde(default)]
    results: Option<Vec<AggregatePayload>>,
}

#[derive(Debug, Deserialize)]
struct AggregatePayload {
    #[serde(rename = "v")]
    volume: f64,
    #[serde(rename = "vw")]
    vwap: f64,
    #[serde(rename = "o")]
    open: f64,
    #[serde(rename = "c")]
    close: f64,
    #[serde(rename = "h")]
    high: f64,
    #[serde(rename = "l")]
    low: f64,
    #[serde(rename = "n")]
    transactions: u64,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    results: Option<Value>,
}
