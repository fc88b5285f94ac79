mod bars;
mod details;
mod resolve;
mod url;

use std::str::FromStr;
use std::time::Instant;

use marketwire_core::{
    parse_adjusted, parse_date, BarsQuery, ClientConfig, DetailsQuery, MarketDataClient,
    SortOrder, Timespan,
};
use serde_json::Value;

use crate::cli::{BarsArgs, Cli, Command, DetailsArgs};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub latency_ms: u64,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            latency_ms: 0,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let client = MarketDataClient::new(client_config(cli)?);
    let started = Instant::now();

    let result = match &cli.command {
        Command::Resolve(args) => resolve::run(args, &client)?,
        Command::Bars(args) => bars::run(args, &client, required_api_key(cli)?).await?,
        Command::Details(args) => details::run(args, &client, required_api_key(cli)?).await?,
        Command::Url(args) => url::run(args, &client, cli.api_key.as_deref())?,
    };

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    Ok(result.with_latency(latency_ms))
}

fn client_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if cli.timeout_ms.is_some() {
        config = config.with_timeout_ms(cli.timeout_ms);
    }
    Ok(config)
}

fn required_api_key(cli: &Cli) -> Result<&str, CliError> {
    cli.api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or(CliError::MissingApiKey)
}

pub(crate) fn bars_query(args: &BarsArgs, api_key: &str) -> Result<BarsQuery, CliError> {
    let query = BarsQuery::builder(
        args.ticker.as_str(),
        parse_date(&args.from)?,
        parse_date(&args.to)?,
    )
    .multiplier(args.multiplier)
    .timespan(Timespan::from_str(&args.timespan)?)
    .adjusted(parse_adjusted(&args.adjusted)?)
    .sort_order(SortOrder::from_str(&args.sort)?)
    .limit(args.limit)
    .build(api_key)?;
    Ok(query)
}

pub(crate) fn details_query(args: &DetailsArgs, api_key: &str) -> Result<DetailsQuery, CliError> {
    let as_of_date = args.date.as_deref().map(parse_date).transpose()?;
    Ok(DetailsQuery::new(args.ticker.as_str(), as_of_date, api_key)?)
}
