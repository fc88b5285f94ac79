use marketwire_core::{redact_api_key, MarketDataClient};
use serde_json::json;

use crate::cli::{UrlArgs, UrlEndpoint};
use crate::error::CliError;

use super::CommandResult;

// Lets `url` preview requests before a key is configured; never sent.
const PLACEHOLDER_KEY: &str = "API_KEY";

pub fn run(
    args: &UrlArgs,
    client: &MarketDataClient,
    api_key: Option<&str>,
) -> Result<CommandResult, CliError> {
    let api_key = api_key
        .filter(|key| !key.trim().is_empty())
        .unwrap_or(PLACEHOLDER_KEY);

    let url = match &args.endpoint {
        UrlEndpoint::Bars(bars) => client.build_bars_url(&super::bars_query(bars, api_key)?),
        UrlEndpoint::Details(details) => {
            client.build_details_url(&super::details_query(details, api_key)?)
        }
    };

    Ok(CommandResult::ok(json!({ "url": redact_api_key(&url) })))
}
