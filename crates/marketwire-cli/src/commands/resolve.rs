use marketwire_core::MarketDataClient;
use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    input: &'a str,
    symbol: String,
    known_alias: bool,
}

pub fn run(args: &ResolveArgs, client: &MarketDataClient) -> Result<CommandResult, CliError> {
    let resolutions = args
        .names
        .iter()
        .map(|name| match client.resolver().lookup(name) {
            Some(symbol) => Resolution {
                input: name,
                symbol: symbol.to_owned(),
                known_alias: true,
            },
            None => Resolution {
                input: name,
                symbol: name.clone(),
                known_alias: false,
            },
        })
        .collect::<Vec<_>>();

    let mut result = CommandResult::ok(serde_json::to_value(&resolutions)?);
    for resolution in resolutions.iter().filter(|r| !r.known_alias) {
        result = result.with_warning(format!(
            "'{}' is not a known company alias; passed through as a ticker",
            resolution.input
        ));
    }
    Ok(result)
}
