use marketwire_core::MarketDataClient;

use crate::cli::DetailsArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(
    args: &DetailsArgs,
    client: &MarketDataClient,
    api_key: &str,
) -> Result<CommandResult, CliError> {
    let query = super::details_query(args, api_key)?;
    log::info!("fetching ticker details: {query:?}");

    let details = client.fetch_details(&query).await?;
    Ok(CommandResult::ok(serde_json::to_value(details)?))
}
