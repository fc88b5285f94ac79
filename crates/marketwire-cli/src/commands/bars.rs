use marketwire_core::MarketDataClient;

use crate::cli::BarsArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(
    args: &BarsArgs,
    client: &MarketDataClient,
    api_key: &str,
) -> Result<CommandResult, CliError> {
    let query = super::bars_query(args, api_key)?;
    log::info!("fetching bars: {query:?}");

    let bars = client.fetch_bars(&query).await?;
    let row_count = bars.len();
    let mut result = CommandResult::ok(serde_json::to_value(bars)?);

    // pagination is not followed, so a full page may be missing rows
    if row_count >= query.limit() as usize {
        result = result.with_warning(format!(
            "result reached the limit of {} rows and may be truncated",
            query.limit()
        ));
    }
    Ok(result)
}
