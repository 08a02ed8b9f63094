use serde::Serialize;

use equiscan_core::{InsightClient, MarketGenerator, MarketInsight, Ticker, Timeframe};

use crate::cli::TickerArgs;
use crate::error::CliError;

use super::{find_stock, CommandResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightResponseData {
    ticker: Ticker,
    timeframe: Timeframe,
    change_percent: f64,
    insight: MarketInsight,
}

pub async fn run(
    args: &TickerArgs,
    generator: MarketGenerator,
    timeframe: Timeframe,
    client: &InsightClient,
) -> Result<CommandResult, CliError> {
    let stock = find_stock(generator, timeframe, &args.ticker)?;
    let insight = client.fetch_insight(&stock, timeframe).await;

    let data = serde_json::to_value(InsightResponseData {
        ticker: stock.ticker,
        timeframe,
        change_percent: stock.change_percent,
        insight,
    })?;

    Ok(CommandResult::new("insight", data))
}
