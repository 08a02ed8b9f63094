use serde::Serialize;

use equiscan_core::{filter_stocks, MarketGenerator, Stock, Timeframe};

use crate::cli::StocksArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct StocksResponseData<'a> {
    timeframe: Timeframe,
    stocks: Vec<&'a Stock>,
}

pub fn run(
    args: &StocksArgs,
    mut generator: MarketGenerator,
    timeframe: Timeframe,
) -> Result<CommandResult, CliError> {
    let stocks = generator.generate_stocks(timeframe);
    let data = serde_json::to_value(StocksResponseData {
        timeframe,
        stocks: filter_stocks(&stocks, &args.search),
    })?;

    Ok(CommandResult::new("stocks", data))
}
