use serde::Serialize;

use equiscan_core::{generate_news, MarketGenerator, NewsItem, Ticker, Timeframe};

use crate::cli::TickerArgs;
use crate::error::CliError;

use super::{find_stock, CommandResult};

#[derive(Debug, Serialize)]
struct NewsResponseData {
    ticker: Ticker,
    news: Vec<NewsItem>,
}

pub fn run(
    args: &TickerArgs,
    generator: MarketGenerator,
    timeframe: Timeframe,
) -> Result<CommandResult, CliError> {
    let stock = find_stock(generator, timeframe, &args.ticker)?;
    let news = generate_news(&stock);
    let data = serde_json::to_value(NewsResponseData {
        ticker: stock.ticker,
        news,
    })?;

    Ok(CommandResult::new("news", data))
}
