mod dashboard;
mod insight;
mod news;
mod stocks;

use std::str::FromStr;
use std::sync::Arc;

use equiscan_core::{
    DashboardError, HttpClient, InsightClient, InsightConfig, MarketGenerator, NoopHttpClient,
    ReqwestHttpClient, Stock, Ticker, Timeframe,
};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Rendered output of one command.
#[derive(Debug)]
pub struct CommandResult {
    pub command: &'static str,
    pub data: Value,
}

impl CommandResult {
    pub fn new(command: &'static str, data: Value) -> Self {
        Self { command, data }
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let timeframe = Timeframe::from_str(&cli.timeframe)?;
    let generator = cli
        .seed
        .map_or_else(MarketGenerator::new, MarketGenerator::with_seed);

    match &cli.command {
        Command::Stocks(args) => stocks::run(args, generator, timeframe),
        Command::News(args) => news::run(args, generator, timeframe),
        Command::Insight(args) => {
            insight::run(args, generator, timeframe, &insight_client(cli)).await
        }
        Command::Dashboard(args) => {
            dashboard::run(args, generator, timeframe, &insight_client(cli)).await
        }
    }
}

fn insight_client(cli: &Cli) -> InsightClient {
    let mut config = InsightConfig::from_env();
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }

    let http_client: Arc<dyn HttpClient> = if cli.offline {
        Arc::new(NoopHttpClient)
    } else {
        Arc::new(ReqwestHttpClient::new())
    };

    if !cli.offline && config.api_key.trim().is_empty() {
        tracing::warn!("no insight API key configured; using fallback insights");
    }
    tracing::debug!(?config, offline = cli.offline, "insight client configured");
    InsightClient::new(http_client, config)
}

/// Generate the list for `timeframe` and pick the stock named by `raw`.
fn find_stock(
    mut generator: MarketGenerator,
    timeframe: Timeframe,
    raw: &str,
) -> Result<Stock, CliError> {
    let ticker = Ticker::parse(raw)?;
    generator
        .generate_stocks(timeframe)
        .into_iter()
        .find(|stock| stock.ticker == ticker)
        .ok_or_else(|| {
            CliError::from(DashboardError::UnknownTicker {
                ticker: ticker.to_string(),
            })
        })
}
