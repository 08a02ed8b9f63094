use std::str::FromStr;

use equiscan_core::{Dashboard, InsightClient, MarketGenerator, Ticker, Timeframe};

use crate::cli::DashboardArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(
    args: &DashboardArgs,
    generator: MarketGenerator,
    timeframe: Timeframe,
    client: &InsightClient,
) -> Result<CommandResult, CliError> {
    // Parse everything up front so bad input fails before any request.
    let selection = args.select.as_deref().map(Ticker::parse).transpose()?;
    let switch = args
        .switch
        .as_deref()
        .map(Timeframe::from_str)
        .transpose()?;

    let mut dashboard = Dashboard::new(generator, timeframe);
    dashboard.set_search(args.search.as_str());

    match selection {
        Some(ticker) => {
            let ticket = dashboard.select(&ticker)?;
            let insight = client.fetch_insight(ticket.stock(), ticket.timeframe()).await;
            dashboard.complete_insight(&ticket, insight);
        }
        None => {
            dashboard.refresh_insight(client).await;
        }
    }

    if let Some(next) = switch {
        if let Some(ticket) = dashboard.set_timeframe(next) {
            let insight = client.fetch_insight(ticket.stock(), ticket.timeframe()).await;
            dashboard.complete_insight(&ticket, insight);
        }
    }

    let data = serde_json::to_value(dashboard.snapshot())?;
    Ok(CommandResult::new("dashboard", data))
}
