use serde_json::Value;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&result.data)?
            } else {
                serde_json::to_string(&result.data)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            for line in table_lines(result) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn table_lines(result: &CommandResult) -> Vec<String> {
    let data = &result.data;
    let mut lines = Vec::new();

    match result.command {
        "stocks" => {
            lines.push(format!("Top Gainers ({})", text(&data["timeframe"])));
            push_stock_rows(&mut lines, &data["stocks"]);
        }
        "news" => {
            lines.push(format!("Latest Indian Market News: {}", text(&data["ticker"])));
            push_news_rows(&mut lines, &data["news"]);
        }
        "insight" => {
            lines.push(format!(
                "{} ({}) change: {}%",
                text(&data["ticker"]),
                text(&data["timeframe"]),
                text(&data["changePercent"])
            ));
            push_insight_rows(&mut lines, &data["insight"]);
        }
        "dashboard" => {
            lines.push(format!("Top Gainers ({})", text(&data["timeframe"])));
            push_stock_rows(&mut lines, &data["stocks"]);

            let selected = &data["selected"];
            if selected.is_null() {
                lines.push(String::from("Select a stock to see Indian market analysis & news"));
                return lines;
            }

            lines.push(String::new());
            lines.push(format!(
                "{} ({})  ₹{}  +{}%",
                text(&selected["name"]),
                text(&selected["ticker"]),
                text(&selected["price"]),
                text(&selected["changePercent"])
            ));
            lines.push(format!(
                "Sector: {}  M-Cap: {}  Vol: {}",
                text(&selected["sector"]),
                text(&selected["marketCap"]),
                text(&selected["volume"])
            ));
            if let Some(line) = history_summary(&selected["history"], &data["priceRange"]) {
                lines.push(line);
            }

            lines.push(String::new());
            if data["loadingInsight"].as_bool().unwrap_or(false) {
                lines.push(String::from("Insight: loading..."));
            } else {
                push_insight_rows(&mut lines, &data["insight"]);
            }

            lines.push(String::new());
            push_news_rows(&mut lines, &data["news"]);
        }
        _ => {
            let pretty = serde_json::to_string_pretty(data).unwrap_or_default();
            lines.extend(pretty.lines().map(String::from));
        }
    }

    lines
}

fn push_stock_rows(lines: &mut Vec<String>, stocks: &Value) {
    let rows = stocks.as_array().map(Vec::as_slice).unwrap_or_default();
    if rows.is_empty() {
        lines.push(String::from("  No stocks found matching your search."));
        return;
    }

    for stock in rows {
        lines.push(format!(
            "  {:<12} {:<28} ₹{:>10} {:>8}%",
            text(&stock["ticker"]),
            text(&stock["name"]),
            text(&stock["price"]),
            text(&stock["changePercent"])
        ));
    }
}

fn push_news_rows(lines: &mut Vec<String>, news: &Value) {
    for item in news.as_array().map(Vec::as_slice).unwrap_or_default() {
        lines.push(format!(
            "  [{}] {} ({})",
            text(&item["source"]),
            text(&item["headline"]),
            text(&item["timeAgo"])
        ));
    }
}

fn push_insight_rows(lines: &mut Vec<String>, insight: &Value) {
    if insight.is_null() {
        lines.push(String::from("Insight: waiting for insights..."));
        return;
    }

    lines.push(format!(
        "Sentiment: {}  Risk: {}",
        text(&insight["sentiment"]),
        text(&insight["riskLevel"])
    ));
    lines.push(format!("  \"{}\"", text(&insight["summary"])));
    for driver in insight["keyDrivers"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default()
    {
        lines.push(format!("  - {}", text(driver)));
    }
}

fn history_summary(history: &Value, range: &Value) -> Option<String> {
    let prices: Vec<f64> = history
        .as_array()?
        .iter()
        .filter_map(|point| point["price"].as_f64())
        .collect();
    let first = *prices.first()?;
    let last = *prices.last()?;
    let low = range[0].as_f64()?;
    let high = range[1].as_f64()?;

    Some(format!(
        "Chart: {} points  open {first:.2}  last {last:.2}  low {low:.2}  high {high:.2}",
        prices.len()
    ))
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::from("-"),
        other => other.to_string(),
    }
}
