//! Templated headlines for the selected stock.

use crate::{NewsItem, Stock};

const PLACEHOLDER_URL: &str = "#";

/// Five headlines interpolating the stock's name, ticker and sector.
///
/// The output depends only on those fields, so two calls with the same
/// stock return identical items.
pub fn generate_news(stock: &Stock) -> Vec<NewsItem> {
    let name = stock.name.as_str();
    let ticker = stock.ticker.as_str();
    let sector = stock.sector.as_str();

    let templates = [
        (
            format!("{name} shares surge as quarterly profits beat analyst estimates by 12%."),
            "Economic Times",
            "2h ago",
        ),
        (
            format!(
                "Foreign Institutional Investors (FIIs) increase stake in {ticker} following positive sector outlook."
            ),
            "Moneycontrol",
            "5h ago",
        ),
        (
            format!("How the latest RBI repo rate decision impacts {sector} stocks like {ticker}."),
            "Mint",
            "8h ago",
        ),
        (
            format!(
                "{name} announces strategic expansion into green energy and digital transformation."
            ),
            "CNBC TV18",
            "1d ago",
        ),
        (
            format!(
                "Market Analysis: Why {ticker} remains a top pick for long-term investors in the Indian market."
            ),
            "Business Standard",
            "1d ago",
        ),
    ];

    templates
        .into_iter()
        .enumerate()
        .map(|(index, (headline, source, time_ago))| NewsItem {
            id: format!("news-{index}"),
            headline,
            source: source.to_owned(),
            time_ago: time_ago.to_owned(),
            url: PLACEHOLDER_URL.to_owned(),
        })
        .collect()
}
