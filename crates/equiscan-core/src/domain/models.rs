use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Ticker;

/// One point of a simulated price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Synthetic time index rendered as a label ("0", "1", ...).
    pub time: String,
    pub price: f64,
}

/// Dashboard stock record for one timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub ticker: Ticker,
    pub name: String,
    pub price: f64,
    pub change_percent: f64,
    pub market_cap: String,
    pub sector: String,
    pub volume: String,
    pub history: Vec<PricePoint>,
    pub description: String,
}

impl Stock {
    /// Case-insensitive substring search over ticker and name.
    ///
    /// The query is used as typed: an empty query matches every stock, and
    /// surrounding whitespace is part of the needle.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();

        self.ticker.as_str().to_lowercase().contains(&needle)
            || self.name.to_lowercase().contains(&needle)
    }

    /// Lowest and highest price in the history, if any.
    pub fn history_range(&self) -> Option<(f64, f64)> {
        self.history.iter().fold(None, |range, point| match range {
            None => Some((point.price, point.price)),
            Some((low, high)) => Some((low.min(point.price), high.max(point.price))),
        })
    }
}

/// Fabricated headline shown under the selected stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub headline: String,
    pub source: String,
    pub time_ago: String,
    pub url: String,
}

/// Market direction reported by an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Self; 3] = [Self::Bullish, Self::Bearish, Self::Neutral];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
            Self::Neutral => "Neutral",
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk bucket reported by an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual commentary for a stock, either generated remotely or the
/// static fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsight {
    pub summary: String,
    pub sentiment: Sentiment,
    pub key_drivers: Vec<String>,
    pub risk_level: RiskLevel,
}
