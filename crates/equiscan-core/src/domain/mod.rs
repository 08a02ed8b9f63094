//! # Domain Models
//!
//! Value types shared by the generator, the news fabricator, the insight
//! client and the dashboard controller.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Validated NSE ticker code |
//! | [`Timeframe`] | Lookback window (1D, 1W, 1M, 1Y, 5Y) |
//! | [`Stock`] | Simulated stock record with price history |
//! | [`PricePoint`] | One point of a price history |
//! | [`NewsItem`] | Fabricated headline |
//! | [`MarketInsight`] | Summary, [`Sentiment`], key drivers and [`RiskLevel`] |
//!
//! Enumerations are closed: a sentiment or risk level outside the known
//! variants fails to deserialize rather than flowing through as free text.

mod models;
mod ticker;
mod timeframe;

pub use models::{MarketInsight, NewsItem, PricePoint, RiskLevel, Sentiment, Stock};
pub use ticker::Ticker;
pub use timeframe::Timeframe;
