//! # Equiscan Core
//!
//! Simulated NSE/BSE market data, fabricated news and AI market commentary
//! behind the equiscan dashboard.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`dashboard`] | View state controller with stale-reply protection |
//! | [`domain`] | Domain models (Stock, Timeframe, MarketInsight, NewsItem) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP client abstraction |
//! | [`insight`] | Generative-language insight client and fallback |
//! | [`market`] | Random stock list and price history generator |
//! | [`news`] | Templated news headlines |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use equiscan_core::{Dashboard, InsightClient, InsightConfig, MarketGenerator, ReqwestHttpClient, Timeframe};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = InsightClient::new(Arc::new(ReqwestHttpClient::new()), InsightConfig::from_env());
//!     let mut dashboard = Dashboard::new(MarketGenerator::new(), Timeframe::OneDay);
//!
//!     dashboard.refresh_insight(&client).await;
//!     if let Some(insight) = dashboard.insight() {
//!         println!("{}: {}", insight.sentiment, insight.summary);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / View     │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Dashboard      │────▶│ Market Generator │
//! │  (state)        │────▶│ News Fabricator  │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Insight Client  │────▶│ HTTP Client      │
//! │ (+ fallback)    │     │ (reqwest/noop)   │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Insight failures never reach the caller of
//! [`InsightClient::fetch_insight`]; they are logged through `tracing` and
//! replaced with [`fallback_insight`]. Unknown timeframe labels fail fast with
//! [`ValidationError::InvalidTimeframe`].
//!
//! ## Security
//!
//! - The API key is injected through [`InsightConfig`] and never logged
//! - Tickers are validated before they reach the controller

pub mod dashboard;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod insight;
pub mod market;
pub mod news;

// Dashboard controller
pub use dashboard::{Dashboard, DashboardSnapshot, InsightTicket};

// Domain models
pub use domain::{MarketInsight, NewsItem, PricePoint, RiskLevel, Sentiment, Stock, Ticker, Timeframe};

// Error types
pub use error::{DashboardError, InsightError, ValidationError};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

// Insight client
pub use insight::{build_prompt, fallback_insight, response_schema, InsightClient, InsightConfig};

// Generators
pub use market::{filter_stocks, MarketGenerator, StockSource, StockTemplate, CATALOG};
pub use news::generate_news;
