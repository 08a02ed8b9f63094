//! Dashboard state controller.
//!
//! [`Dashboard`] owns everything the view renders: the timeframe, the
//! generated stock list, the selection, the latest insight and news, the
//! search query and the insight-loading flag.
//!
//! Insight retrieval is split in two so the caller decides how to await it:
//! a state change hands out an [`InsightTicket`], and
//! [`Dashboard::complete_insight`] applies the result only if that ticket is
//! still the newest one. A reply for a superseded selection is dropped.
//!
//! ```rust,ignore
//! let mut dashboard = Dashboard::new(MarketGenerator::new(), Timeframe::OneDay);
//! dashboard.refresh_insight(&client).await;
//!
//! if let Some(ticket) = dashboard.set_timeframe(Timeframe::OneYear) {
//!     let insight = client.fetch_insight(ticket.stock(), ticket.timeframe()).await;
//!     dashboard.complete_insight(&ticket, insight);
//! }
//! ```

use serde::Serialize;

use crate::market::{filter_stocks, StockSource};
use crate::news::generate_news;
use crate::{
    DashboardError, InsightClient, MarketGenerator, MarketInsight, NewsItem, Stock, Ticker,
    Timeframe,
};

/// Pending insight request for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightTicket {
    generation: u64,
    timeframe: Timeframe,
    stock: Stock,
}

impl InsightTicket {
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn ticker(&self) -> &Ticker {
        &self.stock.ticker
    }

    /// Stock record as it was when the request started.
    pub fn stock(&self) -> &Stock {
        &self.stock
    }
}

/// Serializable view of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub timeframe: Timeframe,
    pub search_query: String,
    pub stocks: Vec<Stock>,
    pub selected: Option<Stock>,
    /// Lowest and highest price of the selected stock's history.
    pub price_range: Option<(f64, f64)>,
    pub insight: Option<MarketInsight>,
    pub news: Vec<NewsItem>,
    pub loading_insight: bool,
}

#[derive(Debug, Clone)]
pub struct Dashboard<S = MarketGenerator> {
    source: S,
    timeframe: Timeframe,
    stocks: Vec<Stock>,
    selected: Option<Ticker>,
    insight: Option<MarketInsight>,
    news: Vec<NewsItem>,
    loading_insight: bool,
    search_query: String,
    generation: u64,
}

impl<S: StockSource> Dashboard<S> {
    /// Generate the list for `timeframe` and select its top gainer.
    ///
    /// No insight is requested yet; call [`Dashboard::begin_insight`] or
    /// [`Dashboard::refresh_insight`].
    pub fn new(mut source: S, timeframe: Timeframe) -> Self {
        let stocks = source.stocks(timeframe);
        let selected = stocks.first().map(|stock| stock.ticker.clone());

        Self {
            source,
            timeframe,
            stocks,
            selected,
            insight: None,
            news: Vec::new(),
            loading_insight: false,
            search_query: String::new(),
            generation: 0,
        }
    }

    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn selected_ticker(&self) -> Option<&Ticker> {
        self.selected.as_ref()
    }

    pub fn selected_stock(&self) -> Option<&Stock> {
        let ticker = self.selected.as_ref()?;
        self.stocks.iter().find(|stock| &stock.ticker == ticker)
    }

    pub fn insight(&self) -> Option<&MarketInsight> {
        self.insight.as_ref()
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub const fn is_loading_insight(&self) -> bool {
        self.loading_insight
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Switch timeframe and regenerate the list.
    ///
    /// The current ticker stays selected when it is still listed; otherwise
    /// the new top gainer is selected. Returns the insight request for the
    /// resulting selection.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> Option<InsightTicket> {
        self.timeframe = timeframe;
        self.stocks = self.source.stocks(timeframe);

        let still_listed = self
            .selected
            .as_ref()
            .is_some_and(|ticker| self.stocks.iter().any(|stock| &stock.ticker == ticker));
        if !still_listed {
            self.selected = self.stocks.first().map(|stock| stock.ticker.clone());
        }

        self.begin_insight()
    }

    /// Select a listed stock and start its insight request.
    pub fn select(&mut self, ticker: &Ticker) -> Result<InsightTicket, DashboardError> {
        if !self.stocks.iter().any(|stock| &stock.ticker == ticker) {
            return Err(DashboardError::UnknownTicker {
                ticker: ticker.to_string(),
            });
        }

        self.selected = Some(ticker.clone());
        self.begin_insight()
            .ok_or_else(|| DashboardError::UnknownTicker {
                ticker: ticker.to_string(),
            })
    }

    /// Refresh news for the selection and hand out a new insight ticket.
    ///
    /// Any ticket issued earlier becomes stale, also when nothing is
    /// selected and no new ticket is issued.
    pub fn begin_insight(&mut self) -> Option<InsightTicket> {
        self.generation += 1;

        let Some(stock) = self.selected_stock().cloned() else {
            self.news.clear();
            self.loading_insight = false;
            return None;
        };

        self.news = generate_news(&stock);
        self.loading_insight = true;

        tracing::debug!(
            ticker = %stock.ticker,
            timeframe = %self.timeframe,
            generation = self.generation,
            "insight request started"
        );

        Some(InsightTicket {
            generation: self.generation,
            timeframe: self.timeframe,
            stock,
        })
    }

    /// Store `insight` if `ticket` is still the newest request.
    ///
    /// Returns `false` and leaves state untouched for a stale ticket.
    pub fn complete_insight(&mut self, ticket: &InsightTicket, insight: MarketInsight) -> bool {
        let current = ticket.generation == self.generation
            && ticket.timeframe == self.timeframe
            && self.selected.as_ref() == Some(ticket.ticker());

        if !current {
            tracing::debug!(
                ticker = %ticket.ticker(),
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale insight"
            );
            return false;
        }

        self.insight = Some(insight);
        self.loading_insight = false;
        true
    }

    /// Start a request for the current selection and await it.
    pub async fn refresh_insight(&mut self, client: &InsightClient) -> bool {
        let Some(ticket) = self.begin_insight() else {
            return false;
        };

        let insight = client.fetch_insight(ticket.stock(), ticket.timeframe()).await;
        self.complete_insight(&ticket, insight)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Stocks matching the search query, in list order.
    pub fn visible_stocks(&self) -> Vec<&Stock> {
        filter_stocks(&self.stocks, &self.search_query)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            timeframe: self.timeframe,
            search_query: self.search_query.clone(),
            stocks: self.visible_stocks().into_iter().cloned().collect(),
            selected: self.selected_stock().cloned(),
            price_range: self.selected_stock().and_then(Stock::history_range),
            insight: self.insight.clone(),
            news: self.news.clone(),
            loading_insight: self.loading_insight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RiskLevel, Sentiment};

    fn insight(summary: &str) -> MarketInsight {
        MarketInsight {
            summary: summary.to_owned(),
            sentiment: Sentiment::Neutral,
            key_drivers: Vec::new(),
            risk_level: RiskLevel::Low,
        }
    }

    #[test]
    fn new_selects_top_gainer_without_loading() {
        let dashboard = Dashboard::new(MarketGenerator::with_seed(4), Timeframe::OneDay);
        let top = &dashboard.stocks()[0];

        assert_eq!(dashboard.selected_ticker(), Some(&top.ticker));
        assert!(!dashboard.is_loading_insight());
        assert!(dashboard.news().is_empty());
        assert!(dashboard.insight().is_none());
    }

    #[test]
    fn begin_insight_fills_news_and_sets_loading() {
        let mut dashboard = Dashboard::new(MarketGenerator::with_seed(4), Timeframe::OneDay);
        let ticket = dashboard.begin_insight().expect("selection exists");

        assert!(dashboard.is_loading_insight());
        assert_eq!(dashboard.news().len(), 5);
        assert_eq!(Some(ticket.ticker()), dashboard.selected_ticker());
        assert_eq!(ticket.generation(), 1);
    }

    #[test]
    fn completing_current_ticket_clears_loading() {
        let mut dashboard = Dashboard::new(MarketGenerator::with_seed(4), Timeframe::OneDay);
        let ticket = dashboard.begin_insight().expect("selection exists");

        assert!(dashboard.complete_insight(&ticket, insight("fresh")));
        assert!(!dashboard.is_loading_insight());
        assert_eq!(dashboard.insight().map(|i| i.summary.as_str()), Some("fresh"));
    }

    #[test]
    fn selecting_unknown_ticker_fails_without_side_effects() {
        let mut dashboard = Dashboard::new(MarketGenerator::with_seed(4), Timeframe::OneDay);
        let before = dashboard.selected_ticker().cloned();

        let err = dashboard
            .select(&Ticker::parse("WIPRO").expect("valid"))
            .expect_err("must fail");

        assert_eq!(
            err,
            DashboardError::UnknownTicker {
                ticker: String::from("WIPRO")
            }
        );
        assert_eq!(dashboard.selected_ticker().cloned(), before);
        assert!(!dashboard.is_loading_insight());
    }

    #[test]
    fn search_filters_visible_stocks_only() {
        let mut dashboard = Dashboard::new(MarketGenerator::with_seed(4), Timeframe::OneDay);
        dashboard.set_search("tata");

        let visible: Vec<&str> = dashboard
            .visible_stocks()
            .iter()
            .map(|stock| stock.ticker.as_str())
            .collect();
        assert_eq!(visible.len(), 2);
        assert!(visible.contains(&"TCS"));
        assert!(visible.contains(&"TATAMOTORS"));
        assert_eq!(dashboard.stocks().len(), 12);
        assert_eq!(dashboard.snapshot().stocks.len(), 2);
    }
}
