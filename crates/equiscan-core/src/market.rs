//! Synthetic NSE market data.
//!
//! [`MarketGenerator`] turns a fixed catalog of large-cap templates into a
//! fresh list of [`Stock`] records for a [`Timeframe`]. Every call draws new
//! random values; nothing is cached between calls.

use std::cmp::Ordering;

use crate::{PricePoint, Stock, Ticker, Timeframe, ValidationError};

/// Share of the base price below which a random walk never starts.
const MIN_START_FRACTION: f64 = 0.05;
/// Smallest price a history point may carry after rounding.
const MIN_PRICE: f64 = 0.01;

/// Static description of a catalog stock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockTemplate {
    pub ticker: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub base_price: f64,
}

const fn template(
    ticker: &'static str,
    name: &'static str,
    sector: &'static str,
    base_price: f64,
) -> StockTemplate {
    StockTemplate {
        ticker,
        name,
        sector,
        base_price,
    }
}

/// Large caps tracked by the dashboard.
pub const CATALOG: [StockTemplate; 12] = [
    template("RELIANCE", "Reliance Industries Ltd", "Energy & Retail", 2985.40),
    template("TCS", "Tata Consultancy Services", "IT Services", 4120.15),
    template("HDFCBANK", "HDFC Bank Ltd", "Banking", 1745.50),
    template("INFY", "Infosys Ltd", "IT Services", 1890.30),
    template("ICICIBANK", "ICICI Bank Ltd", "Banking", 1210.20),
    template("BHARTIARTL", "Bharti Airtel Ltd", "Telecom", 1540.10),
    template("SBIN", "State Bank of India", "Banking", 815.45),
    template("ITC", "ITC Ltd", "Consumer Goods", 495.20),
    template("LT", "Larsen & Toubro Ltd", "Infrastructure", 3620.15),
    template("ADANIENT", "Adani Enterprises", "Conglomerate", 3120.90),
    template("TATAMOTORS", "Tata Motors Ltd", "Automobile", 945.45),
    template("HINDUNILVR", "Hindustan Unilever", "Consumer Goods", 2520.10),
];

/// Producer of the stock list for a timeframe.
///
/// [`MarketGenerator`] is the production source; the dashboard accepts any
/// implementation so tests can script the lists it sees.
pub trait StockSource {
    fn stocks(&mut self, timeframe: Timeframe) -> Vec<Stock>;
}

/// Random stock list generator.
#[derive(Debug, Clone)]
pub struct MarketGenerator {
    rng: fastrand::Rng,
}

impl Default for MarketGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketGenerator {
    /// Generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible generator for tests and `--seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Build the catalog for `timeframe`, sorted by descending percent change.
    pub fn generate_stocks(&mut self, timeframe: Timeframe) -> Vec<Stock> {
        let multiplier = timeframe.volatility_multiplier();
        let points = timeframe.history_points();

        let mut stocks: Vec<Stock> = CATALOG
            .iter()
            .map(|template| {
                let change_percent = round2(self.rng.f64() * multiplier * 100.0);
                let history = self.random_walk(template.base_price, points, multiplier * 0.5);
                let market_cap = format!("₹{:.1}L Cr", self.rng.f64() * 15.0 + 5.0);
                let volume = format!("{:.1}M", self.rng.f64() * 10.0 + 2.0);

                Stock {
                    ticker: Ticker::from_static(template.ticker),
                    name: template.name.to_owned(),
                    price: template.base_price,
                    change_percent,
                    market_cap,
                    sector: template.sector.to_owned(),
                    volume,
                    history,
                    description: format!(
                        "{} is a cornerstone of the Indian economy, operating as a market leader in the {} domain.",
                        template.name, template.sector
                    ),
                }
            })
            .collect();

        // `sort_by` is stable, so equal changes keep catalog order.
        stocks.sort_by(|a, b| {
            b.change_percent
                .partial_cmp(&a.change_percent)
                .unwrap_or(Ordering::Equal)
        });
        stocks
    }

    /// String entry point for callers holding an unparsed timeframe label.
    pub fn generate_stocks_for(&mut self, timeframe: &str) -> Result<Vec<Stock>, ValidationError> {
        let timeframe = timeframe.parse::<Timeframe>()?;
        Ok(self.generate_stocks(timeframe))
    }

    fn random_walk(&mut self, base_price: f64, points: usize, volatility: f64) -> Vec<PricePoint> {
        let mut current = base_price * (1.0 - volatility).max(MIN_START_FRACTION);

        (0..points)
            .map(|index| {
                let shock = self.rng.f64() * volatility * 2.0 - volatility;
                current += current * shock * 0.5;
                PricePoint {
                    time: index.to_string(),
                    price: round2(current).max(MIN_PRICE),
                }
            })
            .collect()
    }
}

impl StockSource for MarketGenerator {
    fn stocks(&mut self, timeframe: Timeframe) -> Vec<Stock> {
        self.generate_stocks(timeframe)
    }
}

/// Stocks whose ticker or name contains `query`, in list order.
pub fn filter_stocks<'a>(stocks: &'a [Stock], query: &str) -> Vec<&'a Stock> {
    stocks
        .iter()
        .filter(|stock| stock.matches_query(query))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
