//! Behavior tests for the synthetic market generator and news fabricator.

use equiscan_core::{generate_news, MarketGenerator, Timeframe, ValidationError, CATALOG};

// =============================================================================
// Generator: shape of the stock list
// =============================================================================

#[test]
fn every_timeframe_yields_the_full_catalog_with_configured_history() {
    // Given: A seeded generator
    let mut generator = MarketGenerator::with_seed(2024);

    for timeframe in Timeframe::ALL {
        // When: The list for each timeframe is generated
        let stocks = generator.generate_stocks(timeframe);

        // Then: One record per catalog entry, each with the configured history length
        assert_eq!(stocks.len(), CATALOG.len(), "{timeframe}");
        for stock in &stocks {
            assert_eq!(stock.history.len(), timeframe.history_points());
            let labels: Vec<String> = stock.history.iter().map(|p| p.time.clone()).collect();
            let expected: Vec<String> = (0..timeframe.history_points()).map(|i| i.to_string()).collect();
            assert_eq!(labels, expected, "time labels must count up from 0");
        }
    }
}

#[test]
fn history_prices_are_rounded_to_two_decimals() {
    let mut generator = MarketGenerator::with_seed(99);

    for timeframe in Timeframe::ALL {
        for stock in generator.generate_stocks(timeframe) {
            for point in &stock.history {
                let cents = point.price * 100.0;
                assert!(
                    (cents - cents.round()).abs() < 1e-6,
                    "{} {} has more than two decimals",
                    stock.ticker,
                    point.price
                );
                assert!(point.price > 0.0);
            }
        }
    }
}

#[test]
fn list_is_sorted_by_descending_change() {
    let mut generator = MarketGenerator::with_seed(17);

    for timeframe in Timeframe::ALL {
        let stocks = generator.generate_stocks(timeframe);
        assert!(
            stocks
                .windows(2)
                .all(|pair| pair[0].change_percent >= pair[1].change_percent),
            "{timeframe} list is not sorted"
        );
    }
}

#[test]
fn tickers_are_unique_within_a_list() {
    let stocks = MarketGenerator::with_seed(5).generate_stocks(Timeframe::OneYear);
    let mut tickers: Vec<&str> = stocks.iter().map(|s| s.ticker.as_str()).collect();
    tickers.sort_unstable();
    tickers.dedup();
    assert_eq!(tickers.len(), stocks.len());
}

#[test]
fn current_price_is_the_catalog_base_price() {
    let stocks = MarketGenerator::with_seed(8).generate_stocks(Timeframe::OneDay);
    let reliance = stocks
        .iter()
        .find(|s| s.ticker.as_str() == "RELIANCE")
        .expect("catalog has RELIANCE");
    assert_eq!(reliance.price, 2985.40);
    assert_eq!(reliance.sector, "Energy & Retail");
}

#[test]
fn unknown_timeframe_label_fails_fast() {
    let err = MarketGenerator::with_seed(1)
        .generate_stocks_for("10Y")
        .expect_err("unknown timeframe must be rejected");
    assert_eq!(
        err,
        ValidationError::InvalidTimeframe {
            value: String::from("10Y")
        }
    );
}

// =============================================================================
// News fabricator
// =============================================================================

#[test]
fn news_has_five_items_mentioning_the_stock() {
    let stocks = MarketGenerator::with_seed(3).generate_stocks(Timeframe::OneMonth);

    for stock in &stocks {
        let news = generate_news(stock);
        assert_eq!(news.len(), 5);
        for item in &news {
            assert!(
                item.headline.contains(stock.ticker.as_str()) || item.headline.contains(&stock.name),
                "headline '{}' does not mention {}",
                item.headline,
                stock.ticker
            );
        }
    }
}

#[test]
fn news_is_identical_for_identical_stock() {
    let stocks = MarketGenerator::with_seed(3).generate_stocks(Timeframe::OneDay);
    let first = serde_json::to_string(&generate_news(&stocks[0])).expect("serialize");
    let second = serde_json::to_string(&generate_news(&stocks[0])).expect("serialize");
    assert_eq!(first, second);
}

#[test]
fn news_sources_rotate_in_fixed_order() {
    let stocks = MarketGenerator::with_seed(3).generate_stocks(Timeframe::OneDay);
    let news = generate_news(&stocks[0]);

    let sources: Vec<&str> = news.iter().map(|n| n.source.as_str()).collect();
    assert_eq!(
        sources,
        vec!["Economic Times", "Moneycontrol", "Mint", "CNBC TV18", "Business Standard"]
    );
    let recency: Vec<&str> = news.iter().map(|n| n.time_ago.as_str()).collect();
    assert_eq!(recency, vec!["2h ago", "5h ago", "8h ago", "1d ago", "1d ago"]);
}

#[test]
fn news_serializes_with_time_ago_field() {
    let stocks = MarketGenerator::with_seed(3).generate_stocks(Timeframe::OneDay);
    let value = serde_json::to_value(&generate_news(&stocks[0])[0]).expect("serialize");
    assert_eq!(value["timeAgo"], "2h ago");
    assert_eq!(value["id"], "news-0");
    assert_eq!(value["url"], "#");
}
