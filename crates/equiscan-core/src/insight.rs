//! Remote market commentary with a static fallback.
//!
//! [`InsightClient`] asks a generative-language model for a
//! schema-constrained [`MarketInsight`] about one stock. The transport and the
//! credentials are injected at construction; the client never reads process
//! state on its own.
//!
//! [`InsightClient::fetch_insight`] cannot fail. Transport errors, non-2xx
//! statuses and replies that do not match the schema are logged and replaced
//! by [`fallback_insight`], so the dashboard always has something to show.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::http_client::{HttpClient, HttpRequest};
use crate::{InsightError, MarketInsight, RiskLevel, Sentiment, Stock, Timeframe};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const API_KEY_HEADER: &str = "x-goog-api-key";

const FALLBACK_SUMMARY: &str = "Indian market indices show high volatility. This stock maintains strong support levels despite broader sector corrections.";
const FALLBACK_DRIVERS: [&str; 3] = [
    "Nifty 50 Momentum",
    "FII Inflows",
    "Quarterly Results Expectations",
];

/// Connection settings for the insight model.
#[derive(Clone, PartialEq, Eq)]
pub struct InsightConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: String::from(DEFAULT_MODEL),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Debug for InsightConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl InsightConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Read settings from the environment.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `EQUISCAN_API_KEY` (or `GEMINI_API_KEY`, `API_KEY`) | empty |
    /// | `EQUISCAN_MODEL` | [`DEFAULT_MODEL`] |
    /// | `EQUISCAN_API_BASE_URL` | [`DEFAULT_BASE_URL`] |
    /// | `EQUISCAN_TIMEOUT_MS` | [`DEFAULT_TIMEOUT_MS`] |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = ["EQUISCAN_API_KEY", "GEMINI_API_KEY", "API_KEY"]
            .into_iter()
            .find_map(non_empty)
            .unwrap_or_default();
        let defaults = Self::default();

        Self {
            api_key,
            model: non_empty("EQUISCAN_MODEL").unwrap_or(defaults.model),
            base_url: non_empty("EQUISCAN_API_BASE_URL").unwrap_or(defaults.base_url),
            timeout_ms: non_empty("EQUISCAN_TIMEOUT_MS")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.timeout_ms),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.model)
        )
    }
}

/// Natural-language request describing the stock's recent performance.
pub fn build_prompt(stock: &Stock, timeframe: Timeframe) -> String {
    format!(
        "Analyze the following stock performance for {name} ({ticker}) in the context of the Indian Stock Market (NSE/BSE) over a {timeframe} period.\n\
Current Price: ₹{price}.\n\
Recent Change: {change}%.\n\
Sector: {sector}.\n\
\n\
Provide a brief market insight including a summary, sentiment, key drivers of the price action (mentioning Indian macroeconomic factors if relevant), and a risk level.",
        name = stock.name,
        ticker = stock.ticker,
        price = stock.price,
        change = stock.change_percent,
        sector = stock.sector,
    )
}

/// Response shape the model is constrained to.
pub fn response_schema() -> Value {
    let sentiments: Vec<&str> = Sentiment::ALL.iter().map(|s| s.as_str()).collect();
    let risks: Vec<&str> = RiskLevel::ALL.iter().map(|r| r.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "sentiment": { "type": "STRING", "enum": sentiments },
            "keyDrivers": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "riskLevel": { "type": "STRING", "enum": risks }
        },
        "required": ["summary", "sentiment", "keyDrivers", "riskLevel"]
    })
}

/// Insight used whenever the remote call does not produce one.
///
/// Sentiment follows the sign of the percent change only; the fallback never
/// reports `Neutral`.
pub fn fallback_insight(stock: &Stock) -> MarketInsight {
    let sentiment = if stock.change_percent > 0.0 {
        Sentiment::Bullish
    } else {
        Sentiment::Bearish
    };

    MarketInsight {
        summary: String::from(FALLBACK_SUMMARY),
        sentiment,
        key_drivers: FALLBACK_DRIVERS.iter().map(|d| String::from(*d)).collect(),
        risk_level: RiskLevel::Medium,
    }
}

/// Client for the `generateContent` endpoint.
#[derive(Clone)]
pub struct InsightClient {
    http_client: Arc<dyn HttpClient>,
    config: InsightConfig,
}

impl InsightClient {
    pub fn new(http_client: Arc<dyn HttpClient>, config: InsightConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Insight for `stock`, falling back to [`fallback_insight`] on any error.
    pub async fn fetch_insight(&self, stock: &Stock, timeframe: Timeframe) -> MarketInsight {
        match self.request_insight(stock, timeframe).await {
            Ok(insight) => insight,
            Err(error) if is_routine_fallback(&error) => {
                tracing::debug!(
                    ticker = %stock.ticker,
                    timeframe = %timeframe,
                    %error,
                    "no model insight; using fallback insight"
                );
                fallback_insight(stock)
            }
            Err(error) => {
                tracing::warn!(
                    ticker = %stock.ticker,
                    timeframe = %timeframe,
                    %error,
                    "insight request failed; using fallback insight"
                );
                fallback_insight(stock)
            }
        }
    }

    /// One remote call, surfacing every failure.
    pub async fn request_insight(
        &self,
        stock: &Stock,
        timeframe: Timeframe,
    ) -> Result<MarketInsight, InsightError> {
        if self.config.api_key.trim().is_empty() {
            return Err(InsightError::MissingApiKey);
        }

        let body = json!({
            "contents": [
                { "role": "user", "parts": [{ "text": build_prompt(stock, timeframe) }] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema()
            }
        });

        let request = HttpRequest::post(self.config.endpoint())
            .with_header(API_KEY_HEADER, self.config.api_key.as_str())
            .with_json(&body)
            .with_timeout_ms(self.config.timeout_ms);

        tracing::debug!(
            ticker = %stock.ticker,
            timeframe = %timeframe,
            model = %self.config.model,
            "requesting market insight"
        );

        let response = self.http_client.execute(request).await?;
        if !response.is_success() {
            return Err(InsightError::Status {
                status: response.status,
            });
        }

        parse_reply(&response.body)
    }
}

/// Failures that are expected when running without a model: no key
/// configured, or the offline transport's empty reply.
fn is_routine_fallback(error: &InsightError) -> bool {
    matches!(error, InsightError::MissingApiKey | InsightError::EmptyReply)
}

#[derive(Debug, Deserialize)]
struct GenerateContentReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn parse_reply(body: &str) -> Result<MarketInsight, InsightError> {
    let reply: GenerateContentReply = serde_json::from_str(body)?;

    let text: String = reply
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(InsightError::EmptyReply);
    }

    Ok(serde_json::from_str(text.trim())?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{MarketGenerator, Ticker};

    fn reliance(change_percent: f64) -> Stock {
        let mut stock = MarketGenerator::with_seed(1)
            .generate_stocks(Timeframe::OneDay)
            .into_iter()
            .find(|stock| stock.ticker == Ticker::parse("RELIANCE").expect("valid"))
            .expect("catalog has RELIANCE");
        stock.change_percent = change_percent;
        stock
    }

    #[test]
    fn fallback_follows_sign_of_change() {
        assert_eq!(fallback_insight(&reliance(2.5)).sentiment, Sentiment::Bullish);
        assert_eq!(fallback_insight(&reliance(-1.0)).sentiment, Sentiment::Bearish);
        assert_eq!(fallback_insight(&reliance(0.0)).sentiment, Sentiment::Bearish);
    }

    #[test]
    fn fallback_has_fixed_drivers_and_medium_risk() {
        let insight = fallback_insight(&reliance(1.0));
        assert_eq!(insight.risk_level, RiskLevel::Medium);
        assert_eq!(
            insight.key_drivers,
            vec!["Nifty 50 Momentum", "FII Inflows", "Quarterly Results Expectations"]
        );
    }

    #[test]
    fn prompt_embeds_stock_fields() {
        let prompt = build_prompt(&reliance(2.5), Timeframe::OneWeek);
        assert!(prompt.contains("Reliance Industries Ltd (RELIANCE)"));
        assert!(prompt.contains("over a 1W period"));
        assert!(prompt.contains("Current Price: ₹2985.4."));
        assert!(prompt.contains("Recent Change: 2.5%."));
        assert!(prompt.contains("Sector: Energy & Retail."));
    }

    #[test]
    fn schema_requires_all_four_fields() {
        let schema = response_schema();
        assert_eq!(
            schema["required"],
            json!(["summary", "sentiment", "keyDrivers", "riskLevel"])
        );
        assert_eq!(
            schema["properties"]["sentiment"]["enum"],
            json!(["Bullish", "Bearish", "Neutral"])
        );
        assert_eq!(
            schema["properties"]["riskLevel"]["enum"],
            json!(["Low", "Medium", "High"])
        );
    }

    #[test]
    fn reply_text_parts_are_joined_before_parsing() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "{\"summary\":\"Steady\",\"sentiment\":\"Neutral\"," },
                    { "text": "\"keyDrivers\":[\"Monsoon\"],\"riskLevel\":\"Low\"}" }
                ]}
            }]
        });

        let insight = parse_reply(&body.to_string()).expect("reply should parse");
        assert_eq!(insight.summary, "Steady");
        assert_eq!(insight.sentiment, Sentiment::Neutral);
        assert_eq!(insight.risk_level, RiskLevel::Low);
    }

    #[test]
    fn reply_without_candidates_is_empty() {
        let err = parse_reply("{}").expect_err("must fail");
        assert!(matches!(err, InsightError::EmptyReply));
    }

    #[test]
    fn reply_missing_required_field_is_malformed() {
        let body = json!({
            "candidates": [{ "content": { "parts": [
                { "text": "{\"summary\":\"x\",\"sentiment\":\"Bullish\",\"keyDrivers\":[]}" }
            ]}}]
        });
        let err = parse_reply(&body.to_string()).expect_err("must fail");
        assert!(matches!(err, InsightError::Malformed(_)));
    }

    #[test]
    fn offline_failures_are_routine_but_upstream_errors_are_not() {
        assert!(is_routine_fallback(&InsightError::MissingApiKey));
        assert!(is_routine_fallback(&parse_reply("{}").expect_err("empty reply")));
        assert!(!is_routine_fallback(&InsightError::Status { status: 503 }));
        assert!(!is_routine_fallback(&InsightError::Transport(
            crate::HttpError::new("connection failed")
        )));
    }

    #[test]
    fn config_reads_prefixed_variables_first() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("EQUISCAN_API_KEY", "primary"),
            ("GEMINI_API_KEY", "secondary"),
            ("EQUISCAN_TIMEOUT_MS", "1500"),
            ("EQUISCAN_MODEL", "  "),
        ]);
        let config = InsightConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_key, "primary");
        assert_eq!(config.timeout_ms, 1500);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn config_debug_redacts_api_key() {
        let rendered = format!("{:?}", InsightConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let config = InsightConfig::new("k")
            .with_base_url("https://example.test/v1beta/")
            .with_model("gemini-3-flash-preview");
        assert_eq!(
            config.endpoint(),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
