use thiserror::Error;

use crate::http_client::HttpError;

/// Validation and contract errors exposed by `equiscan-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker must start with an ASCII letter: '{ch}'")]
    TickerInvalidStart { ch: char },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("invalid timeframe '{value}', expected one of 1D, 1W, 1M, 1Y, 5Y")]
    InvalidTimeframe { value: String },
}

/// Failure of a single remote insight request.
///
/// These never reach the dashboard: [`crate::InsightClient::fetch_insight`]
/// absorbs them into the fallback insight.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("insight API key is not configured")]
    MissingApiKey,

    #[error("insight transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("insight upstream returned status {status}")]
    Status { status: u16 },

    #[error("insight reply contained no candidate text")]
    EmptyReply,

    #[error("insight reply did not match the schema: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors raised by the dashboard state controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("ticker '{ticker}' is not in the current stock list")]
    UnknownTicker { ticker: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
