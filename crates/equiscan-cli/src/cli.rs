//! CLI argument definitions for equiscan.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `stocks` | Simulated top gainers for a timeframe |
//! | `news` | Headlines for one stock |
//! | `insight` | AI market insight for one stock |
//! | `dashboard` | Full dashboard view: list, selection, insight, news |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeframe` | `1D` | Lookback window (1D, 1W, 1M, 1Y, 5Y) |
//! | `--seed` | random | Seed for reproducible market data |
//! | `--offline` | `false` | Skip the model and use fallback insights |
//! | `--timeout-ms` | env / `30000` | Insight request timeout |
//!
//! # Examples
//!
//! ```bash
//! equiscan stocks --timeframe 1W --format table
//! equiscan insight RELIANCE --pretty
//! equiscan dashboard --select TCS --switch 1Y --offline
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// EquiScan India - simulated NSE/BSE dashboard with AI market commentary.
///
/// Market data is randomly generated on every run. Insights come from a
/// generative-language model when `EQUISCAN_API_KEY` (or `GEMINI_API_KEY`)
/// is set, and from a static fallback otherwise.
#[derive(Debug, Parser)]
#[command(
    name = "equiscan",
    author,
    version,
    about = "Simulated NSE/BSE dashboard with AI market commentary"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Lookback window: 1D, 1W, 1M, 1Y or 5Y.
    #[arg(long, global = true, default_value = "1D")]
    pub timeframe: String,

    /// Seed for reproducible market data.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Do not call the model; every insight is the fallback.
    #[arg(long, global = true, default_value_t = false)]
    pub offline: bool,

    /// Insight request timeout in milliseconds (overrides EQUISCAN_TIMEOUT_MS).
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Table,
    /// Single JSON document.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List simulated stocks sorted by percent change.
    ///
    /// # Examples
    ///
    ///   equiscan stocks
    ///   equiscan stocks --timeframe 5Y --search bank
    Stocks(StocksArgs),

    /// Show the latest headlines for a stock.
    ///
    /// # Examples
    ///
    ///   equiscan news INFY
    News(TickerArgs),

    /// Fetch an AI market insight for a stock.
    ///
    /// # Examples
    ///
    ///   equiscan insight RELIANCE --timeframe 1M
    Insight(TickerArgs),

    /// Render the whole dashboard for one selection.
    ///
    /// # Examples
    ///
    ///   equiscan dashboard
    ///   equiscan dashboard --select HDFCBANK --switch 1Y
    Dashboard(DashboardArgs),
}

/// Arguments for the `stocks` command.
#[derive(Debug, Args)]
pub struct StocksArgs {
    /// Only list stocks whose ticker or name contains this text.
    #[arg(long, default_value = "")]
    pub search: String,
}

/// Arguments for commands that target one stock.
#[derive(Debug, Args)]
pub struct TickerArgs {
    /// NSE ticker (e.g., RELIANCE, TCS, INFY).
    pub ticker: String,
}

/// Arguments for the `dashboard` command.
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Ticker to select instead of the top gainer.
    #[arg(long)]
    pub select: Option<String>,

    /// Switch to this timeframe after selecting.
    #[arg(long)]
    pub switch: Option<String>,

    /// Filter the listed stocks.
    #[arg(long, default_value = "")]
    pub search: String,
}
