//! CLI argument definitions for marketwire.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `resolve` | Map company names to ticker symbols |
//! | `bars` | Fetch aggregate bars for a date range |
//! | `details` | Fetch flattened ticker reference data |
//! | `url` | Print a request URL without sending it |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--api-key` | `$MARKETWIRE_API_KEY` | API key sent with each request |
//! | `--base-url` | `$MARKETWIRE_BASE_URL` or `https://api.polygon.io` | API root |
//! | `--timeout-ms` | transport default | Per-request timeout |
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! marketwire resolve "Apple Inc." google TSLA
//! marketwire bars apple --from 2022-01-01 --to 2022-06-01 --format table
//! marketwire details microsoft --date 2023-01-03 --pretty
//! marketwire url bars amazon --from 2022-01-01 --to 2022-01-31 --timespan week
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Market data from the command line: resolve tickers, fetch bars and details.
#[derive(Debug, Parser)]
#[command(name = "marketwire", author, version, about = "Market-data API client")]
pub struct Cli {
    /// API key appended to every request as `apiKey`.
    #[arg(long, global = true, env = "MARKETWIRE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API root URL; overrides `MARKETWIRE_BASE_URL`.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds; overrides `MARKETWIRE_TIMEOUT_MS`.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON envelope.
    Json,
    /// One JSON object per row.
    Ndjson,
    /// Aligned columns for terminal display.
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Map company names to ticker symbols. Unknown names pass through.
    ///
    ///   marketwire resolve apple "Microsoft Corporation" NVDA
    Resolve(ResolveArgs),

    /// Fetch aggregate bars for one ticker over a date range.
    ///
    ///   marketwire bars apple --from 2022-01-01 --to 2022-06-01
    ///   marketwire bars MSFT --from 2023-03-01 --to 2023-03-02 --multiplier 5 --timespan minute
    Bars(BarsArgs),

    /// Fetch ticker reference data, flattened to dotted keys.
    ///
    ///   marketwire details google
    ///   marketwire details AAPL --date 2021-11-30
    Details(DetailsArgs),

    /// Print the request URL for a command without sending it. The api key
    /// is masked.
    Url(UrlArgs),
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Resolve(_) => "resolve",
            Self::Bars(_) => "bars",
            Self::Details(_) => "details",
            Self::Url(_) => "url",
        }
    }
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Company names or ticker symbols.
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct BarsArgs {
    /// Company name or ticker symbol.
    pub ticker: String,

    /// First day of the range, YYYY-MM-DD.
    #[arg(long)]
    pub from: String,

    /// Last day of the range, YYYY-MM-DD.
    #[arg(long)]
    pub to: String,

    /// Number of timespans per bar.
    #[arg(long, default_value_t = 1)]
    pub multiplier: u32,

    /// minute, hour, day, week, month, quarter or year.
    #[arg(long, default_value = "day")]
    pub timespan: String,

    /// Split-adjusted prices: true or false.
    #[arg(long, default_value = "true")]
    pub adjusted: String,

    /// asc or desc by window start.
    #[arg(long, default_value = "asc")]
    pub sort: String,

    /// Maximum number of base aggregates.
    #[arg(long, default_value_t = 50_000)]
    pub limit: u32,
}

#[derive(Debug, Clone, Args)]
pub struct DetailsArgs {
    /// Company name or ticker symbol.
    pub ticker: String,

    /// Reference date, YYYY-MM-DD.
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Debug, Args)]
pub struct UrlArgs {
    #[command(subcommand)]
    pub endpoint: UrlEndpoint,
}

#[derive(Debug, Subcommand)]
pub enum UrlEndpoint {
    /// Aggregates URL.
    Bars(BarsArgs),
    /// Ticker-details URL.
    Details(DetailsArgs),
}
