//! Report rows and their display formatting.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use valuerank_combine::ScoredRecord;

/// Column header, in emission order.
pub const HEADER: [&str; 14] = [
    "Symbol",
    "Total Value",
    "Profitable Value",
    "Giveaway Value",
    "Best Future Value",
    "earningsQuarterlyGrowth",
    "priceToBook",
    "forwardPE",
    "pegRatio",
    "52WeekChange",
    "marketPrice",
    "Industry",
    "earningsDate",
    "recommendation",
];

/// Time zone used to render earnings dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayZone {
    /// The machine's local time zone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

impl DisplayZone {
    /// Formats epoch seconds as `M/D/YYYY, h:mm:ss AM`.
    ///
    /// Returns `None` for timestamps chrono cannot represent.
    #[must_use]
    pub fn format_epoch(&self, seconds: i64) -> Option<String> {
        match self {
            Self::Local => Local.timestamp_opt(seconds, 0).single().map(|d| render(&d)),
            Self::Utc => Utc.timestamp_opt(seconds, 0).single().map(|d| render(&d)),
        }
    }
}

fn render<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// One emitted line of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Ticker symbol.
    pub symbol: String,
    /// Composite score.
    pub total_value: u32,
    /// Earnings-growth rank.
    pub profitable_value: u32,
    /// Price-to-book rank.
    pub giveaway_value: u32,
    /// Forward P/E rank.
    pub best_future_value: u32,
    /// Quarterly earnings growth.
    pub earnings_quarterly_growth: f64,
    /// Price-to-book.
    pub price_to_book: f64,
    /// Forward P/E.
    pub forward_pe: Option<f64>,
    /// PEG ratio.
    pub peg_ratio: Option<f64>,
    /// 52-week change.
    pub fifty_two_week_change: Option<f64>,
    /// Previous close.
    pub market_price: Option<f64>,
    /// Sector.
    pub industry: Option<String>,
    /// Formatted earnings date.
    pub earnings_date: Option<String>,
    /// Serialized recommendation trend.
    pub recommendation: Option<String>,
}

impl ReportRow {
    /// Builds a row, or `None` when a field required for display is missing.
    ///
    /// The record still took part in ranking; this is a display filter.
    #[must_use]
    pub fn from_scored(scored: &ScoredRecord, zone: DisplayZone) -> Option<Self> {
        let record = &scored.record;
        if record.symbol.is_empty()
            || record.trailing_eps.is_none()
            || record.forward_eps.is_none()
        {
            return None;
        }

        Some(Self {
            symbol: record.symbol.clone(),
            total_value: scored.total_value,
            profitable_value: scored.scores.profitable,
            giveaway_value: scored.scores.giveaway,
            best_future_value: scored.scores.best_future,
            earnings_quarterly_growth: record.earnings_quarterly_growth?,
            price_to_book: record.price_to_book?,
            forward_pe: record.forward_pe,
            peg_ratio: record.peg_ratio,
            fifty_two_week_change: record.fifty_two_week_change,
            market_price: record.regular_market_previous_close,
            industry: record.sector.clone(),
            earnings_date: record.earnings_date.and_then(|s| zone.format_epoch(s)),
            recommendation: record
                .recommendation_trend
                .as_ref()
                .map(serde_json::Value::to_string),
        })
    }

    /// Cell values in [`HEADER`] order; missing values are empty.
    #[must_use]
    pub fn fields(&self) -> [String; 14] {
        [
            self.symbol.clone(),
            self.total_value.to_string(),
            self.profitable_value.to_string(),
            self.giveaway_value.to_string(),
            self.best_future_value.to_string(),
            self.earnings_quarterly_growth.to_string(),
            self.price_to_book.to_string(),
            number(self.forward_pe),
            number(self.peg_ratio),
            number(self.fifty_two_week_change),
            number(self.market_price),
            self.industry.clone().unwrap_or_default(),
            self.earnings_date.clone().unwrap_or_default(),
            self.recommendation.clone().unwrap_or_default(),
        ]
    }
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
