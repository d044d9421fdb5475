//! Common types used throughout the valuerank framework.
//!
//! This module defines the per-symbol metric record, the metric identifiers
//! used to address its numeric fields, and the validated [`Universe`] that the
//! ranking pipeline threads from stage to stage.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A market symbol identifier, such as "AAPL" or "BRK.B".
pub type Symbol = String;

/// Numeric fields of a [`MetricRecord`] that can be read generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Quarter-over-quarter earnings growth (fraction).
    EarningsQuarterlyGrowth,
    /// Share price relative to book value per share.
    PriceToBook,
    /// Price/earnings-to-growth ratio.
    PegRatio,
    /// Price change over the last 52 weeks (fraction).
    FiftyTwoWeekChange,
    /// Consensus forward earnings per share.
    ForwardEps,
    /// Trailing twelve-month earnings per share.
    TrailingEps,
    /// Forward price/earnings ratio.
    ForwardPe,
    /// Previous session closing price.
    RegularMarketPreviousClose,
    /// Net profit margin (fraction).
    ProfitMargins,
}

impl Metric {
    /// The JSON field name this metric is stored under.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::EarningsQuarterlyGrowth => "earningsQuarterlyGrowth",
            Self::PriceToBook => "priceToBook",
            Self::PegRatio => "pegRatio",
            Self::FiftyTwoWeekChange => "52WeekChange",
            Self::ForwardEps => "forwardEps",
            Self::TrailingEps => "trailingEps",
            Self::ForwardPe => "forwardPE",
            Self::RegularMarketPreviousClose => "regularMarketPreviousClose",
            Self::ProfitMargins => "profitMargins",
        }
    }
}

/// Financial metrics for a single equity.
///
/// Every field except `symbol` is optional because upstream data providers
/// routinely omit statistics for individual tickers. Serialized field names
/// match the quote provider's JSON so snapshots round-trip unchanged.
/// Values of an unusable shape decode as missing rather than failing the
/// whole document; a null symbol decodes as blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    /// Ticker symbol; the join key across factor passes.
    #[serde(default, deserialize_with = "crate::de::lenient_symbol")]
    pub symbol: Symbol,
    /// Quarter-over-quarter earnings growth.
    #[serde(
        default,
        deserialize_with = "crate::de::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub earnings_quarterly_growth: Option<f64>,
    /// Price-to-book ratio.
    #[serde(
        default,
        deserialize_with = "crate::de::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_to_book: Option<f64>,
    /// PEG ratio.
    #[serde(
        default,
        deserialize_with = "crate::de::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub peg_ratio: Option<f64>,
    /// 52-week price change as a fraction.
    #[serde(
        rename = "52WeekChange",
        default,
        deserialize_with = "crate::de::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub fifty_two_week_change: Option<f64>,
    /// Forward EPS.
    #[serde(
        default,
        deserialize_with = "crate::de::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub forward_eps: Option<f64>,
    /// Trailing EPS.
    #[serde(
        default,
        deserialize_with = "crate::de::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub trailing_eps: Option<f64>,
    /// Forward P/E.
    #[serde(
        rename = "forwardPE",
        default,
        deserialize_with = "crate::de::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub forward_pe: Option<f64>,
    /// Previous close, reported as the market price.
    #[serde(
        default,
        deserialize_with = "crate::de::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub regular_market_previous_close: Option<f64>,
    /// Net profit margin.
    #[serde(
        default,
        deserialize_with = "crate::de::lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub profit_margins: Option<f64>,
    /// GICS sector name.
    #[serde(
        default,
        deserialize_with = "crate::de::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub sector: Option<String>,
    /// Next earnings date as Unix epoch seconds.
    #[serde(
        default,
        deserialize_with = "crate::de::lenient_epoch",
        skip_serializing_if = "Option::is_none"
    )]
    pub earnings_date: Option<i64>,
    /// Analyst recommendation trend, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_trend: Option<serde_json::Value>,
}

impl MetricRecord {
    /// Creates an empty record for `symbol`.
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Reads a numeric metric.
    #[must_use]
    pub const fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::EarningsQuarterlyGrowth => self.earnings_quarterly_growth,
            Metric::PriceToBook => self.price_to_book,
            Metric::PegRatio => self.peg_ratio,
            Metric::FiftyTwoWeekChange => self.fifty_two_week_change,
            Metric::ForwardEps => self.forward_eps,
            Metric::TrailingEps => self.trailing_eps,
            Metric::ForwardPe => self.forward_pe,
            Metric::RegularMarketPreviousClose => self.regular_market_previous_close,
            Metric::ProfitMargins => self.profit_margins,
        }
    }

    /// Mutable access to a numeric metric slot.
    pub const fn metric_mut(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::EarningsQuarterlyGrowth => &mut self.earnings_quarterly_growth,
            Metric::PriceToBook => &mut self.price_to_book,
            Metric::PegRatio => &mut self.peg_ratio,
            Metric::FiftyTwoWeekChange => &mut self.fifty_two_week_change,
            Metric::ForwardEps => &mut self.forward_eps,
            Metric::TrailingEps => &mut self.trailing_eps,
            Metric::ForwardPe => &mut self.forward_pe,
            Metric::RegularMarketPreviousClose => &mut self.regular_market_previous_close,
            Metric::ProfitMargins => &mut self.profit_margins,
        }
    }

    /// Builder-style setter used heavily by tests and fixtures.
    #[must_use]
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        *self.metric_mut(metric) = Some(value);
        self
    }
}

/// The full set of records ranked in one run.
///
/// Construction enforces the join-key invariant: symbols are non-empty and
/// unique. Records violating it are dropped (first occurrence wins) and a
/// warning is logged, because rank positions are only meaningful when every
/// factor pass sees the same keyed set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Universe {
    records: Vec<MetricRecord>,
}

impl Universe {
    /// Validates `records` into a universe, preserving input order.
    pub fn from_records(records: Vec<MetricRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            if record.symbol.trim().is_empty() {
                tracing::warn!("dropping record without a symbol");
                continue;
            }
            if !seen.insert(record.symbol.clone()) {
                tracing::warn!(symbol = %record.symbol, "dropping duplicate symbol");
                continue;
            }
            kept.push(record);
        }

        Self { records: kept }
    }

    /// Records in input order.
    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    /// Mutable records, for in-place normalization.
    pub fn records_mut(&mut self) -> &mut [MetricRecord] {
        &mut self.records
    }

    /// Consumes the universe and returns its records.
    pub fn into_records(self) -> Vec<MetricRecord> {
        self.records
    }

    /// Number of records.
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the universe is empty.
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, MetricRecord> {
        self.records.iter()
    }

    /// All symbols, in input order.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.records.iter().map(|r| r.symbol.clone()).collect()
    }
}

impl From<Vec<MetricRecord>> for Universe {
    fn from(records: Vec<MetricRecord>) -> Self {
        Self::from_records(records)
    }
}

impl FromIterator<MetricRecord> for Universe {
    fn from_iter<I: IntoIterator<Item = MetricRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a MetricRecord;
    type IntoIter = std::slice::Iter<'a, MetricRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_record_deserializes_provider_names() {
        let json = r#"{
            "symbol": "AAPL",
            "earningsQuarterlyGrowth": 0.5,
            "52WeekChange": -0.2,
            "forwardPE": 10,
            "earningsDate": 1700000000,
            "recommendationTrend": {"period": "0m", "strongBuy": 11}
        }"#;

        let record: MetricRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.symbol, "AAPL");
        assert_relative_eq!(record.earnings_quarterly_growth.unwrap(), 0.5);
        assert_relative_eq!(record.fifty_two_week_change.unwrap(), -0.2);
        assert_relative_eq!(record.forward_pe.unwrap(), 10.0);
        assert_eq!(record.earnings_date, Some(1_700_000_000));
        assert!(record.price_to_book.is_none());
        assert!(record.recommendation_trend.is_some());
    }

    #[test]
    fn test_record_tolerates_odd_field_shapes() {
        let json = r#"{
            "symbol": null,
            "pegRatio": {},
            "priceToBook": {"raw": 1.8, "fmt": "1.80"},
            "forwardPE": "Infinity",
            "trailingEps": null,
            "sector": 7,
            "earningsDate": 1714003200.0
        }"#;

        let record: MetricRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.symbol, "");
        assert_eq!(record.peg_ratio, None);
        assert_relative_eq!(record.price_to_book.unwrap(), 1.8);
        assert_eq!(record.forward_pe, None);
        assert_eq!(record.trailing_eps, None);
        assert_eq!(record.sector, None);
        assert_eq!(record.earnings_date, Some(1_714_003_200));
    }

    #[test]
    fn test_record_serialization_skips_missing() {
        let record = MetricRecord::new("MSFT").with(Metric::ForwardPe, 25.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"symbol":"MSFT","forwardPE":25.0}"#);
    }

    #[test]
    fn test_metric_accessors() {
        let mut record = MetricRecord::new("A").with(Metric::PegRatio, 1.2);
        assert_eq!(record.metric(Metric::PegRatio), Some(1.2));
        assert_eq!(record.metric(Metric::PriceToBook), None);

        *record.metric_mut(Metric::PriceToBook) = Some(0.8);
        assert_eq!(record.price_to_book, Some(0.8));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Metric::FiftyTwoWeekChange.field_name(), "52WeekChange");
        assert_eq!(Metric::ForwardPe.field_name(), "forwardPE");
    }

    #[test]
    fn test_universe_drops_blank_and_duplicate_symbols() {
        let universe = Universe::from_records(vec![
            MetricRecord::new("A").with(Metric::PegRatio, 1.0),
            MetricRecord::new(""),
            MetricRecord::new("B"),
            MetricRecord::new("A").with(Metric::PegRatio, 2.0),
        ]);

        assert_eq!(universe.len(), 2);
        assert_eq!(universe.symbols(), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(universe.records()[0].peg_ratio, Some(1.0));
    }

    #[test]
    fn test_empty_universe() {
        let universe = Universe::from_records(Vec::new());
        assert!(universe.is_empty());
        assert_eq!(universe.iter().count(), 0);
    }
}
