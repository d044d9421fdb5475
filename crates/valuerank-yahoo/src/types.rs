//! Data types for Yahoo Finance `quoteSummary` responses.
//!
//! Even with `formatted=false` the API sometimes returns `{}` or
//! `{"raw": ..., "fmt": ...}` in place of a number, so numeric fields go
//! through [`lenient_f64`], which maps anything unusable to `None`.

use serde::Deserialize;
use serde_json::Value;
use valuerank_traits::MetricRecord;
use valuerank_traits::de::{epoch, lenient_f64};

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    /// The summary payload.
    pub quote_summary: QuoteSummary,
}

/// Result list plus error slot.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummary {
    /// One entry per requested symbol.
    #[serde(default)]
    pub result: Option<Vec<QuoteSummaryResult>>,
    /// Error object when the request failed.
    #[serde(default)]
    pub error: Option<Value>,
}

/// Modules requested for one symbol.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    /// Key statistics.
    #[serde(default)]
    pub default_key_statistics: Option<DefaultKeyStatistics>,
    /// Price summary.
    #[serde(default)]
    pub summary_detail: Option<SummaryDetail>,
    /// Analyst recommendation trend.
    #[serde(default)]
    pub recommendation_trend: Option<RecommendationTrend>,
    /// Earnings calendar.
    #[serde(default)]
    pub earnings: Option<Earnings>,
    /// Company profile.
    #[serde(default)]
    pub summary_profile: Option<SummaryProfile>,
}

/// Subset of `defaultKeyStatistics` used for ranking and screens.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultKeyStatistics {
    /// 52-week price change.
    #[serde(rename = "52WeekChange", default, deserialize_with = "lenient_f64")]
    pub fifty_two_week_change: Option<f64>,
    /// Quarterly earnings growth.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub earnings_quarterly_growth: Option<f64>,
    /// Forward EPS.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub forward_eps: Option<f64>,
    /// Forward P/E.
    #[serde(rename = "forwardPE", default, deserialize_with = "lenient_f64")]
    pub forward_pe: Option<f64>,
    /// PEG ratio.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub peg_ratio: Option<f64>,
    /// Price-to-book.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_to_book: Option<f64>,
    /// Profit margins.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub profit_margins: Option<f64>,
    /// Trailing EPS.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub trailing_eps: Option<f64>,
}

/// Subset of `summaryDetail`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetail {
    /// Previous close.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub regular_market_previous_close: Option<f64>,
}

/// Recommendation trend module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationTrend {
    /// Trend entries, most recent period first.
    #[serde(default)]
    pub trend: Vec<Value>,
}

/// Earnings module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earnings {
    /// Earnings chart with upcoming dates.
    #[serde(default)]
    pub earnings_chart: Option<EarningsChart>,
}

/// Earnings chart.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsChart {
    /// Upcoming earnings dates as epoch seconds.
    #[serde(default)]
    pub earnings_date: Vec<Value>,
}

/// Summary profile module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryProfile {
    /// Sector name.
    #[serde(default)]
    pub sector: Option<String>,
}

impl QuoteSummaryResult {
    /// Flattens the modules into a [`MetricRecord`] for `symbol`.
    #[must_use]
    pub fn into_record(self, symbol: &str) -> MetricRecord {
        let stats = self.default_key_statistics.unwrap_or_default();

        MetricRecord {
            symbol: symbol.to_string(),
            earnings_quarterly_growth: stats.earnings_quarterly_growth,
            price_to_book: stats.price_to_book,
            peg_ratio: stats.peg_ratio,
            fifty_two_week_change: stats.fifty_two_week_change,
            forward_eps: stats.forward_eps,
            trailing_eps: stats.trailing_eps,
            forward_pe: stats.forward_pe,
            profit_margins: stats.profit_margins,
            regular_market_previous_close: self
                .summary_detail
                .and_then(|d| d.regular_market_previous_close),
            sector: self.summary_profile.and_then(|p| p.sector),
            earnings_date: self
                .earnings
                .and_then(|e| e.earnings_chart)
                .and_then(|c| c.earnings_date.first().and_then(epoch)),
            recommendation_trend: self
                .recommendation_trend
                .and_then(|r| r.trend.into_iter().next()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "quoteSummary": {
            "result": [{
                "defaultKeyStatistics": {
                    "52WeekChange": -0.25,
                    "earningsQuarterlyGrowth": 0.4,
                    "forwardEps": 5.1,
                    "forwardPE": 11.5,
                    "pegRatio": {},
                    "priceToBook": {"raw": 1.8, "fmt": "1.80"},
                    "profitMargins": 0.21,
                    "trailingEps": 4.2
                },
                "summaryDetail": {"regularMarketPreviousClose": 58.3},
                "recommendationTrend": {"trend": [
                    {"period": "0m", "strongBuy": 4, "buy": 10},
                    {"period": "-1m", "strongBuy": 3, "buy": 9}
                ]},
                "earnings": {"earningsChart": {"earningsDate": [1714003200, 1714435200]}},
                "summaryProfile": {"sector": "Financial Services"}
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_sample_response() {
        let response: QuoteSummaryResponse = serde_json::from_str(SAMPLE).unwrap();
        let result = response.quote_summary.result.unwrap().remove(0);
        let record = result.into_record("C");

        assert_eq!(record.symbol, "C");
        assert_eq!(record.fifty_two_week_change, Some(-0.25));
        assert_eq!(record.forward_pe, Some(11.5));
        assert_eq!(record.peg_ratio, None);
        assert_eq!(record.price_to_book, Some(1.8));
        assert_eq!(record.regular_market_previous_close, Some(58.3));
        assert_eq!(record.earnings_date, Some(1_714_003_200));
        assert_eq!(record.sector.as_deref(), Some("Financial Services"));
        assert_eq!(
            record.recommendation_trend.unwrap()["period"],
            Value::from("0m")
        );
    }

    #[test]
    fn test_missing_modules() {
        let result: QuoteSummaryResult = serde_json::from_str("{}").unwrap();
        let record = result.into_record("X");
        assert_eq!(record, MetricRecord::new("X"));
    }
}
