//! Standalone stock screens.
//!
//! Screens run over raw, un-normalized records: each one filters by a fixed
//! predicate and sorts the survivors by a single metric. A record lacking any
//! field its predicate reads simply does not match.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use valuerank_traits::{MetricRecord, RankError};

/// The available screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Strong earnings growth on a stock that is down over the year.
    Profitable,
    /// Trading below book value while still profitable and growing.
    Giveaway,
    /// Forward EPS well above trailing EPS on a profitable, growing company.
    BestFuture,
    /// Forward EPS at or above trailing EPS.
    BrightFuture,
    /// Negative forward EPS.
    DarkFuture,
}

impl Screen {
    /// All screens.
    pub const ALL: [Self; 5] = [
        Self::Profitable,
        Self::Giveaway,
        Self::BestFuture,
        Self::BrightFuture,
        Self::DarkFuture,
    ];

    /// CLI name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Profitable => "profitable",
            Self::Giveaway => "giveaway",
            Self::BestFuture => "best-future",
            Self::BrightFuture => "bright-future",
            Self::DarkFuture => "dark-future",
        }
    }

    /// One-line description of the filter and sort.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Profitable => "earnings growth > 100% and 52-week change < -10%, by growth",
            Self::Giveaway => {
                "price/book < 1, 52-week change < -10%, margins > 10%, growing, by price/book"
            }
            Self::BestFuture => {
                "forward/trailing EPS > 1.25, margins > 10%, growing, by EPS improvement"
            }
            Self::BrightFuture => "forward EPS >= trailing EPS, by forward EPS",
            Self::DarkFuture => "forward EPS < 0, by forward EPS",
        }
    }

    /// Whether `record` passes this screen's filter.
    #[must_use]
    pub fn matches(&self, record: &MetricRecord) -> bool {
        let eqg = record.earnings_quarterly_growth;
        let change = record.fifty_two_week_change;
        let margins = record.profit_margins;
        let forward = record.forward_eps;
        let trailing = record.trailing_eps;

        match self {
            Self::Profitable => eqg.is_some_and(|g| g > 1.0) && change.is_some_and(|c| c < -0.1),
            Self::Giveaway => {
                record.price_to_book.is_some_and(|p| p < 1.0)
                    && change.is_some_and(|c| c < -0.1)
                    && margins.is_some_and(|m| m > 0.1)
                    && eqg.is_some_and(|g| g > 0.0)
            }
            Self::BestFuture => match (forward, trailing) {
                (Some(f), Some(t)) => {
                    f / t > 1.25 && margins.is_some_and(|m| m > 0.1) && eqg.is_some_and(|g| g > 0.0)
                }
                _ => false,
            },
            Self::BrightFuture => match (forward, trailing) {
                (Some(f), Some(t)) => t <= f,
                _ => false,
            },
            Self::DarkFuture => forward.is_some_and(|f| f < 0.0),
        }
    }

    /// Sort key for matched records; smaller keys come first.
    fn sort_key(&self, record: &MetricRecord) -> f64 {
        match self {
            Self::Profitable => -record.earnings_quarterly_growth.unwrap_or(f64::NEG_INFINITY),
            Self::Giveaway => record.price_to_book.unwrap_or(f64::INFINITY),
            Self::BestFuture => match (record.forward_eps, record.trailing_eps) {
                (Some(f), Some(t)) => -(f - t),
                _ => f64::INFINITY,
            },
            Self::BrightFuture | Self::DarkFuture => record.forward_eps.unwrap_or(f64::INFINITY),
        }
    }

    /// Filters and sorts `records`. The sort is stable.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [MetricRecord]) -> Vec<&'a MetricRecord> {
        let mut hits: Vec<&MetricRecord> = records.iter().filter(|r| self.matches(r)).collect();
        hits.sort_by(|a, b| {
            self.sort_key(a)
                .partial_cmp(&self.sort_key(b))
                .unwrap_or(Ordering::Equal)
        });
        hits
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|screen| screen.name() == wanted)
            .ok_or_else(|| RankError::InvalidData(format!("unknown screen: {s}")))
    }
}
