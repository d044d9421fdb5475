//! Factor registry: the declarative table of ranked factors.
//!
//! Every factor the composite score sums is described here once. The
//! normalizer, the ranker and the CLI listing are all driven from this table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use valuerank_traits::{Factor, Metric, PENALTY_RANK, RankError, SortOrder};

/// Factor category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorCategory {
    /// Valuation metrics comparing fundamentals to price
    Value,
    /// Earnings growth metrics
    Growth,
    /// Contrarian price-change metrics
    Reversion,
}

impl FactorCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Value => "Valuation metrics comparing fundamentals to price",
            Self::Growth => "Earnings growth signals",
            Self::Reversion => "Contrarian signals favoring recent losers",
        }
    }
}

/// The five factors summed into the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    /// Quarterly earnings growth, larger is better.
    Profitable,
    /// Price-to-book, smaller is better.
    Giveaway,
    /// Forward P/E, smaller is better.
    BestFuture,
    /// PEG ratio, smaller is better.
    PegRatio,
    /// 52-week price change, smaller is better.
    FiftyTwoWeekChange,
}

impl FactorKind {
    /// All factors in report column order.
    pub const ALL: [Self; 5] = [
        Self::Profitable,
        Self::Giveaway,
        Self::BestFuture,
        Self::PegRatio,
        Self::FiftyTwoWeekChange,
    ];

    /// Stable identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Profitable => "profitable",
            Self::Giveaway => "giveaway",
            Self::BestFuture => "best_future",
            Self::PegRatio => "peg_ratio",
            Self::FiftyTwoWeekChange => "52_week_change",
        }
    }

    /// Metric ranked by this factor.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        match self {
            Self::Profitable => Metric::EarningsQuarterlyGrowth,
            Self::Giveaway => Metric::PriceToBook,
            Self::BestFuture => Metric::ForwardPe,
            Self::PegRatio => Metric::PegRatio,
            Self::FiftyTwoWeekChange => Metric::FiftyTwoWeekChange,
        }
    }

    /// Ranking direction.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        match self {
            Self::Profitable => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    /// Sentinel for missing or invalid values.
    ///
    /// Descending factors use a very negative sentinel so it sorts last.
    #[must_use]
    pub const fn sentinel(&self) -> f64 {
        match self.order() {
            SortOrder::Ascending => 9999.0,
            SortOrder::Descending => -9999.0,
        }
    }

    /// Whether zero and negative values are treated as invalid.
    ///
    /// A negative P/E or PEG comes from negative earnings and is not cheap.
    #[must_use]
    pub const fn rejects_non_positive(&self) -> bool {
        matches!(self, Self::BestFuture | Self::PegRatio)
    }

    /// Category classification.
    #[must_use]
    pub const fn category(&self) -> FactorCategory {
        match self {
            Self::Profitable => FactorCategory::Growth,
            Self::Giveaway | Self::BestFuture | Self::PegRatio => FactorCategory::Value,
            Self::FiftyTwoWeekChange => FactorCategory::Reversion,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Profitable => "Highest quarterly earnings growth",
            Self::Giveaway => "Lowest price relative to book value",
            Self::BestFuture => "Lowest forward P/E (non-positive treated as missing)",
            Self::PegRatio => "Lowest PEG ratio (non-positive treated as missing)",
            Self::FiftyTwoWeekChange => "Largest 52-week decline",
        }
    }
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FactorKind {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "profitable" | "earnings_quarterly_growth" | "eqg" => Ok(Self::Profitable),
            "giveaway" | "price_to_book" | "ptb" => Ok(Self::Giveaway),
            "best_future" | "forward_pe" | "pe" => Ok(Self::BestFuture),
            "peg_ratio" | "peg" => Ok(Self::PegRatio),
            "52_week_change" | "fifty_two_week_change" | "52w" => Ok(Self::FiftyTwoWeekChange),
            _ => Err(RankError::UnknownFactor(s.to_string())),
        }
    }
}

/// What normalization does with a missing metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Write the factor sentinel into the record.
    #[default]
    Sentinel,
    /// Leave the metric absent; the ranker penalizes it explicitly.
    Absent,
}

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Rank forced onto sentinel-valued or missing metrics.
    pub penalty_rank: u32,

    /// Missing-value policy for price-to-book.
    pub price_to_book_missing: MissingPolicy,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            penalty_rank: PENALTY_RANK,
            price_to_book_missing: MissingPolicy::Sentinel,
        }
    }
}

/// A table-driven [`Factor`] built from a [`FactorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricFactor {
    kind: FactorKind,
    missing: MissingPolicy,
}

impl MetricFactor {
    /// Creates a factor that fills missing values with its sentinel.
    #[must_use]
    pub const fn new(kind: FactorKind) -> Self {
        Self {
            kind,
            missing: MissingPolicy::Sentinel,
        }
    }

    /// Overrides the missing-value policy.
    #[must_use]
    pub const fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    /// The factor this entry describes.
    #[must_use]
    pub const fn kind(&self) -> FactorKind {
        self.kind
    }

    /// The configured missing-value policy.
    #[must_use]
    pub const fn missing_policy(&self) -> MissingPolicy {
        self.missing
    }
}

impl Factor for MetricFactor {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn metric(&self) -> Metric {
        self.kind.metric()
    }

    fn order(&self) -> SortOrder {
        self.kind.order()
    }

    fn sentinel(&self) -> f64 {
        self.kind.sentinel()
    }

    fn is_valid(&self, value: f64) -> bool {
        value.is_finite() && (!self.kind.rejects_non_positive() || value > 0.0)
    }

    fn fills_missing(&self) -> bool {
        self.missing == MissingPolicy::Sentinel
    }
}

/// Builds the five-factor table for a configuration.
#[must_use]
pub fn factor_table(config: &RankConfig) -> Vec<MetricFactor> {
    FactorKind::ALL
        .iter()
        .map(|&kind| {
            let factor = MetricFactor::new(kind);
            if kind == FactorKind::Giveaway {
                factor.with_missing_policy(config.price_to_book_missing)
            } else {
                factor
            }
        })
        .collect()
}

/// Get all factors in a specific category.
#[must_use]
pub fn factors_by_category(category: FactorCategory) -> Vec<FactorKind> {
    FactorKind::ALL
        .into_iter()
        .filter(|kind| kind.category() == category)
        .collect()
}
