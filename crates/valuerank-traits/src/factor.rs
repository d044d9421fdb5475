//! Factor trait for rank-ordering a universe by one metric.
//!
//! A factor names a metric, the direction in which that metric is "better",
//! and the sentinel substituted when the metric is missing or invalid. The
//! ranker and normalizer are written once against this trait and driven by a
//! table of factor definitions.

use crate::{Metric, MetricRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction in which a factor's metric is ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smaller values rank first.
    Ascending,
    /// Larger values rank first.
    Descending,
}

impl SortOrder {
    /// Compares two metric values so that the better value orders first.
    #[must_use]
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        match self {
            Self::Ascending => a.total_cmp(&b),
            Self::Descending => b.total_cmp(&a),
        }
    }

    /// Short label for tables.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// A rankable factor.
///
/// Implementations must be thread-safe (`Send + Sync`) so a factor table can
/// be shared freely, even though the ranking core itself runs on one thread.
///
/// # Example
///
/// ```no_run
/// use valuerank_traits::{Factor, Metric, SortOrder};
///
/// struct Cheapness;
///
/// impl Factor for Cheapness {
///     fn name(&self) -> &str {
///         "cheapness"
///     }
///
///     fn metric(&self) -> Metric {
///         Metric::ForwardPe
///     }
///
///     fn order(&self) -> SortOrder {
///         SortOrder::Ascending
///     }
///
///     fn sentinel(&self) -> f64 {
///         9999.0
///     }
/// }
/// ```
pub trait Factor: Send + Sync {
    /// Unique name used in logs and reports.
    fn name(&self) -> &str;

    /// The record field this factor ranks by.
    fn metric(&self) -> Metric;

    /// Ranking direction.
    fn order(&self) -> SortOrder;

    /// Value substituted for a missing or invalid metric.
    ///
    /// A record carrying the sentinel always receives the penalty rank.
    fn sentinel(&self) -> f64;

    /// Whether a present value is usable.
    ///
    /// Invalid values are replaced by the sentinel during normalization.
    /// Defaults to accepting every finite value.
    fn is_valid(&self, value: f64) -> bool {
        value.is_finite()
    }

    /// Whether normalization writes the sentinel into a missing metric.
    ///
    /// When false the metric stays absent; the ranker still penalizes it.
    fn fills_missing(&self) -> bool {
        true
    }

    /// Reads this factor's metric from a record.
    fn value(&self, record: &MetricRecord) -> Option<f64> {
        record.metric(self.metric())
    }

    /// Whether `record` must receive the penalty rank for this factor.
    ///
    /// True when the metric is missing or equals the sentinel.
    fn is_penalized(&self, record: &MetricRecord) -> bool {
        self.value(record)
            .is_none_or(|v| v.total_cmp(&self.sentinel()) == Ordering::Equal)
    }
}
