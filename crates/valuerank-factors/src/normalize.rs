//! Record normalization.
//!
//! Before ranking, every factor metric is either a real, valid value or the
//! factor's sentinel. Missing data becomes a declared state here rather than
//! something each comparator has to guess about.

use std::collections::BTreeMap;
use valuerank_traits::{Factor, MetricRecord, Universe};

/// Per-factor count of sentinel substitutions made by one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationSummary {
    /// Factor name to number of records that received the sentinel.
    pub substituted: BTreeMap<String, usize>,
}

impl NormalizationSummary {
    /// Total substitutions across all factors.
    #[must_use]
    pub fn total(&self) -> usize {
        self.substituted.values().sum()
    }

    /// Substitutions made for one factor.
    #[must_use]
    pub fn for_factor(&self, name: &str) -> usize {
        self.substituted.get(name).copied().unwrap_or(0)
    }
}

/// Fills sentinel values into a single record.
///
/// Returns the names of the factors whose metric was replaced.
pub fn normalize_record<'f, F: Factor>(
    record: &mut MetricRecord,
    factors: &'f [F],
) -> Vec<&'f str> {
    let mut replaced = Vec::new();

    for factor in factors {
        let slot = record.metric_mut(factor.metric());
        let replace = match *slot {
            Some(value) => !factor.is_valid(value),
            None => factor.fills_missing(),
        };
        if replace {
            *slot = Some(factor.sentinel());
            replaced.push(factor.name());
        }
    }

    replaced
}

/// Normalizes every record of the universe in place.
///
/// Record order is untouched.
pub fn normalize<F: Factor>(universe: &mut Universe, factors: &[F]) -> NormalizationSummary {
    let mut summary = NormalizationSummary::default();
    for factor in factors {
        summary.substituted.insert(factor.name().to_string(), 0);
    }

    for record in universe.records_mut() {
        for name in normalize_record(record, factors) {
            *summary.substituted.entry(name.to_string()).or_default() += 1;
        }
    }

    tracing::debug!(
        records = universe.len(),
        substituted = summary.total(),
        "normalized universe"
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{FactorKind, MissingPolicy, RankConfig, factor_table};
    use approx::assert_relative_eq;
    use valuerank_traits::Metric;

    fn table() -> Vec<crate::MetricFactor> {
        factor_table(&RankConfig::default())
    }

    #[test]
    fn test_missing_metrics_get_sentinels() {
        let mut record = MetricRecord::new("B");
        let table = table();
        let replaced = normalize_record(&mut record, &table);

        assert_eq!(replaced.len(), 5);
        assert_relative_eq!(record.earnings_quarterly_growth.unwrap(), -9999.0);
        assert_relative_eq!(record.price_to_book.unwrap(), 9999.0);
        assert_relative_eq!(record.forward_pe.unwrap(), 9999.0);
        assert_relative_eq!(record.peg_ratio.unwrap(), 9999.0);
        assert_relative_eq!(record.fifty_two_week_change.unwrap(), 9999.0);
    }

    #[test]
    fn test_non_positive_pe_and_peg_are_invalid() {
        let mut record = MetricRecord::new("X")
            .with(Metric::ForwardPe, -12.0)
            .with(Metric::PegRatio, 0.0)
            .with(Metric::FiftyTwoWeekChange, -0.3)
            .with(Metric::EarningsQuarterlyGrowth, -0.1)
            .with(Metric::PriceToBook, -2.0);
        normalize_record(&mut record, &table());

        assert_relative_eq!(record.forward_pe.unwrap(), 9999.0);
        assert_relative_eq!(record.peg_ratio.unwrap(), 9999.0);
        // Negative values are real data for these metrics.
        assert_relative_eq!(record.fifty_two_week_change.unwrap(), -0.3);
        assert_relative_eq!(record.earnings_quarterly_growth.unwrap(), -0.1);
        assert_relative_eq!(record.price_to_book.unwrap(), -2.0);
    }

    #[test]
    fn test_untouched_fields() {
        let mut record = MetricRecord::new("A")
            .with(Metric::TrailingEps, 1.0)
            .with(Metric::ForwardEps, 2.0);
        normalize_record(&mut record, &table());

        assert_eq!(record.trailing_eps, Some(1.0));
        assert_eq!(record.forward_eps, Some(2.0));
        assert!(record.regular_market_previous_close.is_none());
    }

    #[test]
    fn test_absent_price_to_book_policy() {
        let config = RankConfig {
            price_to_book_missing: MissingPolicy::Absent,
            ..RankConfig::default()
        };
        let mut record = MetricRecord::new("A");
        normalize_record(&mut record, &factor_table(&config));

        assert!(record.price_to_book.is_none());
        assert!(record.forward_pe.is_some());
    }

    #[test]
    fn test_normalize_universe_preserves_order_and_counts() {
        let mut universe = Universe::from_records(vec![
            MetricRecord::new("A").with(Metric::ForwardPe, 10.0),
            MetricRecord::new("B"),
            MetricRecord::new("C").with(Metric::ForwardPe, 0.0),
        ]);

        let summary = normalize(&mut universe, &table());

        assert_eq!(universe.symbols(), vec!["A", "B", "C"]);
        assert_eq!(summary.for_factor(FactorKind::BestFuture.name()), 2);
        assert_eq!(summary.for_factor(FactorKind::Profitable.name()), 3);
        assert_eq!(summary.total(), 2 + 3 * 4);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut universe = Universe::from_records(vec![MetricRecord::new("A")]);
        normalize(&mut universe, &table());
        let first = universe.clone();

        let summary = normalize(&mut universe, &table());
        assert_eq!(universe, first);
        assert_eq!(summary.total(), 0);
    }
}
