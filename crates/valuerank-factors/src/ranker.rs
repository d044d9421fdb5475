//! Factor ranking.
//!
//! One parametrized ranker serves every factor. Each pass sorts an index view
//! of the universe by the factor metric, assigns 1-based positions, and
//! overrides sentinel or missing values with the penalty rank. Only the
//! resulting symbol-keyed mapping survives the pass.

use std::cmp::Ordering;
use std::collections::HashMap;
use valuerank_traits::{Factor, PENALTY_RANK, Symbol, Universe};

/// Rank positions for one factor, keyed by symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactorRanks {
    name: String,
    ranks: HashMap<Symbol, u32>,
}

impl FactorRanks {
    /// Creates a mapping from explicit entries.
    pub fn new(name: impl Into<String>, ranks: HashMap<Symbol, u32>) -> Self {
        Self {
            name: name.into(),
            ranks,
        }
    }

    /// Name of the factor these ranks belong to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rank of `symbol`, if it was ranked.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<u32> {
        self.ranks.get(symbol).copied()
    }

    /// Number of ranked symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether nothing was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Iterates `(symbol, rank)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ranks.iter().map(|(s, r)| (s.as_str(), *r))
    }
}

/// Assigns rank positions for a factor across the whole universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorRanker {
    penalty_rank: u32,
}

impl Default for FactorRanker {
    fn default() -> Self {
        Self::new(PENALTY_RANK)
    }
}

impl FactorRanker {
    /// Creates a ranker with the given penalty rank.
    #[must_use]
    pub const fn new(penalty_rank: u32) -> Self {
        Self { penalty_rank }
    }

    /// The rank forced onto penalized records.
    #[must_use]
    pub const fn penalty_rank(&self) -> u32 {
        self.penalty_rank
    }

    /// Ranks every record of `universe` by `factor`.
    ///
    /// The sort is stable, so ties keep input order. Missing values sort after
    /// every present value. Records whose metric is missing or equals the
    /// sentinel get the penalty rank whatever their sorted position.
    pub fn rank<F: Factor + ?Sized>(&self, universe: &Universe, factor: &F) -> FactorRanks {
        let records = universe.records();
        let order = factor.order();

        let mut view: Vec<usize> = (0..records.len()).collect();
        view.sort_by(|&a, &b| {
            match (factor.value(&records[a]), factor.value(&records[b])) {
                (Some(x), Some(y)) => order.compare(x, y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });

        let mut penalized = 0usize;
        let ranks = view
            .into_iter()
            .enumerate()
            .map(|(position, idx)| {
                let record = &records[idx];
                let rank = if factor.is_penalized(record) {
                    penalized += 1;
                    self.penalty_rank
                } else {
                    u32::try_from(position + 1).unwrap_or(u32::MAX)
                };
                (record.symbol.clone(), rank)
            })
            .collect::<HashMap<_, _>>();

        tracing::debug!(
            factor = factor.name(),
            ranked = ranks.len(),
            penalized,
            "ranked factor"
        );

        FactorRanks::new(factor.name(), ranks)
    }

    /// Runs one independent pass per factor.
    pub fn rank_all<F: Factor>(&self, universe: &Universe, factors: &[F]) -> Vec<FactorRanks> {
        factors.iter().map(|f| self.rank(universe, f)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::registry::{FactorKind, MetricFactor, MissingPolicy, RankConfig, factor_table};
    use valuerank_traits::{Metric, MetricRecord};

    fn universe(metric: Metric, values: &[(&str, Option<f64>)]) -> Universe {
        values
            .iter()
            .map(|(symbol, value)| {
                let record = MetricRecord::new(*symbol);
                match value {
                    Some(v) => record.with(metric, *v),
                    None => record,
                }
            })
            .collect()
    }

    #[test]
    fn test_ascending_minimum_ranks_first() {
        let u = universe(
            Metric::ForwardPe,
            &[("A", Some(15.0)), ("B", Some(8.0)), ("C", Some(30.0))],
        );
        let ranks = FactorRanker::default().rank(&u, &MetricFactor::new(FactorKind::BestFuture));

        assert_eq!(ranks.get("B"), Some(1));
        assert_eq!(ranks.get("A"), Some(2));
        assert_eq!(ranks.get("C"), Some(3));
        assert_eq!(ranks.name(), "best_future");
    }

    #[test]
    fn test_descending_maximum_ranks_first() {
        let u = universe(
            Metric::EarningsQuarterlyGrowth,
            &[("A", Some(0.1)), ("B", Some(0.9)), ("C", Some(-0.4))],
        );
        let ranks = FactorRanker::default().rank(&u, &MetricFactor::new(FactorKind::Profitable));

        assert_eq!(ranks.get("B"), Some(1));
        assert_eq!(ranks.get("A"), Some(2));
        assert_eq!(ranks.get("C"), Some(3));
    }

    #[test]
    fn test_every_sentinel_gets_penalty() {
        let u = universe(
            Metric::PegRatio,
            &[
                ("A", Some(9999.0)),
                ("B", Some(1.5)),
                ("C", Some(9999.0)),
                ("D", Some(9999.0)),
            ],
        );
        let ranks = FactorRanker::default().rank(&u, &MetricFactor::new(FactorKind::PegRatio));

        assert_eq!(ranks.get("B"), Some(1));
        for symbol in ["A", "C", "D"] {
            assert_eq!(ranks.get(symbol), Some(PENALTY_RANK));
        }
    }

    #[test]
    fn test_sentinel_penalized_even_when_sorted_mid_range() {
        // A real value larger than the sentinel sorts after it, yet only the
        // sentinel record is penalized.
        let u = universe(
            Metric::ForwardPe,
            &[("A", Some(12000.0)), ("B", Some(9999.0)), ("C", Some(5.0))],
        );
        let ranks = FactorRanker::default().rank(&u, &MetricFactor::new(FactorKind::BestFuture));

        assert_eq!(ranks.get("C"), Some(1));
        assert_eq!(ranks.get("B"), Some(PENALTY_RANK));
        assert_eq!(ranks.get("A"), Some(3));
    }

    #[test]
    fn test_descending_sentinel_penalized_mid_range() {
        // -10000 sorts after the -9999 sentinel when descending.
        let u = universe(
            Metric::EarningsQuarterlyGrowth,
            &[("A", Some(-10000.0)), ("B", Some(-9999.0))],
        );
        let ranks = FactorRanker::default().rank(&u, &MetricFactor::new(FactorKind::Profitable));

        assert_eq!(ranks.get("B"), Some(PENALTY_RANK));
        assert_eq!(ranks.get("A"), Some(2));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let u = universe(
            Metric::PriceToBook,
            &[("X", Some(1.0)), ("Y", Some(1.0)), ("Z", Some(0.5))],
        );
        let ranks = FactorRanker::default().rank(&u, &MetricFactor::new(FactorKind::Giveaway));

        assert_eq!(ranks.get("Z"), Some(1));
        assert_eq!(ranks.get("X"), Some(2));
        assert_eq!(ranks.get("Y"), Some(3));
    }

    #[test]
    fn test_missing_value_is_penalized_without_normalization() {
        let config = RankConfig {
            price_to_book_missing: MissingPolicy::Absent,
            ..RankConfig::default()
        };
        let mut u = universe(
            Metric::PriceToBook,
            &[("A", None), ("B", Some(3.0)), ("C", Some(0.7))],
        );
        let table = factor_table(&config);
        normalize(&mut u, &table);

        let giveaway = MetricFactor::new(FactorKind::Giveaway)
            .with_missing_policy(MissingPolicy::Absent);
        let ranks = FactorRanker::default().rank(&u, &giveaway);

        assert_eq!(ranks.get("C"), Some(1));
        assert_eq!(ranks.get("B"), Some(2));
        assert_eq!(ranks.get("A"), Some(PENALTY_RANK));
    }

    #[test]
    fn test_custom_penalty_rank() {
        let u = universe(Metric::PegRatio, &[("A", None)]);
        let ranks = FactorRanker::new(500).rank(&u, &MetricFactor::new(FactorKind::PegRatio));
        assert_eq!(ranks.get("A"), Some(500));
    }

    #[test]
    fn test_rank_all_runs_each_factor() {
        let mut u = universe(Metric::ForwardPe, &[("A", Some(10.0)), ("B", Some(20.0))]);
        let table = factor_table(&RankConfig::default());
        normalize(&mut u, &table);

        let all = FactorRanker::default().rank_all(&u, &table);
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|r| r.len() == 2));
    }

    #[test]
    fn test_empty_universe() {
        let ranks = FactorRanker::default()
            .rank(&Universe::default(), &MetricFactor::new(FactorKind::PegRatio));
        assert!(ranks.is_empty());
    }
}
