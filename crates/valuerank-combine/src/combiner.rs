//! Core trait definition for composite scorers.

use serde::{Deserialize, Serialize};
use valuerank_factors::{FactorKind, FactorRanks};
use valuerank_traits::{MetricRecord, Universe};

/// Rank output from a single factor pass, tagged with its factor.
#[derive(Debug, Clone)]
pub struct RankedFactor {
    /// Which factor produced these ranks.
    pub kind: FactorKind,

    /// Symbol-keyed rank positions.
    pub ranks: FactorRanks,
}

impl RankedFactor {
    /// Tags `ranks` with `kind`.
    #[must_use]
    pub const fn new(kind: FactorKind, ranks: FactorRanks) -> Self {
        Self { kind, ranks }
    }
}

/// The five per-factor scores of one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScores {
    /// Rank on quarterly earnings growth.
    pub profitable: u32,
    /// Rank on price-to-book.
    pub giveaway: u32,
    /// Rank on forward P/E.
    pub best_future: u32,
    /// Rank on PEG ratio.
    pub peg_ratio: u32,
    /// Rank on 52-week change.
    pub fifty_two_week_change: u32,
}

impl FactorScores {
    /// Score for one factor.
    #[must_use]
    pub const fn get(&self, kind: FactorKind) -> u32 {
        match kind {
            FactorKind::Profitable => self.profitable,
            FactorKind::Giveaway => self.giveaway,
            FactorKind::BestFuture => self.best_future,
            FactorKind::PegRatio => self.peg_ratio,
            FactorKind::FiftyTwoWeekChange => self.fifty_two_week_change,
        }
    }

    /// Sets the score for one factor.
    pub const fn set(&mut self, kind: FactorKind, score: u32) {
        match kind {
            FactorKind::Profitable => self.profitable = score,
            FactorKind::Giveaway => self.giveaway = score,
            FactorKind::BestFuture => self.best_future = score,
            FactorKind::PegRatio => self.peg_ratio = score,
            FactorKind::FiftyTwoWeekChange => self.fifty_two_week_change = score,
        }
    }

    /// Sum of all five scores.
    #[must_use]
    pub const fn sum(&self) -> u32 {
        self.profitable
            .saturating_add(self.giveaway)
            .saturating_add(self.best_future)
            .saturating_add(self.peg_ratio)
            .saturating_add(self.fifty_two_week_change)
    }
}

/// A record annotated with its factor scores and composite total.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    /// The normalized record.
    pub record: MetricRecord,
    /// Individual factor scores.
    pub scores: FactorScores,
    /// Composite score; lower is more favorable.
    pub total_value: u32,
}

/// Combines per-factor ranks into a composite score per record.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait Combiner: Send + Sync {
    /// Scores every record of `universe`, preserving input order.
    ///
    /// Never fails: a symbol missing from a factor's ranks receives that
    /// factor's penalty score.
    fn combine(&self, universe: Universe, ranked: &[RankedFactor]) -> Vec<ScoredRecord>;

    /// Name of this combination strategy.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_get_set_sum() {
        let mut scores = FactorScores::default();
        for (i, kind) in FactorKind::ALL.into_iter().enumerate() {
            scores.set(kind, i as u32 + 1);
        }

        assert_eq!(scores.get(FactorKind::Profitable), 1);
        assert_eq!(scores.get(FactorKind::FiftyTwoWeekChange), 5);
        assert_eq!(scores.sum(), 15);
    }

    #[test]
    fn test_max_sum_fits() {
        let mut scores = FactorScores::default();
        for kind in FactorKind::ALL {
            scores.set(kind, 9999);
        }
        assert_eq!(scores.sum(), 49995);
    }
}
