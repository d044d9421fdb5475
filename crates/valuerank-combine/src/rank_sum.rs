//! Equal-weight rank-sum combination.

use serde::{Deserialize, Serialize};
use valuerank_factors::FactorKind;
use valuerank_traits::{PENALTY_RANK, Universe};

use crate::combiner::{Combiner, FactorScores, RankedFactor, ScoredRecord};

/// Configuration for rank-sum combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankSumConfig {
    /// Score used when a symbol is missing from a factor's ranks.
    pub penalty_rank: u32,
}

impl Default for RankSumConfig {
    fn default() -> Self {
        Self {
            penalty_rank: PENALTY_RANK,
        }
    }
}

/// Sums the five factor rank positions into one composite score.
///
/// Every factor counts equally; there is no rescaling. The join from factor
/// ranks back onto records is a keyed lookup by symbol.
///
/// # Examples
///
/// ```rust,ignore
/// use valuerank_combine::{Combiner, RankSumCombiner};
///
/// let scored = RankSumCombiner::default().combine(universe, &ranked);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RankSumCombiner {
    config: RankSumConfig,
}

impl RankSumCombiner {
    /// Create a new rank-sum combiner with the given configuration.
    pub const fn new(config: RankSumConfig) -> Self {
        Self { config }
    }

    fn lookup(&self, ranked: &[RankedFactor], kind: FactorKind, symbol: &str) -> u32 {
        let rank = ranked
            .iter()
            .find(|r| r.kind == kind)
            .and_then(|r| r.ranks.get(symbol));

        match rank {
            Some(rank) => rank,
            None => {
                // Every pass ranks the same universe, so a miss means the
                // caller mixed universes.
                tracing::warn!(
                    symbol,
                    factor = kind.name(),
                    "symbol missing from factor ranks, applying penalty"
                );
                self.config.penalty_rank
            }
        }
    }
}

impl Combiner for RankSumCombiner {
    fn combine(&self, universe: Universe, ranked: &[RankedFactor]) -> Vec<ScoredRecord> {
        let scored: Vec<ScoredRecord> = universe
            .into_records()
            .into_iter()
            .map(|record| {
                let mut scores = FactorScores::default();
                for kind in FactorKind::ALL {
                    scores.set(kind, self.lookup(ranked, kind, &record.symbol));
                }
                ScoredRecord {
                    total_value: scores.sum(),
                    scores,
                    record,
                }
            })
            .collect();

        tracing::debug!(records = scored.len(), "combined factor ranks");
        scored
    }

    fn name(&self) -> &str {
        "rank_sum"
    }
}
