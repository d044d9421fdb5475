//! End-to-end ranking run: normalize, rank, combine, report.

use serde::{Deserialize, Serialize};
use valuerank_combine::{Combiner, RankSumCombiner, RankSumConfig, RankedFactor, ScoredRecord};
use valuerank_factors::{FactorRanker, NormalizationSummary, RankConfig, factor_table, normalize};
use valuerank_report::{Report, ReportBuilder, ReportConfig};
use valuerank_traits::{MetricRecord, Universe};

/// Configuration for a full ranking run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Factor table and penalty settings.
    pub rank: RankConfig,
    /// Report rendering settings.
    pub report: ReportConfig,
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Every record of the universe with its factor scores, in input order.
    pub scored: Vec<ScoredRecord>,
    /// The filtered and sorted report.
    pub report: Report,
    /// Sentinel substitutions made during normalization.
    pub normalization: NormalizationSummary,
}

/// Runs the five-factor ranking over a record collection.
///
/// Each stage takes ownership of the previous stage's output, so no state
/// outlives a call to [`Pipeline::run`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration.
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Ranks `records` and builds the report.
    ///
    /// Never fails. Blank and duplicate symbols are dropped up front; an
    /// empty input produces an empty report.
    #[must_use]
    pub fn run(&self, records: Vec<MetricRecord>) -> PipelineOutput {
        let penalty_rank = self.config.rank.penalty_rank;
        let table = factor_table(&self.config.rank);

        let mut universe = Universe::from_records(records);
        let normalization = normalize(&mut universe, &table);

        let ranked: Vec<RankedFactor> = FactorRanker::new(penalty_rank)
            .rank_all(&universe, &table)
            .into_iter()
            .zip(&table)
            .map(|(ranks, factor)| RankedFactor::new(factor.kind(), ranks))
            .collect();

        let scored = RankSumCombiner::new(RankSumConfig { penalty_rank }).combine(universe, &ranked);
        let report = ReportBuilder::new(self.config.report).build(&scored);

        tracing::info!(
            records = scored.len(),
            substituted = normalization.total(),
            reported = report.len(),
            "ranking run complete"
        );

        PipelineOutput {
            scored,
            report,
            normalization,
        }
    }
}
