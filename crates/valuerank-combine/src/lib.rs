//! Composite scoring for valuerank.
//!
//! This crate joins the per-factor rank positions produced by
//! `valuerank-factors` back onto each record and sums them.
//!
//! # Available Strategies
//!
//! - [`RankSumCombiner`]: equal-weight sum of rank positions
//!
//! # Example
//!
//! ```rust,ignore
//! use valuerank_combine::{Combiner, RankSumCombiner, RankedFactor};
//!
//! let scored = RankSumCombiner::default().combine(universe, &ranked);
//! ```

mod combiner;
mod rank_sum;

pub use combiner::{Combiner, FactorScores, RankedFactor, ScoredRecord};
pub use rank_sum::{RankSumCombiner, RankSumConfig};
