//! Factor implementations for the valuerank ranking engine.
//!
//! This crate holds everything that works on one factor at a time:
//! - [`registry`]: the declarative five-factor table and ranking configuration
//! - [`normalize`]: sentinel substitution for missing or invalid metrics
//! - [`ranker`]: the single parametrized rank pass
//! - [`screens`]: standalone filter-and-sort screens over raw records
//!
//! # Example
//!
//! ```ignore
//! use valuerank_factors::{FactorRanker, RankConfig, factor_table, normalize};
//!
//! let table = factor_table(&RankConfig::default());
//! normalize(&mut universe, &table);
//! let ranks = FactorRanker::default().rank_all(&universe, &table);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod normalize;
pub mod ranker;
pub mod registry;
pub mod screens;

// Re-export key types
pub use normalize::{NormalizationSummary, normalize, normalize_record};
pub use ranker::{FactorRanker, FactorRanks};
pub use registry::{
    FactorCategory, FactorKind, MetricFactor, MissingPolicy, RankConfig, factor_table,
    factors_by_category,
};
pub use screens::Screen;
