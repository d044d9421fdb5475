#![doc(issue_tracker_base_url = "https://github.com/factordynamics/valuerank/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # valuerank
//!
//! Multi-factor value ranking of S&P 500 constituents.
//!
//! valuerank is an umbrella crate that re-exports the valuerank sub-crates
//! and wires them into a single [`Pipeline`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use valuerank::{Pipeline, load_snapshot};
//!
//! # fn main() -> valuerank::Result<()> {
//! let records = load_snapshot("spdata.json")?;
//! let output = Pipeline::default().run(records);
//! output.report.write_file("undervalued.csv")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## How a Run Works
//!
//! 1. **Normalize**: missing or unusable metrics get a factor sentinel
//! 2. **Rank**: each of the five factors orders the whole universe and assigns
//!    1-based positions; sentinel values are forced to the penalty rank
//! 3. **Combine**: the five positions are summed per symbol
//! 4. **Report**: positive totals are sorted ascending and rendered as CSV
//!
//! ## Crate Organization
//!
//! - [`traits`] - Records, the universe, the [`Factor`] trait and errors
//! - [`factors`] - The factor table, normalizer, ranker and screens
//! - [`combine`] - Rank-sum combination
//! - [`report`] - Report rows and CSV rendering
//! - [`yahoo`] - Constituent list and quote fetching

/// Version information for the valuerank crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod pipeline;
mod snapshot;

pub use pipeline::{Pipeline, PipelineConfig, PipelineOutput};
pub use snapshot::{DEFAULT_SNAPSHOT, load_snapshot, save_snapshot};

/// Core records, traits and errors.
pub mod traits {
    pub use valuerank_traits::*;
}

pub use valuerank_traits::{Factor, MetricRecord, PENALTY_RANK, RankError, Result, Universe};

/// Factor table, normalization, ranking and screens.
pub mod factors {
    pub use valuerank_factors::*;
}

/// Composite scoring.
pub mod combine {
    pub use valuerank_combine::*;
}

/// Report assembly.
pub mod report {
    pub use valuerank_report::*;
}

/// Data collaborators.
///
/// Requires network access at run time; nothing here is used by
/// [`Pipeline`] itself.
pub mod yahoo {
    pub use valuerank_yahoo::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::combine::{Combiner, ScoredRecord};
    pub use crate::factors::{FactorKind, RankConfig, Screen};
    pub use crate::report::{DisplayZone, Report, ReportConfig};
    pub use crate::{Factor, MetricRecord, RankError, Result, Universe};
    pub use crate::{Pipeline, PipelineConfig, PipelineOutput};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_factor(_factor: &dyn Factor) {}
        fn _accept_combiner(_combiner: &dyn combine::Combiner) {}

        let _error: RankError = RankError::InvalidData("test".to_string());
        assert_eq!(PENALTY_RANK, 9999);
    }
}
