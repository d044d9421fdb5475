#![doc(issue_tracker_base_url = "https://github.com/factordynamics/valuerank/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type and trait definitions for the valuerank ranking engine.
//!
//! This crate provides the per-symbol [`MetricRecord`], the validated
//! [`Universe`] threaded through the pipeline, the [`Factor`] abstraction the
//! ranker is written against, and the shared [`RankError`] type.

/// The version of the valuerank-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod de;
pub mod error;
pub mod factor;
pub mod types;

// Re-exports
pub use error::{RankError, Result};
pub use factor::{Factor, SortOrder};
pub use types::{Metric, MetricRecord, Symbol, Universe};

/// Rank assigned to a record whose metric is missing or sentinel-valued.
pub const PENALTY_RANK: u32 = 9999;
