//! Ranked report builder for valuerank.
//!
//! Turns scored records into the final report: positive totals only, sorted
//! ascending (lower composite is better), incomplete rows left out, and
//! rendered as CSV with escaped free-text cells.

#![warn(missing_docs)]

mod builder;
mod row;

pub use builder::{Report, ReportBuilder, ReportConfig};
pub use row::{DisplayZone, HEADER, ReportRow};
