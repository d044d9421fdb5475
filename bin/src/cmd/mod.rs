//! CLI subcommand modules.
//!
//! This module contains the implementations for all valuerank CLI subcommands.

pub(crate) mod factors;
pub(crate) mod fetch;
pub(crate) mod rank;
pub(crate) mod screen;
pub(crate) mod universe;

/// Formats an optional number for console tables.
pub(crate) fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}
