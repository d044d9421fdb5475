//! Report assembly and CSV rendering.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use valuerank_combine::ScoredRecord;
use valuerank_traits::{RankError, Result};

use crate::row::{DisplayZone, HEADER, ReportRow};

/// Configuration for report assembly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Time zone for earnings dates.
    pub zone: DisplayZone,
}

/// The final ranked report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    rows: Vec<ReportRow>,
    ranked: usize,
}

impl Report {
    /// Emitted rows, ascending by total value.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Number of emitted rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no row survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of records that were in the sorted ranking, before the display
    /// filter.
    #[must_use]
    pub const fn ranked(&self) -> usize {
        self.ranked
    }

    /// Writes header and rows as CSV with CRLF line endings.
    ///
    /// Cells containing delimiters, quotes or newlines are quoted.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);

        out.write_record(HEADER)?;
        for row in &self.rows {
            out.write_record(row.fields())?;
        }
        out.flush()?;
        Ok(())
    }

    /// Renders the report into a string.
    pub fn to_csv(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf).map_err(|e| RankError::InvalidData(e.to_string()))
    }

    /// Writes the report to `path`, replacing any existing file.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_csv()?)?;
        tracing::info!(path = %path.display(), rows = self.len(), "wrote report");
        Ok(())
    }
}

/// Filters, sorts and formats scored records.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    /// Create a builder with the given configuration.
    #[must_use]
    pub const fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Builds the report.
    ///
    /// Records with a zero total are discarded, the rest are stably sorted
    /// ascending by total value, and rows missing display fields are dropped.
    #[must_use]
    pub fn build(&self, scored: &[ScoredRecord]) -> Report {
        let mut ranked: Vec<&ScoredRecord> =
            scored.iter().filter(|s| s.total_value > 0).collect();
        ranked.sort_by_key(|s| s.total_value);

        let rows: Vec<ReportRow> = ranked
            .iter()
            .filter_map(|s| {
                let row = ReportRow::from_scored(s, self.config.zone);
                if row.is_none() {
                    tracing::debug!(symbol = %s.record.symbol, "incomplete record left out of report");
                }
                row
            })
            .collect();

        tracing::info!(
            ranked = ranked.len(),
            emitted = rows.len(),
            "built report"
        );

        Report {
            rows,
            ranked: ranked.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuerank_combine::FactorScores;
    use valuerank_traits::{Metric, MetricRecord};

    fn scored(symbol: &str, total: u32, complete: bool) -> ScoredRecord {
        let mut record = MetricRecord::new(symbol)
            .with(Metric::EarningsQuarterlyGrowth, 0.1)
            .with(Metric::PriceToBook, 1.0)
            .with(Metric::ForwardEps, 1.0);
        if complete {
            record.trailing_eps = Some(1.0);
        }
        ScoredRecord {
            record,
            scores: FactorScores::default(),
            total_value: total,
        }
    }

    fn builder() -> ReportBuilder {
        ReportBuilder::new(ReportConfig {
            zone: DisplayZone::Utc,
        })
    }

    #[test]
    fn test_sorted_ascending_and_filtered() {
        let input = vec![
            scored("C", 30, true),
            scored("ZERO", 0, true),
            scored("A", 10, true),
            scored("INCOMPLETE", 5, false),
            scored("B", 20, true),
        ];

        let report = builder().build(&input);
        let symbols: Vec<_> = report.rows().iter().map(|r| r.symbol.as_str()).collect();

        assert_eq!(symbols, vec!["A", "B", "C"]);
        assert_eq!(report.ranked(), 4);
    }

    #[test]
    fn test_equal_totals_keep_input_order() {
        let input = vec![scored("Y", 10, true), scored("X", 10, true)];
        let report = builder().build(&input);
        assert_eq!(report.rows()[0].symbol, "Y");
    }

    #[test]
    fn test_csv_header_and_crlf() {
        let report = builder().build(&[scored("A", 10, true)]);
        let text = report.to_csv().unwrap();
        let lines: Vec<_> = text.split("\r\n").collect();

        assert_eq!(
            lines[0],
            "Symbol,Total Value,Profitable Value,Giveaway Value,Best Future Value,\
             earningsQuarterlyGrowth,priceToBook,forwardPE,pegRatio,52WeekChange,\
             marketPrice,Industry,earningsDate,recommendation"
        );
        assert_eq!(lines[1], "A,10,0,0,0,0.1,1,,,,,,,");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_free_text_is_escaped() {
        let mut s = scored("A", 10, true);
        s.record.sector = Some("Consumer, Cyclical".to_string());
        s.record.recommendation_trend = Some(serde_json::json!({"buy": 1, "hold": 2}));

        let text = builder().build(&[s]).to_csv().unwrap();
        assert!(text.contains(r#""Consumer, Cyclical""#));
        assert!(text.contains(r#""{""buy"":1,""hold"":2}""#));
    }

    #[test]
    fn test_empty_input_yields_header_only() {
        let report = builder().build(&[]);
        assert!(report.is_empty());
        assert_eq!(report.to_csv().unwrap().matches("\r\n").count(), 1);
    }

    #[test]
    fn test_write_file() {
        let path = std::env::temp_dir().join(format!(
            "valuerank-report-{}.csv",
            std::process::id()
        ));
        let report = builder().build(&[scored("A", 10, true)]);
        report.write_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Symbol,"));
        std::fs::remove_file(&path).unwrap();
    }
}
