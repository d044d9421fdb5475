//! Loading the optional JSON configuration file.

use anyhow::{Context, Result};
use std::path::Path;
use valuerank::PipelineConfig;

/// Reads `path` if given, otherwise returns the defaults.
///
/// Fields left out of the file keep their default values.
pub(crate) fn load(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(?config, "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuerank::report::DisplayZone;

    #[test]
    fn test_defaults_without_file() {
        let config = load(None).unwrap();
        assert_eq!(config.rank.penalty_rank, valuerank::PENALTY_RANK);
        assert_eq!(config.report.zone, DisplayZone::Local);
    }

    #[test]
    fn test_partial_file() {
        let path = std::env::temp_dir().join(format!("valuerank-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"report": {"zone": "utc"}}"#).unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.report.zone, DisplayZone::Utc);
        assert_eq!(config.rank.penalty_rank, valuerank::PENALTY_RANK);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/valuerank.json"))).is_err());
    }
}
