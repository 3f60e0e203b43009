use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::models::RiskCategory;

/// Root configuration structure, deserialized from `.churn-checkr/config.toml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where the trained classifier lives.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Path to the exported pipeline artifact. Defaults to `model.json`.
    #[serde(default = "default_model_path")]
    pub path: PathBuf,
}

fn default_model_path() -> PathBuf {
    PathBuf::from("model.json")
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            path: default_model_path(),
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Output format used when `--report` is not given.
    #[serde(default)]
    pub format: OutputFormat,
    /// Exit with code 1 when the risk tier is at or above this one.
    #[serde(default)]
    pub fail_on: Option<RiskCategory>,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<workdir>/.churn-checkr/config.toml`
/// 3. `~/.config/churn-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(workdir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = workdir.join(".churn-checkr").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("churn-checkr").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "reading config");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.model.path, PathBuf::from("model.json"));
        assert_eq!(cfg.report.format, OutputFormat::Terminal);
        assert_eq!(cfg.report.fail_on, None);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_full_file() {
        let cfg: Config = toml::from_str(
            r#"
[model]
path = "artifacts/churn.json"

[report]
format = "json"
fail_on = "high"
"#,
        )
        .unwrap();
        assert_eq!(cfg.model.path, PathBuf::from("artifacts/churn.json"));
        assert_eq!(cfg.report.format, OutputFormat::Json);
        assert_eq!(cfg.report.fail_on, Some(RiskCategory::High));
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let result: Result<Config, _> = toml::from_str("[report]\nfail_on = \"severe\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_workdir_config_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_dir = dir.path().join(".churn-checkr");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(cfg_dir.join("config.toml"), "[model]\npath = \"local.json\"\n").unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.model.path, PathBuf::from("local.json"));
    }

    #[test]
    fn test_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_dir = dir.path().join(".churn-checkr");
        std::fs::create_dir(&cfg_dir).unwrap();
        std::fs::write(cfg_dir.join("config.toml"), "[model]\npath = \"local.json\"\n").unwrap();
        let override_path = dir.path().join("other.toml");
        std::fs::write(&override_path, "[model]\npath = \"other.json\"\n").unwrap();

        let cfg = load_config(dir.path(), Some(&override_path)).unwrap();
        assert_eq!(cfg.model.path, PathBuf::from("other.json"));
    }

    #[test]
    fn test_missing_override_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path(), Some(&dir.path().join("nope.toml"))).is_err());
    }
}
