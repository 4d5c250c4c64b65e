use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// CLI configuration, loaded from TOML with every field defaulted so
/// a missing config file just means "run with defaults".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Directory holding the catalog blob files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory the CSV reports are written to
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    /// Operator name recorded on test executions
    #[serde(default = "default_user")]
    pub user: String,

    /// Delay between restoration probes, in seconds
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Overall restoration deadline, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gauntlet")
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_user() -> String {
    "Joe Smith".to_string()
}

fn default_poll_interval_secs() -> u64 {
    5
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            report_dir: default_report_dir(),
            user: default_user(),
            poll_interval_secs: default_poll_interval_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CliConfig {
    /// Load from an explicit path, or from the default location if it
    /// exists, or fall back to defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gauntlet").join("config.toml"))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = CliConfig::load(Some(PathBuf::from("/nonexistent/gauntlet.toml")));
        assert!(err.is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "user = \"operator\"\ntimeout_secs = 60\n").unwrap();

        let config = CliConfig::load(Some(path)).unwrap();
        assert_eq!(config.user, "operator");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "user = [not toml").unwrap();
        assert!(CliConfig::load(Some(path)).is_err());
    }
}
