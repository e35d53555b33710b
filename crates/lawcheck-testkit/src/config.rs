//! Driver configuration
//!
//! Defaults, then an optional TOML file, then `LAWCHECK_*` environment
//! variables, then validation.

use std::path::Path;

use proptest::test_runner::Config;
use serde::{Deserialize, Serialize};

use crate::errors::{DriverError, Result};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "LAWCHECK_";

/// How many trials to run per check and how to seed them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Successful trials required per sampled check
    pub cases: u32,
    /// Upper bound on shrinking steps after a falsification
    pub max_shrink_iters: u32,
    /// Seed for reproducible runs; `None` draws a fresh seed per check
    pub seed: Option<u64>,
    /// Stop at the first falsified check
    pub fail_fast: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1024,
            seed: None,
            fail_fast: false,
        }
    }
}

impl DriverConfig {
    /// Load configuration from a TOML file, validated; missing keys take
    /// their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DriverConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by the environment, validated
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LAWCHECK_CASES`, `LAWCHECK_MAX_SHRINK_ITERS`, `LAWCHECK_SEED`
    /// and `LAWCHECK_FAIL_FAST`
    pub fn merge_with_env(&mut self) -> Result<()> {
        for (key, value) in std::env::vars() {
            if let Some(name) = key.strip_prefix(ENV_PREFIX) {
                self.set_from_string(&name.to_lowercase(), &value)?;
            }
        }
        Ok(())
    }

    /// Set one field by name; unknown keys are ignored
    pub fn set_from_string(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "cases" => self.cases = parse_field(key, value)?,
            "max_shrink_iters" => self.max_shrink_iters = parse_field(key, value)?,
            "seed" => self.seed = Some(parse_field(key, value)?),
            "fail_fast" => self.fail_fast = parse_field(key, value)?,
            _ => {}
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.cases == 0 {
            return Err(DriverError::config("cases must be greater than zero"));
        }
        Ok(())
    }

    /// proptest runner configuration for `cases` trials
    pub(crate) fn runner_config(&self, cases: u32) -> Config {
        let mut config = Config::with_cases(cases);
        config.max_shrink_iters = self.max_shrink_iters;
        config.failure_persistence = None;
        config
    }
}

fn parse_field<V: std::str::FromStr>(key: &str, value: &str) -> Result<V>
where
    V::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| DriverError::config(format!("invalid value {value:?} for {key}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DriverConfig::default();
        assert_eq!(config.cases, 256);
        assert_eq!(config.max_shrink_iters, 1024);
        assert_eq!(config.seed, None);
        assert!(!config.fail_fast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cases = 32\nseed = 99").unwrap();

        let config = DriverConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.cases, 32);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.max_shrink_iters, 1024);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cases = \"many\"").unwrap();
        assert_matches!(
            DriverConfig::load_from_file(file.path()),
            Err(DriverError::Parse(_))
        );
    }

    #[test]
    fn test_load_rejects_zero_cases() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cases = 0").unwrap();
        assert_matches!(
            DriverConfig::load_from_file(file.path()),
            Err(DriverError::Config { message }) if message.contains("cases")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(
            DriverConfig::load_from_file(&dir.path().join("absent.toml")),
            Err(DriverError::Io(_))
        );
    }

    #[test]
    fn test_set_from_string() {
        let mut config = DriverConfig::default();
        config.set_from_string("fail_fast", "true").unwrap();
        config.set_from_string("max_shrink_iters", " 10 ").unwrap();
        config.set_from_string("colour", "blue").unwrap();
        assert!(config.fail_fast);
        assert_eq!(config.max_shrink_iters, 10);
        assert_matches!(
            config.set_from_string("cases", "-1"),
            Err(DriverError::Config { .. })
        );
    }

    #[test]
    fn test_zero_cases_rejected() {
        let config = DriverConfig {
            cases: 0,
            ..DriverConfig::default()
        };
        assert_matches!(config.validate(), Err(DriverError::Config { .. }));
    }

    #[test]
    fn test_runner_config() {
        let config = DriverConfig {
            max_shrink_iters: 7,
            ..DriverConfig::default()
        };
        let runner = config.runner_config(3);
        assert_eq!(runner.cases, 3);
        assert_eq!(runner.max_shrink_iters, 7);
        assert!(runner.failure_persistence.is_none());
    }
}
