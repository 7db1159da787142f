//! Configuration loader and validator for the content sync service.
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Root configuration struct mirroring the YAML schema exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub app: App,
    pub sync: SyncSchedule,
}

/// App-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct App {
    pub data_dir: String,
}

/// Nightly sync schedule settings. The fire point is a wall-clock time in a
/// named IANA zone, independent of the server's own zone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncSchedule {
    pub timezone: String,
    pub hour: u32,
    pub minute: u32,
}

impl Config {
    /// Ensure required directories exist (creates `app.data_dir` if missing).
    pub fn ensure_dirs(&self) -> Result<(), std::io::Error> {
        if self.app.data_dir.trim().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.app.data_dir)
    }

    /// The parsed IANA zone. Validation guarantees this succeeds after load.
    pub fn sync_timezone(&self) -> Result<Tz, ConfigError> {
        self.sync
            .timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::Invalid("sync.timezone is not a known IANA zone"))
    }
}

/// Load configuration from a YAML file and validate it.
/// - If `path` is None, uses `config.yaml` in the current working directory.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new("config.yaml"));
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Validate a configuration instance.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.app.data_dir.trim().is_empty() {
        return Err(ConfigError::Invalid("app.data_dir must be non-empty"));
    }
    if cfg.sync.timezone.parse::<Tz>().is_err() {
        return Err(ConfigError::Invalid(
            "sync.timezone must be a valid IANA zone name",
        ));
    }
    if cfg.sync.hour > 23 {
        return Err(ConfigError::Invalid("sync.hour must be in 0..=23"));
    }
    if cfg.sync.minute > 59 {
        return Err(ConfigError::Invalid("sync.minute must be in 0..=59"));
    }
    Ok(())
}

/// Example YAML shipped with the service; also the fixture for config tests.
pub fn example() -> &'static str {
    r#"app:
  data_dir: "./data"

sync:
  timezone: "Europe/London"
  hour: 23
  minute: 0
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_example_ok() {
        let cfg: Config = serde_yaml::from_str(example()).unwrap();
        validate(&cfg).unwrap();
        assert_eq!(cfg.sync_timezone().unwrap(), chrono_tz::Europe::London);
    }

    #[test]
    fn invalid_data_dir() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.app.data_dir = "".into();
        let err = validate(&cfg).unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("data_dir")),
            _ => panic!("wrong error"),
        }
    }

    #[test]
    fn invalid_timezone() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.sync.timezone = "Atlantis/Lost".into();
        let err = validate(&cfg).unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("timezone")),
            _ => panic!("wrong error"),
        }
    }

    #[test]
    fn invalid_schedule_fields() {
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.sync.hour = 24;
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));

        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.sync.minute = 60;
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn ensure_dirs_creates_data_dir() {
        let td = tempdir().unwrap();
        let data_path = td.path().join("data");
        let mut cfg: Config = serde_yaml::from_str(example()).unwrap();
        cfg.app.data_dir = data_path.to_string_lossy().to_string();
        cfg.ensure_dirs().unwrap();
        assert!(data_path.exists());
    }

    #[test]
    fn load_from_file_ok() {
        let td = tempdir().unwrap();
        let p = td.path().join("config.yaml");
        fs::write(&p, example()).unwrap();
        let cfg = load(Some(&p)).unwrap();
        assert_eq!(cfg.sync.hour, 23);
        assert_eq!(cfg.sync.minute, 0);
    }
}
