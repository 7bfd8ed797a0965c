use anyhow::{bail, Context, Result};
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use taskpick_core::SortKey;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplaySection,
    pub optimizer: OptimizerSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Sort used by `list` when `--by` is not given.
    pub default_sort: SortKey,
    /// IANA zone used to compute "now" for timelines.
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSection {
    /// Largest accepted budget. The optimizer table grows with
    /// tasks x minutes, so this bounds memory.
    pub max_budget_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// tracing EnvFilter directive, used when RUST_LOG is unset.
    pub filter: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Deadline,
            timezone: "UTC".to_string(),
        }
    }
}

impl Default for OptimizerSection {
    fn default() -> Self {
        Self {
            // One week.
            max_budget_minutes: 7 * 24 * 60,
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "taskpick=warn".to_string(),
        }
    }
}

impl Config {
    /// Reject budgets the optimizer should not be asked to handle.
    /// Negative budgets are left for the core to report.
    pub fn check_budget(&self, minutes: i64) -> Result<()> {
        if minutes > self.optimizer.max_budget_minutes {
            bail!(
                "budget of {} minutes exceeds optimizer.max_budget_minutes ({})",
                minutes,
                self.optimizer.max_budget_minutes
            );
        }
        Ok(())
    }

    /// Current wall-clock time in the configured zone, without the zone.
    pub fn local_now(&self) -> Result<NaiveDateTime> {
        let tz: Tz = self
            .display
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone: {}", self.display.timezone))?;
        Ok(Utc::now().with_timezone(&tz).naive_local())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Write the default config unless one exists. Returns whether a file was written.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(path, &Config::default())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.display.default_sort, SortKey::Deadline);
        assert_eq!(cfg.optimizer.max_budget_minutes, 10_080);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[display]\ndefault_sort = \"priority\"\n").unwrap();

        let cfg = load_config(&p).unwrap();
        assert_eq!(cfg.display.default_sort, SortKey::Priority);
        assert_eq!(cfg.display.timezone, "UTC");
        assert_eq!(cfg.log.filter, "taskpick=warn");
    }

    #[test]
    fn bad_sort_key_in_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[display]\ndefault_sort = \"urgency\"\n").unwrap();
        assert!(load_config(&p).is_err());
    }

    #[test]
    fn init_writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("sub").join("config.toml");
        assert!(init_config(&p).unwrap());
        assert!(!init_config(&p).unwrap());
        let cfg = load_config(&p).unwrap();
        assert_eq!(cfg.optimizer.max_budget_minutes, 10_080);
    }

    #[test]
    fn budget_cap() {
        let cfg = Config::default();
        assert!(cfg.check_budget(10_080).is_ok());
        assert!(cfg.check_budget(10_081).is_err());
    }

    #[test]
    fn bad_timezone() {
        let mut cfg = Config::default();
        cfg.display.timezone = "Mars/Olympus".to_string();
        assert!(cfg.local_now().is_err());
        cfg.display.timezone = "America/Chicago".to_string();
        assert!(cfg.local_now().is_ok());
    }
}
