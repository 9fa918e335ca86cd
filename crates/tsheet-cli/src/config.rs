//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tsheet_core::{WorkWeek, target_duration};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default start of the target window (`HH:mm`).
    pub entrance_time: String,
    /// Default end of the target window (`HH:mm`).
    pub exit_time: String,
    /// Default interval for `tsheet round`.
    pub round_interval_minutes: i64,
    /// Non-working days of the week.
    pub weekend_days: Vec<Weekday>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entrance_time: "09:00".to_string(),
            exit_time: "17:00".to_string(),
            round_interval_minutes: 15,
            weekend_days: WorkWeek::default().weekend,
        }
    }
}

impl Config {
    /// Loads configuration from default locations, then `config_path` if given.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // TSHEET_ENTRANCE_TIME, TSHEET_EXIT_TIME, ...
        figment = figment.merge(Env::prefixed("TSHEET_"));

        figment.extract()
    }

    /// Target minutes for the configured window, 0 if it is invalid.
    pub fn target_minutes(&self) -> i64 {
        target_duration(&self.entrance_time, &self.exit_time)
    }

    pub fn work_week(&self) -> WorkWeek {
        WorkWeek {
            weekend: self.weekend_days.clone(),
        }
    }
}

/// Returns the platform-specific config directory for tsheet.
///
/// On Linux: `~/.config/tsheet`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tsheet"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_eight_hours() {
        let config = Config::default();
        assert_eq!(config.target_minutes(), 480);
        assert_eq!(config.weekend_days, vec![Weekday::Fri, Weekday::Sat]);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("tsheet.toml");
        std::fs::write(
            &path,
            "entrance_time = \"08:30\"\nexit_time = \"16:00\"\nweekend_days = [\"Sat\", \"Sun\"]\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.entrance_time, "08:30");
        assert_eq!(config.target_minutes(), 450);
        assert_eq!(config.round_interval_minutes, 15);
        assert_eq!(config.work_week().weekend, vec![Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_invalid_window_targets_zero() {
        let config = Config {
            exit_time: "08:00".to_string(),
            ..Config::default()
        };
        assert_eq!(config.target_minutes(), 0);
    }

    #[test]
    fn test_dirs_config_path_ends_with_tsheet() {
        if let Some(path) = dirs_config_path() {
            assert_eq!(path.file_name().unwrap(), "tsheet");
        }
    }
}
