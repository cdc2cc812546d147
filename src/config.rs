//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::animation::TweenConfig;
use crate::clock::{is_valid_pattern, DEFAULT_CLOCK_FORMAT};
use crate::notify::NotificationConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub animation: TweenConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub progress: ProgressConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard content and clock settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_active_projects")]
    pub active_projects: u32,

    /// Tasks seeded into the list at startup
    #[serde(default = "default_sample_tasks")]
    pub sample_tasks: Vec<String>,

    #[serde(default = "default_clock_interval")]
    pub clock_interval_ms: u64,

    /// strftime pattern for the header clock
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
}

fn default_active_projects() -> u32 {
    3
}

fn default_sample_tasks() -> Vec<String> {
    vec![
        "Review project proposal".to_string(),
        "Update team documentation".to_string(),
        "Prepare for client meeting".to_string(),
    ]
}

fn default_clock_interval() -> u64 {
    1000
}

fn default_clock_format() -> String {
    DEFAULT_CLOCK_FORMAT.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            active_projects: default_active_projects(),
            sample_tasks: default_sample_tasks(),
            clock_interval_ms: default_clock_interval(),
            clock_format: default_clock_format(),
        }
    }
}

/// Simulated "hours worked" progress
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProgressConfig {
    /// How often the simulation rolls (ms)
    #[serde(default = "default_progress_interval")]
    pub interval_ms: u64,

    /// Chance per roll that progress is made (0.0 - 1.0)
    #[serde(default = "default_probability")]
    pub probability: f64,

    /// Hours added per successful roll, in tenths of an hour
    #[serde(default = "default_increment")]
    pub increment_tenths: u32,
}

fn default_progress_interval() -> u64 {
    10_000
}

fn default_probability() -> f64 {
    0.3
}

fn default_increment() -> u32 {
    1
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_progress_interval(),
            probability: default_probability(),
            increment_tenths: default_increment(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    ///
    /// Overrides that fail validation are discarded in favour of the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        config.apply_overrides(lookup);

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Ignoring environment overrides: {}", e);
                Config::default()
            }
        }
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("taskpulse").join("config.toml")),
            Some(PathBuf::from("./taskpulse.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.steps == 0 {
            return Err(ConfigError::Invalid("animation.steps must be at least 1".into()));
        }
        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "animation.frame_interval_ms must be positive".into(),
            ));
        }
        if self.dashboard.clock_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "dashboard.clock_interval_ms must be positive".into(),
            ));
        }
        if self.progress.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "progress.interval_ms must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.progress.probability) {
            return Err(ConfigError::Invalid(format!(
                "progress.probability must be between 0 and 1, got {}",
                self.progress.probability
            )));
        }
        if !is_valid_pattern(&self.dashboard.clock_format) {
            return Err(ConfigError::Invalid(format!(
                "dashboard.clock_format is not a valid strftime pattern: {:?}",
                self.dashboard.clock_format
            )));
        }
        if self.notifications.display_ms < self.notifications.enter_delay_ms {
            return Err(ConfigError::Invalid(
                "notifications.display_ms must not be shorter than enter_delay_ms".into(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("TASKPULSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("TASKPULSE_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(projects) = lookup("TASKPULSE_ACTIVE_PROJECTS") {
            if let Ok(n) = projects.parse() {
                self.dashboard.active_projects = n;
            }
        }
        if let Some(interval) = lookup("TASKPULSE_PROGRESS_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.progress.interval_ms = ms;
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Taskpulse Configuration
#
# Environment variables override these settings:
# - TASKPULSE_LOG_LEVEL
# - TASKPULSE_LOG_FORMAT
# - TASKPULSE_ACTIVE_PROJECTS
# - TASKPULSE_PROGRESS_INTERVAL_MS

[dashboard]
# Value shown in the "Active Projects" counter
active_projects = 3

# Tasks added to the list at startup
sample_tasks = [
    "Review project proposal",
    "Update team documentation",
    "Prepare for client meeting",
]

# How often the header clock refreshes (ms)
clock_interval_ms = 1000

# strftime pattern for the header clock
clock_format = "%A, %B %-d, %Y at %I:%M:%S %p"

[animation]
# Frames per counter animation
steps = 20

# Delay between frames (ms)
frame_interval_ms = 50

[notifications]
# Enter transition length (ms)
enter_delay_ms = 100

# Time until a toast starts leaving (ms)
display_ms = 3000

# Exit transition length (ms)
exit_ms = 300

[progress]
# How often the "hours worked" simulation rolls (ms)
interval_ms = 10000

# Chance per roll of logging progress
probability = 0.3

# Hours added per successful roll, in tenths
increment_tenths = 1

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dashboard.active_projects, 3);
        assert_eq!(config.dashboard.sample_tasks.len(), 3);
        assert_eq!(config.animation.steps, 20);
        assert_eq!(config.notifications.display_ms, 3000);
        assert_eq!(config.progress.interval_ms, 10_000);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_config_round_trips_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.dashboard.sample_tasks, defaults.dashboard.sample_tasks);
        assert_eq!(config.dashboard.clock_format, defaults.dashboard.clock_format);
        assert_eq!(config.animation, defaults.animation);
        assert_eq!(config.notifications, defaults.notifications);
        assert_eq!(config.progress.probability, defaults.progress.probability);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\nactive_projects = 5\n\n[animation]\nsteps = 10").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dashboard.active_projects, 5);
        assert_eq!(config.animation.steps, 10);
        assert_eq!(config.animation.frame_interval_ms, 50);
        assert_eq!(config.notifications.exit_ms, 300);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[progress]\nprobability = 1.5").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard\nbroken").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TASKPULSE_LOG_LEVEL", "debug"),
            ("TASKPULSE_ACTIVE_PROJECTS", "7"),
            ("TASKPULSE_PROGRESS_INTERVAL_MS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.dashboard.active_projects, 7);
        assert_eq!(config.progress.interval_ms, 10_000);
    }

    #[test]
    fn test_invalid_env_overrides_fall_back_to_defaults() {
        let config = Config::from_lookup(|key| {
            (key == "TASKPULSE_PROGRESS_INTERVAL_MS").then(|| "0".to_string())
        });

        assert!(config.validate().is_ok());
        assert_eq!(config.progress.interval_ms, 10_000);

        let config = Config::from_lookup(|key| {
            (key == "TASKPULSE_PROGRESS_INTERVAL_MS").then(|| "2500".to_string())
        });
        assert_eq!(config.progress.interval_ms, 2_500);
    }

    #[test]
    fn test_load_rejects_bad_clock_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\nclock_format = \"%Q\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
