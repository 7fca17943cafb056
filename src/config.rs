//! Configuration System
//!
//! Loads dashboard settings from a TOML file. Every field has a default, so an
//! empty file (or no file at all) gives the stock dashboard.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::data::{ResourcePaths, Selection};
use crate::view::price_chart::{MAX_POINT_COUNT, MAX_SERIES_SPAN_MS};

/// Longest accepted refresh period (one day)
pub const MAX_REFRESH_INTERVAL_MS: u64 = 24 * 60 * 60 * 1000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resources: ResourceConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the three JSON resources live
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    /// Directory or http(s) base URL the paths are relative to
    #[serde(default = "default_base")]
    pub base: String,

    #[serde(default = "default_prices_path")]
    pub prices_path: String,

    #[serde(default = "default_sentiment_path")]
    pub sentiment_path: String,

    #[serde(default = "default_correlation_path")]
    pub correlation_path: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base() -> String {
    ".".to_string()
}

fn default_prices_path() -> String {
    ResourcePaths::default().prices
}

fn default_sentiment_path() -> String {
    ResourcePaths::default().sentiment
}

fn default_correlation_path() -> String {
    ResourcePaths::default().correlation
}

fn default_request_timeout() -> u64 {
    5
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            prices_path: default_prices_path(),
            sentiment_path: default_sentiment_path(),
            correlation_path: default_correlation_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ResourceConfig {
    pub fn paths(&self) -> ResourcePaths {
        ResourcePaths {
            prices: self.prices_path.clone(),
            sentiment: self.sentiment_path.clone(),
            correlation: self.correlation_path.clone(),
        }
    }

    /// Whether `base` points at an HTTP server rather than a directory
    pub fn is_remote(&self) -> bool {
        self.base.starts_with("http://") || self.base.starts_with("https://")
    }

    /// Upper bound on one complete load of all three resources
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Polling loop settings
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_refresh_interval")]
    pub interval_ms: u64,
}

fn default_refresh_interval() -> u64 {
    10_000 // 10 seconds
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_refresh_interval(),
        }
    }
}

/// Placeholder price chart settings
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_point_count")]
    pub point_count: usize,

    #[serde(default = "default_point_interval")]
    pub interval_ms: i64,
}

fn default_point_count() -> usize {
    crate::view::price_chart::DEFAULT_POINT_COUNT
}

fn default_point_interval() -> i64 {
    crate::view::price_chart::DEFAULT_INTERVAL_MS
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            point_count: default_point_count(),
            interval_ms: default_point_interval(),
        }
    }
}

/// Selector rows and their initial state
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    #[serde(default = "default_symbol")]
    pub default_symbol: String,

    #[serde(default = "default_timeframe")]
    pub default_timeframe: String,

    /// Symbols offered in the asset selector
    #[serde(default = "default_assets")]
    pub assets: Vec<String>,

    /// Labels offered in the timeframe selector
    #[serde(default = "default_timeframes")]
    pub timeframes: Vec<String>,
}

fn default_symbol() -> String {
    Selection::default().symbol
}

fn default_timeframe() -> String {
    Selection::default().timeframe
}

fn default_assets() -> Vec<String> {
    ["BTC", "ETH", "XRP", "SOL", "DOGE", "ADA"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_timeframes() -> Vec<String> {
    ["1h", "24h", "7d", "30d"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_symbol: default_symbol(),
            default_timeframe: default_timeframe(),
            assets: default_assets(),
            timeframes: default_timeframes(),
        }
    }
}

impl SelectionConfig {
    pub fn initial_selection(&self) -> Selection {
        Selection {
            symbol: self.default_symbol.clone(),
            timeframe: self.default_timeframe.clone(),
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
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate().map_err(|error| ConfigError::Invalid {
            path: origin.to_path_buf(),
            error,
        })?;
        Ok(config)
    }

    /// Reject values that parse but cannot drive the dashboard
    pub fn validate(&self) -> Result<(), String> {
        if self.resources.request_timeout_secs == 0 {
            return Err("resources.request_timeout_secs must be greater than 0".to_string());
        }

        let refresh = self.refresh.interval_ms;
        if refresh == 0 || refresh > MAX_REFRESH_INTERVAL_MS {
            return Err(format!(
                "refresh.interval_ms must be between 1 and {}, got {}",
                MAX_REFRESH_INTERVAL_MS, refresh
            ));
        }

        let chart = &self.chart;
        if chart.interval_ms <= 0 {
            return Err(format!(
                "chart.interval_ms must be greater than 0, got {}",
                chart.interval_ms
            ));
        }
        if chart.point_count > MAX_POINT_COUNT {
            return Err(format!(
                "chart.point_count must be at most {}, got {}",
                MAX_POINT_COUNT, chart.point_count
            ));
        }
        let span = i64::try_from(chart.point_count)
            .ok()
            .and_then(|count| count.checked_mul(chart.interval_ms));
        match span {
            Some(span) if span <= MAX_SERIES_SPAN_MS => Ok(()),
            _ => Err(format!(
                "chart.point_count * chart.interval_ms must be at most {} ms",
                MAX_SERIES_SPAN_MS
            )),
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content, path)
    }

    /// Load the first candidate that exists and is valid, else defaults.
    ///
    /// Nothing is logged here; callers report the returned origin once their
    /// subscriber is installed.
    pub fn load_first(candidates: &[PathBuf]) -> (Self, ConfigOrigin) {
        let mut skipped = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => return (config, ConfigOrigin::File(path.clone())),
                Err(e) => skipped.push(e),
            }
        }

        (Self::default(), ConfigOrigin::Defaults { skipped })
    }

    /// Standard config locations, in search order
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("cryptodash").join("config.toml")),
            Some(PathBuf::from("./cryptodash.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from the first default location that works, else defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> (Self, ConfigOrigin) {
        Self::load_first(&Self::default_paths())
    }
}

/// Where a loaded configuration came from
#[derive(Debug)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// No usable file; `skipped` holds the files that failed to load
    Defaults { skipped: Vec<ConfigError> },
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigOrigin::Defaults { skipped } => {
                for e in skipped {
                    tracing::warn!("{}", e);
                }
                tracing::info!("Using default config");
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

    #[error("Invalid config file {path:?}: {error}")]
    Invalid { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Cryptodash Configuration

[resources]
# Directory or http(s) base URL the resource paths are relative to
base = "."
prices_path = "resources/data/crypto-prices.json"
sentiment_path = "resources/data/sentiment-data.json"
correlation_path = "resources/data/correlation-data.json"

# Timeout for loading the resources (seconds), also the HTTP request timeout
request_timeout_secs = 5

[refresh]
# How often to reload the resources (ms, at most one day)
interval_ms = 10000

[chart]
# Placeholder price series: number of points (at most 10000) and spacing (ms).
# The series may span at most ten years.
point_count = 100
interval_ms = 60000

[selection]
default_symbol = "BTC"
default_timeframe = "1h"
assets = ["BTC", "ETH", "XRP", "SOL", "DOGE", "ADA"]
timeframes = ["1h", "24h", "7d", "30d"]

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

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.refresh.interval_ms, 10_000);
        assert_eq!(config.chart.point_count, 100);
        assert_eq!(config.chart.interval_ms, 60_000);
        assert_eq!(config.selection.initial_selection(), Selection::default());
        assert_eq!(config.resources.paths(), ResourcePaths::default());
        assert!(!config.resources.is_remote());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::from_toml(&generate_default_config(), Path::new("generated")).unwrap();
        assert_eq!(config.refresh.interval_ms, 10_000);
        assert_eq!(config.selection.assets.len(), 6);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml = r#"
            [resources]
            base = "http://localhost:8000"

            [refresh]
            interval_ms = 2500
        "#;
        let config = Config::from_toml(toml, Path::new("partial")).unwrap();
        assert!(config.resources.is_remote());
        assert_eq!(config.refresh.interval_ms, 2500);
        assert_eq!(config.chart.point_count, 100);
        assert_eq!(config.resources.prices_path, "resources/data/crypto-prices.json");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cryptodash.toml");
        std::fs::write(&path, "[selection]\ndefault_symbol = \"ETH\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.selection.default_symbol, "ETH");
    }

    #[test]
    fn test_bad_toml() {
        let err = Config::from_toml("[refresh\ninterval_ms = 1", Path::new("bad")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    fn invalid(toml: &str) -> String {
        match Config::from_toml(toml, Path::new("invalid")) {
            Err(ConfigError::Invalid { error, .. }) => error,
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_refresh_interval_rejected() {
        let error = invalid("[refresh]\ninterval_ms = 0");
        assert!(error.contains("refresh.interval_ms"), "{}", error);
    }

    #[test]
    fn test_huge_refresh_interval_rejected() {
        let error = invalid("[refresh]\ninterval_ms = 100000000000");
        assert!(error.contains("refresh.interval_ms"), "{}", error);
    }

    #[test]
    fn test_non_positive_chart_interval_rejected() {
        for value in ["0", "-60000"] {
            let error = invalid(&format!("[chart]\ninterval_ms = {}", value));
            assert!(error.contains("chart.interval_ms"), "{}", error);
        }
    }

    #[test]
    fn test_overflowing_chart_span_rejected() {
        let error = invalid("[chart]\ninterval_ms = 100000000000000");
        assert!(error.contains("point_count * chart.interval_ms"), "{}", error);

        let error = invalid("[chart]\npoint_count = 10000\ninterval_ms = 9223372036854775807");
        assert!(error.contains("point_count * chart.interval_ms"), "{}", error);
    }

    #[test]
    fn test_too_many_points_rejected() {
        let error = invalid("[chart]\npoint_count = 1000000000000");
        assert!(error.contains("chart.point_count"), "{}", error);
    }

    #[test]
    fn test_zero_request_timeout_rejected() {
        let error = invalid("[resources]\nrequest_timeout_secs = 0");
        assert!(error.contains("request_timeout_secs"), "{}", error);
    }

    #[test]
    fn test_load_first_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let absent = dir.path().join("absent.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[refresh]\ninterval_ms = 0\n").unwrap();
        std::fs::write(&good, "[selection]\ndefault_symbol = \"SOL\"\n").unwrap();

        let (config, origin) = Config::load_first(&[broken.clone(), absent.clone(), good.clone()]);
        assert_eq!(config.selection.default_symbol, "SOL");
        assert!(matches!(origin, ConfigOrigin::File(ref p) if *p == good));

        let (config, origin) = Config::load_first(&[absent, broken]);
        assert_eq!(config.refresh.interval_ms, 10_000);
        match origin {
            ConfigOrigin::Defaults { skipped } => {
                assert_eq!(skipped.len(), 1);
                assert!(matches!(skipped[0], ConfigError::Invalid { .. }));
            }
            other => panic!("expected defaults, got {:?}", other),
        }
    }
}
