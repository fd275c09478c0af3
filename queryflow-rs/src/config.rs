//! Configuration for queryflow-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{QueryFlowError, Result};

/// Environment variable prefix, e.g. `QUERYFLOW__SEARCH__MAX_RESULTS=5`
pub const ENV_PREFIX: &str = "QUERYFLOW";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryFlowConfig {
    /// Simulated per-operation delays
    pub latency: LatencyConfig,
    /// Search result assembly
    pub search: SearchConfig,
    /// Chat reply assembly
    pub chat: ChatConfig,
    /// Upload validation
    pub upload: UploadConfig,
    /// Random source
    pub random: RandomConfig,
    /// Logging
    pub logging: LoggingConfig,
}

/// Inclusive delay range in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    pub const fn between(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self::between(ms, ms)
    }
}

/// Simulated latency for every service operation
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// When false no operation sleeps
    pub enabled: bool,
    pub search: LatencyRange,
    pub search_get: LatencyRange,
    pub chat: LatencyRange,
    pub chat_cache: LatencyRange,
    pub files_list: LatencyRange,
    pub files_get: LatencyRange,
    pub files_upload: LatencyRange,
    pub files_delete: LatencyRange,
    pub history_list: LatencyRange,
    pub history_get: LatencyRange,
    pub history_create: LatencyRange,
    pub history_delete: LatencyRange,
    pub history_clear: LatencyRange,
    pub settings_get: LatencyRange,
    pub settings_update: LatencyRange,
    pub settings_reset: LatencyRange,
}

impl LatencyConfig {
    /// Same ranges, but nothing sleeps
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn ranges(&self) -> [(&'static str, LatencyRange); 16] {
        [
            ("search", self.search),
            ("search_get", self.search_get),
            ("chat", self.chat),
            ("chat_cache", self.chat_cache),
            ("files_list", self.files_list),
            ("files_get", self.files_get),
            ("files_upload", self.files_upload),
            ("files_delete", self.files_delete),
            ("history_list", self.history_list),
            ("history_get", self.history_get),
            ("history_create", self.history_create),
            ("history_delete", self.history_delete),
            ("history_clear", self.history_clear),
            ("settings_get", self.settings_get),
            ("settings_update", self.settings_update),
            ("settings_reset", self.settings_reset),
        ]
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            search: LatencyRange::between(800, 1500),
            search_get: LatencyRange::fixed(200),
            chat: LatencyRange::between(1200, 2000),
            chat_cache: LatencyRange::fixed(100),
            files_list: LatencyRange::between(400, 700),
            files_get: LatencyRange::fixed(200),
            files_upload: LatencyRange::between(2000, 3000),
            files_delete: LatencyRange::fixed(300),
            history_list: LatencyRange::between(300, 500),
            history_get: LatencyRange::fixed(200),
            history_create: LatencyRange::fixed(200),
            history_delete: LatencyRange::fixed(200),
            history_clear: LatencyRange::fixed(400),
            settings_get: LatencyRange::fixed(300),
            settings_update: LatencyRange::fixed(500),
            settings_reset: LatencyRange::fixed(300),
        }
    }
}

/// Search result assembly
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result-set limit
    pub max_results: usize,
    /// Lower bound of the synthetic score (inclusive)
    pub score_min: f64,
    /// Upper bound of the synthetic score (exclusive)
    pub score_max: f64,
    /// Probability that a result is flagged as cached
    pub cached_probability: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            score_min: 0.6,
            score_max: 1.0,
            cached_probability: 0.3,
        }
    }
}

/// Chat reply assembly
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Probability that a reply is flagged as cached
    pub cached_probability: f64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            cached_probability: 0.4,
        }
    }
}

/// Upload validation
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Largest accepted file
    pub max_size_bytes: u64,
    /// Accepted lower-case extensions
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: 10 * 1024 * 1024, // 10MB
            allowed_extensions: ["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

/// Random source configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed; None seeds from OS entropy
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "queryflow_rs=info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl QueryFlowConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| QueryFlowError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| QueryFlowError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Layer defaults, an optional TOML file and `QUERYFLOW__*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .map_err(|e| QueryFlowError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| QueryFlowError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration for tests and scripted runs: no sleeping, fixed seed
    pub fn instant(seed: u64) -> Self {
        Self {
            latency: LatencyConfig::disabled(),
            random: RandomConfig { seed: Some(seed) },
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (name, range) in self.latency.ranges() {
            if range.min_ms > range.max_ms {
                return Err(QueryFlowError::Config(format!(
                    "latency.{}: min_ms {} exceeds max_ms {}",
                    name, range.min_ms, range.max_ms
                )));
            }
        }

        if self.search.max_results == 0 {
            return Err(QueryFlowError::Config(
                "search.max_results must be at least 1".to_string(),
            ));
        }

        let (lo, hi) = (self.search.score_min, self.search.score_max);
        if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo > hi {
            return Err(QueryFlowError::Config(format!(
                "search score range [{}, {}) must lie within [0, 1]",
                lo, hi
            )));
        }

        for (name, p) in [
            ("search.cached_probability", self.search.cached_probability),
            ("chat.cached_probability", self.chat.cached_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(QueryFlowError::Config(format!(
                    "{} must lie within [0, 1], got {}",
                    name, p
                )));
            }
        }

        if self.upload.allowed_extensions.is_empty() {
            return Err(QueryFlowError::Config(
                "upload.allowed_extensions is empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = QueryFlowConfig::default();
        assert!(config.latency.enabled);
        assert_eq!(config.search.max_results, 10);
        assert_eq!(config.upload.max_size_bytes, 10 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[latency]
enabled = false

[search]
max_results = 5

[latency.chat]
min_ms = 10
max_ms = 20
"#;
        let config: QueryFlowConfig = toml::from_str(toml).unwrap();
        assert!(!config.latency.enabled);
        assert_eq!(config.latency.chat, LatencyRange::between(10, 20));
        assert_eq!(config.latency.search, LatencyRange::between(800, 1500));
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.score_min, 0.6);
    }

    #[test]
    fn test_validate_inverted_range() {
        let mut config = QueryFlowConfig::default();
        config.latency.files_upload = LatencyRange::between(500, 100);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("files_upload"));
    }

    #[test]
    fn test_validate_probability() {
        let mut config = QueryFlowConfig::default();
        config.chat.cached_probability = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[random]\nseed = 42\n\n[upload]\nmax_size_bytes = 1024").unwrap();

        let config = QueryFlowConfig::from_file(file.path()).unwrap();
        assert_eq!(config.random.seed, Some(42));
        assert_eq!(config.upload.max_size_bytes, 1024);
        assert_eq!(config.upload.allowed_extensions.len(), 7);
    }

    #[test]
    fn test_load_layers_file_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[search]\nmax_results = 3\ncached_probability = 0.5").unwrap();

        let config = QueryFlowConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.search.cached_probability, 0.5);
        assert_eq!(config.chat.cached_probability, 0.4);
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\nmax_results = 0").unwrap();

        assert!(matches!(
            QueryFlowConfig::from_file(file.path()),
            Err(QueryFlowError::Config(_))
        ));
    }
}
