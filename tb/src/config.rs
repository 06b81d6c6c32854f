//! Toolbelt configuration types and loading

use eyre::{Context, Result};
use securegen::{
    DEFAULT_API_KEY_LENGTH, DEFAULT_PASSWORD_LENGTH, DEFAULT_PIN_LENGTH, DEFAULT_TOKEN_BYTES, DEFAULT_UUID_VERSION,
    HashAlgorithm,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main Toolbelt configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Values used when a tool input is omitted
    pub defaults: DefaultsConfig,

    /// Upper bounds on tool inputs
    pub limits: LimitsConfig,
}

impl Config {
    /// Reject settings no tool call could succeed with
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.defaults.uuid_version, 1 | 4) {
            return Err(eyre::eyre!(
                "defaults.uuid-version must be 1 or 4, got {}",
                self.defaults.uuid_version
            ));
        }
        if self.limits.max_batch == 0 {
            return Err(eyre::eyre!("limits.max-batch must be at least 1"));
        }
        if self.limits.max_expression_len == 0 {
            return Err(eyre::eyre!("limits.max-expression-len must be at least 1"));
        }
        Ok(())
    }

    /// Load configuration: explicit path, else the first readable search path, else defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let found = Self::search_paths().into_iter().filter(|path| path.exists()).find_map(|path| {
            Self::load_from_file(&path)
                .inspect_err(|e| tracing::warn!("Skipping config {}: {:#}", path.display(), e))
                .ok()
        });

        Ok(found.unwrap_or_else(|| {
            tracing::info!("No config file found, using defaults");
            Self::default()
        }))
    }

    /// Read only the log level, before logging is set up
    ///
    /// Consults the same paths as [`Config::load`] but never fails; an
    /// unreadable file is skipped silently.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::search_paths(),
        };

        candidates
            .into_iter()
            .filter_map(|path| fs::read_to_string(path).ok())
            .find_map(|content| serde_yaml::from_str::<Self>(&content).ok())
            .and_then(|config| config.log_level)
    }

    /// `.toolbelt.yml` in the working directory, then `<config dir>/toolbelt/toolbelt.yml`
    fn search_paths() -> Vec<PathBuf> {
        std::iter::once(PathBuf::from(".toolbelt.yml"))
            .chain(Self::user_config_path())
            .collect()
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("toolbelt").join("toolbelt.yml"))
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Values used when a tool input is omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// UUID version (1 or 4)
    #[serde(rename = "uuid-version")]
    pub uuid_version: u8,

    /// Password length in characters
    #[serde(rename = "password-length")]
    pub password_length: usize,

    /// API key length in characters
    #[serde(rename = "api-key-length")]
    pub api_key_length: usize,

    /// Token length in random bytes
    #[serde(rename = "token-bytes")]
    pub token_bytes: usize,

    /// PIN length in digits
    #[serde(rename = "pin-length")]
    pub pin_length: usize,

    /// Digest algorithm for hash_text
    #[serde(rename = "hash-algorithm")]
    pub hash_algorithm: HashAlgorithm,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            uuid_version: DEFAULT_UUID_VERSION,
            password_length: DEFAULT_PASSWORD_LENGTH,
            api_key_length: DEFAULT_API_KEY_LENGTH,
            token_bytes: DEFAULT_TOKEN_BYTES,
            pin_length: DEFAULT_PIN_LENGTH,
            hash_algorithm: HashAlgorithm::default(),
        }
    }
}

/// Upper bounds on tool inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest accepted `count`
    #[serde(rename = "max-batch")]
    pub max_batch: usize,

    /// Longest accepted expression, in bytes
    #[serde(rename = "max-expression-len")]
    pub max_expression_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_batch: 100,
            max_expression_len: 1000,
        }
    }
}
