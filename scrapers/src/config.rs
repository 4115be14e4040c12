use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Fetcher configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with TC_ prefix (always wins)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory portraits are written to (created if missing).
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name of the metadata sidecar inside `dir`.
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    /// Path to the congress-legislators YAML roster.
    #[serde(default = "default_roster_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Bioguide photo root; images live at `<root>/<first char>/<id>.jpg`.
    #[serde(default = "default_bioguide_base_url")]
    pub bioguide_base_url: String,

    /// unitedstates image mirror root; images live at `<root>/<id>.jpg`.
    #[serde(default = "default_unitedstates_base_url")]
    pub unitedstates_base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// User-Agent sent with every request. Both origins reject non-browser agents.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("representative_portraits")
}

fn default_metadata_file() -> String {
    "representatives_metadata.json".to_string()
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("legislators-current.yaml")
}

fn default_bioguide_base_url() -> String {
    "https://bioguide.congress.gov/bioguide/photo".to_string()
}

fn default_unitedstates_base_url() -> String {
    "https://unitedstates.github.io/images/congress/original".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string()
}

// These functions cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            metadata_file: default_metadata_file(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            path: default_roster_path(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            bioguide_base_url: default_bioguide_base_url(),
            unitedstates_base_url: default_unitedstates_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. config.yaml file (if exists)
    /// 3. Environment variables with TC_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("TC_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file the user named explicitly.
    ///
    /// Unlike [`Config::load`], the file must exist.
    ///
    /// # Errors
    /// Returns an error if the file is missing, cannot be loaded, or is invalid.
    pub fn load_explicit(yaml_path: &Path) -> Result<Self, ConfigError> {
        if !yaml_path.is_file() {
            return Err(ConfigError::Validation(format!(
                "config file '{}' does not exist",
                yaml_path.display()
            )));
        }

        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file_exact(yaml_path))
            .merge(Env::prefixed("TC_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    ///
    /// # Errors
    /// Returns an error if the overridden configuration is invalid.
    pub fn with_overrides(
        mut self,
        roster_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = roster_path {
            self.roster.path = path;
        }
        if let Some(dir) = output_dir {
            self.output.dir = dir;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output.dir cannot be empty".into()));
        }

        // Must be a bare file name so the sidecar stays inside output.dir
        let metadata_file = &self.output.metadata_file;
        if metadata_file.is_empty() || metadata_file.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "output.metadata_file must be a plain file name, got: '{metadata_file}'"
            )));
        }

        if self.roster.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("roster.path cannot be empty".into()));
        }

        for (key, url) in [
            ("sources.bioguide_base_url", &self.sources.bioguide_base_url),
            (
                "sources.unitedstates_base_url",
                &self.sources.unitedstates_base_url,
            ),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "{key} must start with http:// or https://, got: '{url}'"
                )));
            }
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "http.user_agent cannot be empty".into(),
            ));
        }

        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "http.timeout_secs cannot be 0".into(),
            ));
        }

        Ok(())
    }
}
