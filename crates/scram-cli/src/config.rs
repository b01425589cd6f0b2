use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use scram_dictionary::DictionaryConfig;
use scram_input::InputConfig;

use crate::cli::Cli;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "scrambled.toml";

/// Full application configuration, one section per concern.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub dictionary: DictionaryConfig,
    pub input: InputConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load and validate the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is read if present and the built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.dictionary.validate()?;
        self.input.validate()?;
        self.log.validate()?;
        Ok(())
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(storage) = cli.storage {
            self.dictionary.storage = storage;
        }
        if let Some(level) = cli.log_level {
            self.log.level = level;
        }
        self
    }

    /// `(section name, key/value pairs)` for display.
    pub fn sections(&self) -> anyhow::Result<Vec<(&'static str, Vec<(String, String)>)>> {
        Ok(vec![
            ("dictionary", section_entries(&self.dictionary)?),
            ("input", section_entries(&self.input)?),
            ("log", section_entries(&self.log)?),
        ])
    }
}

fn section_entries<T: Serialize>(section: &T) -> anyhow::Result<Vec<(String, String)>> {
    let value = toml::Value::try_from(section)?;
    let Some(table) = value.as_table() else {
        bail!("configuration section is not a table");
    };
    Ok(table
        .iter()
        .map(|(key, value)| {
            let shown = match value {
                toml::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), shown)
        })
        .collect())
}

/// Logging section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Write events to stderr.
    pub enable_console: bool,
    /// Also append events to this file; parent directories are created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            enable_console: true,
            file: None,
        }
    }
}

impl LogConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(file) = &self.file {
            if file.as_os_str().to_string_lossy().trim().is_empty() {
                bail!("`log.file` cannot be an empty string");
            }
        }
        Ok(())
    }
}

/// Verbosity threshold for log events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" | "critical" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!(
                "unknown log level '{other}' (expected error, warn, info, debug or trace)"
            )),
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_owned()
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
