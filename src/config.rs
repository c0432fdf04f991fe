use crate::i18n::Language;
use crate::search::EmptyQuery;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_MAX_ROWS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestionsConfig {
    #[serde(default)]
    pub empty_query: EmptyQuery,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            empty_query: EmptyQuery::default(),
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

fn default_max_rows() -> usize {
    DEFAULT_MAX_ROWS
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the collection snapshot lives. Defaults to the per-user data
    /// directory when unset.
    pub state_path: Option<PathBuf>,
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
    pub language: Option<Language>,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: None,
            api_key: None,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            language: None,
            suggestions: SuggestionsConfig::default(),
        }
    }
}

impl Config {
    /// Reads the config file, then lets environment variables override the
    /// file. `PLANTLY_CONFIG` names the file; `PLANTLY_STATE`,
    /// `GEMINI_API_KEY` and `PLANTLY_LANG` override individual fields.
    pub fn load() -> Result<Self, ConfigError> {
        let path = match std::env::var_os("PLANTLY_CONFIG") {
            Some(path) => Some(PathBuf::from(path)),
            None => default_config_path(),
        };

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Some(path) = std::env::var_os("PLANTLY_STATE") {
            self.state_path = Some(PathBuf::from(path));
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(tag) = std::env::var("PLANTLY_LANG") {
            match Language::from_tag(&tag) {
                Some(language) => self.language = Some(language),
                None => warn!(tag = %tag, "ignoring unknown PLANTLY_LANG"),
            }
        }
    }

    /// Resolved snapshot location, falling back to
    /// `$HOME/.local/share/plantly/state.json`.
    pub fn state_path(&self) -> PathBuf {
        if let Some(path) = &self.state_path {
            return path.clone();
        }
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("plantly")
                .join("state.json"),
            None => PathBuf::from("plantly-state.json"),
        }
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }
}

fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("plantly")
            .join("config.yaml")
    })
}
