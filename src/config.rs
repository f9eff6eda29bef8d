use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
const DEFAULT_SOURCE: &str = "./presets/c-major.rpc";
const DEFAULT_BASELINE: &str = "c";

/// Chromatic labels for the eleven major keys above C, in semitone order.
pub const CHROMATIC_LABELS: [&str; 11] = [
    "cs", "d", "ds", "e", "f", "fs", "g", "gs", "a", "as", "b",
];

/// One target key: its file label and the semitone offset from the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyTarget {
    pub label: String,
    pub offset: i32,
}

impl KeyTarget {
    pub fn new(label: impl Into<String>, offset: i32) -> Self {
        Self {
            label: label.into(),
            offset,
        }
    }
}

/// The default table: `cs` = 1 through `b` = 11.
pub fn default_keys() -> Vec<KeyTarget> {
    CHROMATIC_LABELS
        .iter()
        .zip(1..)
        .map(|(label, offset)| KeyTarget::new(*label, offset))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: PathBuf,
    /// Defaults to the directory holding `source`.
    pub output_dir: Option<PathBuf>,
    pub baseline: String,
    pub stop_on_error: bool,
    pub debug: bool,
    pub keys: Vec<KeyTarget>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: None,
            baseline: DEFAULT_BASELINE.to_string(),
            stop_on_error: false,
            debug: false,
            keys: default_keys(),
        }
    }
}

impl Config {
    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.source.as_os_str().is_empty() {
            return Err(ConfigError::MissingSource);
        }
        Ok(config)
    }

    /// Load `path`. A missing file gives the built-in defaults when
    /// `required` is false; a file that exists but does not parse is always
    /// an error.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text, path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
