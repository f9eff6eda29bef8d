use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single transpose invocation.
#[derive(Debug, Error)]
pub enum TransposeError {
    #[error("failed to read preset {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write preset {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: malformed note field '{field}'")]
    MalformedField { line: usize, field: String },

    #[error("line {line}: note {value} shifted by {offset} is out of range")]
    Overflow { line: usize, value: i64, offset: i32 },

    #[error("invalid key label '{0}'")]
    InvalidLabel(String),

    #[error("target {} is the source preset", .0.display())]
    TargetIsSource(PathBuf),
}

pub type TransposeResult<T> = Result<T, TransposeError>;

/// Failure while loading `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config has no source preset path")]
    MissingSource,
}
