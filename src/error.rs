//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// An arithmetic result the display cannot show.
///
/// Never crosses the engine boundary; the engine renders it as the error
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeSquareRoot,
    #[error("logarithm of a non-positive number")]
    NonPositiveLogarithm,
    #[error("result is not a finite number")]
    NotFinite,
}

/// A word on the input line that is not a known key or command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("unknown key: {0:?}")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard")]
    Access(#[source] arboard::Error),
    #[error("failed to copy to clipboard")]
    Copy(#[source] arboard::Error),
}
