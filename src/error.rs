//! Crate error type.

use thiserror::Error;

use crate::form::FormErrors;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading a config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has mistyped keys.
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but holds an unusable value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Form input rejected at the boundary.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] FormErrors),
}
