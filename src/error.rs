//! Error type shared by configuration loading and output

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TakehomeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid grade table: {0}")]
    InvalidTable(String),
}

pub type Result<T> = std::result::Result<T, TakehomeError>;
