// Error types for policy loading and report decoding

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CspError {
    #[error("Unknown directive: {0}")]
    UnknownDirective(String),

    #[error("Invalid violation report: {0}")]
    InvalidReport(#[from] serde_json::Error),

    #[error("Failed to parse policy: {0}")]
    Parse(String),

    #[error("Failed to load policy: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CspError>;
