//! Error types for specwarp-dsp.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid tone: {0}")]
    InvalidTone(String),
}

pub type Result<T> = std::result::Result<T, Error>;
