//! Error types for specwarp-core.

use thiserror::Error;

/// Error type for signal and framing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid window size: {0}. Must be a power of two and at least 4")]
    InvalidWindowSize(usize),

    #[error("Invalid sample rate: {0}")]
    InvalidSampleRate(f64),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Channel length mismatch: left={left}, right={right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, Error>;
