//! Error types for specwarp-io

use std::io;
use thiserror::Error;

/// Container I/O error type
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// WAV header or sample stream could not be decoded/encoded
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Sample format the pipeline does not handle (float PCM, > 32 bits)
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Anything other than two channels
    #[error("Expected 2 channels, found {0}")]
    ChannelCount(u16),

    /// Malformed sample data
    #[error("Invalid audio data: {0}")]
    InvalidData(String),
}

/// Result type for container operations
pub type Result<T> = std::result::Result<T, IoError>;
