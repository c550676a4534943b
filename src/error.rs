//! Centralized error type for the specwarp umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] specwarp_core::Error),

    #[error("DSP: {0}")]
    Dsp(#[from] specwarp_dsp::Error),

    #[error("IO: {0}")]
    Io(#[from] specwarp_io::IoError),

    #[error("Worker pool: {0}")]
    WorkerPool(String),

    /// Wrong arguments on the command line; the message includes usage.
    #[error("{0}")]
    Usage(String),
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Error::WorkerPool(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
