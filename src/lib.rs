//! # Specwarp
//!
//! Stereo spectral audio processing: windowed FFT analysis, per-frame
//! spectral policies and overlap-add resynthesis over a worker pool.
//!
//! ```rust,no_run
//! use specwarp::prelude::*;
//!
//! # fn main() -> specwarp::Result<()> {
//! let data = read_wav("in.wav")?;
//! let input = specwarp::signal::normalize(&data.frames, data.header.bits_per_sample);
//!
//! let pipeline = Pipeline::builder()
//!     .policy(SpectralPolicy::warp(WarpFunction::invert()))
//!     .build()?;
//! let output = pipeline.process(&input, data.header.sample_rate as f64)?;
//!
//! let quantized = specwarp::signal::denormalize(&output, data.header.bits_per_sample)?;
//! write_wav("out.wav", &data.header, &quantized.frames)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! - `specwarp-core`: signal model, bin grid, FFT, frame plan, overlap-add
//! - `specwarp-dsp`: spectral processors and test tone synthesis
//! - `specwarp-io`: stereo PCM WAV reading and writing

pub mod builder;
pub mod cli;
pub mod error;
pub mod pipeline;

pub use builder::PipelineBuilder;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, PipelineConfig};

pub use specwarp_core::signal;
pub use specwarp_core::{BinGrid, Complex64, Partition, PcmFrame, Signal, StereoSignal, WindowSize};
pub use specwarp_dsp::{SpectralPolicy, SpectralProcessor, ToneSpec, WarpFunction};
pub use specwarp_io::{read_wav, write_wav, WavData, WavHeader};

pub mod prelude {
    pub use crate::{Pipeline, PipelineBuilder, PipelineConfig};
    pub use crate::{Error, Result};
    pub use specwarp_core::{
        BinGrid, Complex64, Partition, PcmFrame, Signal, StereoSignal, WindowSize,
    };
    pub use specwarp_dsp::{SpectralPolicy, ToneSpec, WarpFunction};
    pub use specwarp_io::{read_wav, write_wav, WavData, WavHeader};
}
