//! # Specwarp DSP
//!
//! Frequency-domain processors for specwarp. Each processor receives the
//! forward spectrum of one frame and leaves the processed time-domain
//! frame in the same buffer.
//!
//! - **Audibility mask**: drop bins outside 20 Hz - 20 kHz
//! - **Middle drop**: isolate the band far from the midpoint bin
//! - **Ring isolation**: keep an annulus of bins around the midpoint bin
//! - **Frequency warp**: move bins to fractional positions through a warp
//!   function (invert, compress, translate, scale)
//! - **Bin decimation**: integer-factor pitch shift by bin remapping
//! - **Tone synthesis**: test tones from a single spectral line
//!
//! ## Example
//!
//! ```rust
//! use specwarp_core::{BinGrid, FftTransform, FrameContext, SpectralTransform, WindowSize};
//! use specwarp_dsp::{SpectralPolicy, WarpFunction};
//!
//! let window = WindowSize::SMALL;
//! let grid = BinGrid::new(window, 44100.0).unwrap();
//! let transform = FftTransform::new(window);
//! let processor = SpectralPolicy::warp(WarpFunction::compress()).build().unwrap();
//!
//! let mut frame = specwarp_core::signal::from_real(&[0.1; 128]);
//! transform.forward(&mut frame);
//! processor.process(&mut frame, &FrameContext::new(&grid, &transform));
//! ```

pub mod band;
pub mod decimate;
pub mod error;
pub mod mask;
pub mod policy;
pub mod processor;
pub mod tone;
pub mod warp;

pub use band::{MiddleDrop, RingIsolation};
pub use decimate::BinDecimation;
pub use error::{Error, Result};
pub use mask::AudibilityMask;
pub use policy::SpectralPolicy;
pub use processor::{Passthrough, SpectralProcessor};
pub use tone::ToneSpec;
pub use warp::{FrequencyWarp, WarpFunction};
