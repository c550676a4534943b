//! # Specwarp Core
//!
//! Signal model and time/frequency plumbing for specwarp.
//!
//! - **Signals**: stereo PCM to normalized complex signals and back
//! - **Bin grid**: bin index / frequency conversion for one run
//! - **Transform**: `rustfft` backed forward and normalized inverse FFT,
//!   plus direct inverse evaluation at fractional bins
//! - **Frame scheduling**: half-window frame offsets and worker regions
//! - **Overlap-add**: triangular crossfade accumulation and region merge
//!
//! ## Example
//!
//! ```rust
//! use specwarp_core::{
//!     Accumulator, CrossfadeWindow, FftTransform, FramePlan, SpectralTransform, WindowSize,
//! };
//!
//! let window = WindowSize::SMALL;
//! let signal = specwarp_core::signal::from_real(&vec![0.25; 1024]);
//! let plan = FramePlan::new(signal.len(), window);
//! let transform = FftTransform::new(window);
//! let crossfade = CrossfadeWindow::new(window);
//!
//! let mut acc = Accumulator::new(0..plan.len());
//! for offset in plan.offsets() {
//!     let mut frame = signal[offset..offset + window.get()].to_vec();
//!     transform.forward(&mut frame);
//!     transform.inverse(&mut frame);
//!     acc.add_frame(offset, &frame, &crossfade);
//! }
//! ```

pub mod error;
pub mod fft;
pub mod frame;
pub mod grid;
pub mod overlap_add;
pub mod signal;
pub mod window;

pub use error::{Error, Result};
pub use fft::{fractional_inverse, FftTransform, SpectralLine, SpectralTransform};
pub use frame::{FramePlan, Partition, Region};
pub use grid::{AudibleBand, BinGrid, WindowSize};
pub use overlap_add::{merge, Accumulator};
pub use signal::{PcmFrame, Quantized, Signal, StereoSignal};
pub use window::{crossfade_weight, CrossfadeWindow};

pub use rustfft::num_complex::Complex64;

/// Everything a spectral processor sees for one frame.
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    pub grid: &'a BinGrid,
    pub transform: &'a dyn SpectralTransform,
}

impl<'a> FrameContext<'a> {
    pub fn new(grid: &'a BinGrid, transform: &'a dyn SpectralTransform) -> Self {
        Self { grid, transform }
    }
}
