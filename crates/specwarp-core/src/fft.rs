//! Spectral transform adapter over `rustfft`.
//!
//! The forward transform is unnormalized; [`SpectralTransform::inverse`] is
//! a true inverse and applies the `1/W` scale itself, so
//! `inverse(forward(x)) == x` up to rounding.

use crate::grid::WindowSize;
use rustfft::num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::f64::consts::PI;
use std::sync::Arc;

/// Fixed-size, in-place forward/inverse transform shared by all workers.
pub trait SpectralTransform: Send + Sync {
    /// Number of points; every buffer passed in must have this length.
    fn size(&self) -> usize;

    fn forward(&self, buffer: &mut [Complex64]);

    /// Normalized inverse of [`forward`](Self::forward).
    fn inverse(&self, buffer: &mut [Complex64]);
}

/// `rustfft` backed transform, planned once per window size.
#[derive(Clone)]
pub struct FftTransform {
    size: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl FftTransform {
    pub fn new(window: WindowSize) -> Self {
        let size = window.get();
        let mut planner = FftPlanner::new();
        Self {
            size,
            forward: planner.plan_fft_forward(size),
            inverse: planner.plan_fft_inverse(size),
        }
    }
}

impl std::fmt::Debug for FftTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftTransform")
            .field("size", &self.size)
            .finish()
    }
}

impl SpectralTransform for FftTransform {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    fn forward(&self, buffer: &mut [Complex64]) {
        debug_assert_eq!(buffer.len(), self.size);
        self.forward.process(buffer);
    }

    fn inverse(&self, buffer: &mut [Complex64]) {
        debug_assert_eq!(buffer.len(), self.size);
        self.inverse.process(buffer);
        let scale = 1.0 / self.size as f64;
        for sample in buffer.iter_mut() {
            *sample *= scale;
        }
    }
}

/// One spectral line placed at a possibly non-integer bin position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralLine {
    pub bin: f64,
    pub value: Complex64,
}

/// Inverse DFT of a sparse set of lines at fractional bin positions.
///
/// Evaluates `out[n] = 1/W * Σ value * exp(+2πi * n * bin / W)` directly,
/// which costs `O(lines * W)`. Lines on integer bins give the same result
/// as [`SpectralTransform::inverse`] on the equivalent dense spectrum.
pub fn fractional_inverse(lines: &[SpectralLine], out: &mut [Complex64]) {
    let size = out.len();
    out.fill(Complex64::new(0.0, 0.0));
    if size == 0 {
        return;
    }

    for line in lines {
        let step = 2.0 * PI * line.bin / size as f64;
        for (n, sample) in out.iter_mut().enumerate() {
            *sample += line.value * Complex64::from_polar(1.0, step * n as f64);
        }
    }

    let scale = 1.0 / size as f64;
    for sample in out.iter_mut() {
        *sample *= scale;
    }
}
