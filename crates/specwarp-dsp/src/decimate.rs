//! Bin decimation pitch shift.

use crate::error::{Error, Result};
use crate::processor::SpectralProcessor;
use specwarp_core::{Complex64, FrameContext};

/// Moves bin `factor * m` to bin `m` across the lower half, mirroring each
/// move into the upper half. Bins nothing lands on are zero.
///
/// With the default factor of 2 every frequency is halved, an octave down.
/// DC maps onto itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinDecimation {
    factor: usize,
}

impl BinDecimation {
    pub const DEFAULT_FACTOR: usize = 2;

    pub fn new(factor: usize) -> Result<Self> {
        if factor == 0 {
            return Err(Error::InvalidPolicy(
                "decimation factor must be at least 1".into(),
            ));
        }
        Ok(Self { factor })
    }

    pub fn factor(&self) -> usize {
        self.factor
    }

    pub fn shape(&self, spectrum: &mut [Complex64]) {
        let size = spectrum.len();
        let half = size / 2;
        let mut result = vec![Complex64::new(0.0, 0.0); size];

        for m in 0..=half / self.factor {
            let source = m * self.factor;
            result[m] = spectrum[source];
            if m > 0 {
                result[size - m] = spectrum[size - source];
            }
        }

        spectrum.copy_from_slice(&result);
    }
}

impl Default for BinDecimation {
    fn default() -> Self {
        Self {
            factor: Self::DEFAULT_FACTOR,
        }
    }
}

impl SpectralProcessor for BinDecimation {
    fn process(&self, frame: &mut [Complex64], ctx: &FrameContext<'_>) {
        self.shape(frame);
        ctx.transform.inverse(frame);
    }

    fn name(&self) -> &'static str {
        "decimate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use specwarp_core::{BinGrid, FftTransform, SpectralTransform, WindowSize};
    use std::f64::consts::PI;

    #[test]
    fn test_halves_bin_positions() {
        let mut spectrum: Vec<Complex64> = (0..16).map(|k| Complex64::new(k as f64, 0.0)).collect();
        BinDecimation::default().shape(&mut spectrum);

        let re: Vec<f64> = spectrum.iter().map(|c| c.re).collect();
        assert_eq!(
            re,
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 8.0, 10.0, 12.0, 14.0]
        );
    }

    #[test]
    fn test_factor_one_is_identity() {
        let original: Vec<Complex64> = (0..32).map(|k| Complex64::new(k as f64, 1.0)).collect();
        let mut spectrum = original.clone();
        BinDecimation::new(1).unwrap().shape(&mut spectrum);
        assert_eq!(spectrum, original);
    }

    #[test]
    fn test_octave_down() {
        let window = WindowSize::SMALL;
        let grid = BinGrid::new(window, 44100.0).unwrap();
        let transform = FftTransform::new(window);
        let ctx = FrameContext::new(&grid, &transform);

        let mut frame: Vec<Complex64> = (0..128)
            .map(|n| Complex64::new((2.0 * PI * 10.0 * n as f64 / 128.0).cos(), 0.0))
            .collect();
        transform.forward(&mut frame);
        BinDecimation::default().process(&mut frame, &ctx);

        for (n, s) in frame.iter().enumerate() {
            assert_relative_eq!(s.re, (2.0 * PI * 5.0 * n as f64 / 128.0).cos(), epsilon = 1e-9);
            assert!(s.im.abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_zero_factor() {
        assert!(BinDecimation::new(0).is_err());
    }
}
