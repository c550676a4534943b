//! Test tone synthesis from a single spectral line.

use crate::error::{Error, Result};
use specwarp_core::{BinGrid, Complex64, Signal, SpectralTransform};
use tracing::debug;

/// A tone built by inverting a spectrum with one non-zero bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f64,
    /// Complex value written into the bin before inversion.
    pub amplitude: Complex64,
    /// Number of windows to emit; `None` emits one per window sample.
    pub frames: Option<usize>,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            frequency_hz: 440.0,
            amplitude: Complex64::new(10.0, 10.0),
            frames: None,
        }
    }
}

impl ToneSpec {
    pub fn frequency(mut self, hz: f64) -> Self {
        self.frequency_hz = hz;
        self
    }

    pub fn amplitude(mut self, amplitude: Complex64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn frames(mut self, frames: usize) -> Self {
        self.frames = Some(frames);
        self
    }

    /// Renders the tone as consecutive, unblended windows.
    ///
    /// The line is placed in the upper (negative-frequency) half at the bin
    /// just below `frequency_hz`; the real part of each window is a
    /// sinusoid at that bin's frequency. Output length is `frames * W`.
    pub fn render(&self, grid: &BinGrid, transform: &dyn SpectralTransform) -> Result<Signal> {
        let nyquist = grid.sample_rate() / 2.0;
        if !(self.frequency_hz >= grid.bin_width_hz() && self.frequency_hz <= nyquist) {
            return Err(Error::InvalidTone(format!(
                "frequency {} Hz outside {:.1}..={:.1} Hz",
                self.frequency_hz,
                grid.bin_width_hz(),
                nyquist
            )));
        }

        let size = grid.len();
        let bin = grid.hz_to_bin(self.frequency_hz, true);
        let frames = self.frames.unwrap_or(size);
        debug!(bin, frames, "rendering tone");

        let mut window = vec![Complex64::new(0.0, 0.0); size];
        window[bin] = self.amplitude;
        transform.inverse(&mut window);

        Ok(window
            .iter()
            .map(|s| Complex64::new(s.re, 0.0))
            .cycle()
            .take(frames * size)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use specwarp_core::{FftTransform, WindowSize};
    use std::f64::consts::PI;

    #[test]
    fn test_default_tone_layout() {
        let window = WindowSize::SMALL;
        let grid = BinGrid::new(window, 44100.0).unwrap();
        let transform = FftTransform::new(window);

        let tone = ToneSpec::default().render(&grid, &transform).unwrap();
        assert_eq!(tone.len(), 128 * 128);
        assert!(tone.iter().all(|s| s.im == 0.0));

        // Bin 127: (10 + 10i)/128 * exp(2πi * 127n / 128)
        for n in 0..128 {
            let phase = 2.0 * PI * 127.0 * n as f64 / 128.0;
            let expected = (10.0 * phase.cos() - 10.0 * phase.sin()) / 128.0;
            assert_relative_eq!(tone[n].re, expected, epsilon = 1e-12);
            assert_eq!(tone[n + 128 * 7], tone[n]);
        }
    }

    #[test]
    fn test_frame_count() {
        let window = WindowSize::SMALL;
        let grid = BinGrid::new(window, 44100.0).unwrap();
        let transform = FftTransform::new(window);
        let tone = ToneSpec::default().frames(3).render(&grid, &transform).unwrap();
        assert_eq!(tone.len(), 384);
    }

    #[test]
    fn test_rejects_frequency_out_of_range() {
        let window = WindowSize::SMALL;
        let grid = BinGrid::new(window, 44100.0).unwrap();
        let transform = FftTransform::new(window);
        assert!(ToneSpec::default().frequency(100.0).render(&grid, &transform).is_err());
        assert!(ToneSpec::default().frequency(30_000.0).render(&grid, &transform).is_err());
    }
}
