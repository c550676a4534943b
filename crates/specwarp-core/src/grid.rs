//! Window sizes and the frequency grid of a spectrum.
//!
//! A spectrum of `W` bins covers `0..sample_rate` with bin `k` at
//! `k * sample_rate / W`. Bins above `W/2` are the negative-frequency
//! mirror of the bins below it, so their audible frequency is taken from
//! `W - k`.

use crate::error::{Error, Result};

/// Analysis window length in samples.
///
/// Fixed for the lifetime of a pipeline. Always a power of two so that the
/// half window (the hop) is exact and the crossfade ramps divide cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct WindowSize(usize);

impl WindowSize {
    /// 128-sample window (warp and remap processing).
    pub const SMALL: WindowSize = WindowSize(128);

    /// 512-sample window (band isolation).
    pub const LARGE: WindowSize = WindowSize(512);

    /// Smallest accepted window.
    pub const MIN: usize = 4;

    pub fn new(size: usize) -> Result<Self> {
        if size < Self::MIN || !size.is_power_of_two() {
            return Err(Error::InvalidWindowSize(size));
        }
        Ok(Self(size))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Half window, which is also the hop between frames.
    #[inline]
    pub fn half(self) -> usize {
        self.0 / 2
    }

    /// Largest multiple of the window not exceeding `len`.
    #[inline]
    pub fn truncate(self, len: usize) -> usize {
        len / self.0 * self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::SMALL
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<WindowSize> for usize {
    fn from(window: WindowSize) -> usize {
        window.0
    }
}

/// Inclusive frequency range treated as perceptually relevant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct AudibleBand {
    pub low_hz: f64,
    pub high_hz: f64,
}

impl AudibleBand {
    pub const LOW_HZ: f64 = 20.0;
    pub const HIGH_HZ: f64 = 20_000.0;

    pub fn new(low_hz: f64, high_hz: f64) -> Self {
        Self { low_hz, high_hz }
    }

    /// NaN is never contained.
    #[inline]
    pub fn contains(&self, hz: f64) -> bool {
        hz >= self.low_hz && hz <= self.high_hz
    }
}

impl Default for AudibleBand {
    fn default() -> Self {
        Self::new(Self::LOW_HZ, Self::HIGH_HZ)
    }
}

/// Per-run mapping between bin indices and frequencies.
///
/// Carries the sample rate of the source material so that nothing in the
/// processing chain needs process-wide state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinGrid {
    window: WindowSize,
    sample_rate: f64,
}

impl BinGrid {
    pub fn new(window: WindowSize, sample_rate: f64) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            window,
            sample_rate,
        })
    }

    #[inline]
    pub fn window(&self) -> WindowSize {
        self.window
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.window.get()
    }

    /// Always false; a grid has at least [`WindowSize::MIN`] bins.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Frequency spacing between adjacent bins.
    #[inline]
    pub fn bin_width_hz(&self) -> f64 {
        self.sample_rate / self.len() as f64
    }

    /// True for bins in the negative-frequency (mirrored) half.
    #[inline]
    pub fn is_upper(&self, bin: usize) -> bool {
        bin > self.window.half()
    }

    /// Audible frequency of a bin, folding the upper half onto the lower.
    pub fn bin_to_hz(&self, bin: usize) -> f64 {
        let folded = if self.is_upper(bin) {
            self.len() - bin
        } else {
            bin
        };
        (folded as f64 * self.sample_rate) / self.len() as f64
    }

    /// Nearest-below bin for a frequency, placed in the upper half when
    /// `upper` is set. DC stays at bin 0 in both halves.
    pub fn hz_to_bin(&self, hz: f64, upper: bool) -> usize {
        let bin = (hz * self.len() as f64 / self.sample_rate) as usize;
        if upper && bin != 0 {
            self.len() - bin
        } else {
            bin
        }
    }

    /// Fractional bin position for a frequency.
    ///
    /// With `upper` set every non-zero position is mirrored to `W - bin`,
    /// sub-bin positions included, so conjugate partners stay conjugate.
    pub fn hz_to_bin_frac(&self, hz: f64, upper: bool) -> f64 {
        let bin = hz * self.len() as f64 / self.sample_rate;
        if upper && bin > 0.0 {
            self.len() as f64 - bin
        } else {
            bin
        }
    }
}
