//! Band and ring isolation around the Nyquist bin.
//!
//! Both policies measure distances from the midpoint bin `h = W/2` and
//! convert their fractions to whole bins with `floor(fraction * h)`.

use crate::error::{Error, Result};
use crate::processor::{retain_bins, SpectralProcessor};
use specwarp_core::{Complex64, FrameContext};

#[inline]
fn bins_from_half(fraction: f64, half: usize) -> usize {
    (fraction * half as f64) as usize
}

/// Keeps bins with `j < h - drop` or `j > h + drop`, zeroing the middle.
///
/// With a large fraction only the lowest bins and their mirrors survive,
/// which isolates the low band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiddleDrop {
    fraction: f64,
}

impl MiddleDrop {
    pub const DEFAULT_FRACTION: f64 = 0.95;

    /// `fraction` must lie strictly between 0 and 1.
    pub fn new(fraction: f64) -> Result<Self> {
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(Error::InvalidPolicy(format!(
                "middle drop fraction {} outside (0, 1)",
                fraction
            )));
        }
        Ok(Self { fraction })
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Zeroed bins extend this far either side of the midpoint.
    pub fn drop_bins(&self, window: usize) -> usize {
        bins_from_half(self.fraction, window / 2)
    }

    pub fn shape(&self, spectrum: &mut [Complex64]) {
        let half = spectrum.len() / 2;
        let drop = self.drop_bins(spectrum.len());
        retain_bins(spectrum, |j| j + drop < half || j > half + drop);
    }
}

impl Default for MiddleDrop {
    fn default() -> Self {
        Self {
            fraction: Self::DEFAULT_FRACTION,
        }
    }
}

impl SpectralProcessor for MiddleDrop {
    fn process(&self, frame: &mut [Complex64], ctx: &FrameContext<'_>) {
        self.shape(frame);
        ctx.transform.inverse(frame);
    }

    fn name(&self) -> &'static str {
        "band"
    }
}

/// Keeps an annulus of bins between an inner and an outer distance from
/// the midpoint.
///
/// Bin `j` survives when `h - outer < j < h + outer` and not
/// `h - inner < j < h + inner`, i.e. `j ∈ (h-outer, h-inner] ∪ [h+inner, h+outer)`.
/// DC is never inside the annulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingIsolation {
    inner: f64,
    outer: f64,
}

impl RingIsolation {
    pub const DEFAULT_INNER: f64 = 0.8;
    pub const DEFAULT_OUTER: f64 = 0.993;

    /// Requires `0 <= inner < outer <= 1`.
    pub fn new(inner: f64, outer: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&inner) || !(outer > inner && outer <= 1.0) {
            return Err(Error::InvalidPolicy(format!(
                "ring fractions inner={} outer={} must satisfy 0 <= inner < outer <= 1",
                inner, outer
            )));
        }
        Ok(Self { inner, outer })
    }

    /// `(inner, outer)` distances in bins for a window.
    pub fn radii(&self, window: usize) -> (usize, usize) {
        let half = window / 2;
        (
            bins_from_half(self.inner, half),
            bins_from_half(self.outer, half),
        )
    }

    pub fn shape(&self, spectrum: &mut [Complex64]) {
        let half = spectrum.len() as isize / 2;
        let (inner, outer) = self.radii(spectrum.len());
        let (inner, outer) = (inner as isize, outer as isize);
        let inside = |x: isize, a: isize, b: isize| x > a && x < b;

        retain_bins(spectrum, |j| {
            let j = j as isize;
            inside(j, half - outer, half + outer) && !inside(j, half - inner, half + inner)
        });
    }

    /// Number of bins the ring keeps for a window.
    pub fn kept_bins(&self, window: usize) -> usize {
        let (inner, outer) = self.radii(window);
        2 * (outer - inner)
    }
}

impl Default for RingIsolation {
    fn default() -> Self {
        Self {
            inner: Self::DEFAULT_INNER,
            outer: Self::DEFAULT_OUTER,
        }
    }
}

impl SpectralProcessor for RingIsolation {
    fn process(&self, frame: &mut [Complex64], ctx: &FrameContext<'_>) {
        self.shape(frame);
        ctx.transform.inverse(frame);
    }

    fn name(&self) -> &'static str {
        "ring"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(len: usize) -> Vec<Complex64> {
        (0..len)
            .map(|j| Complex64::new(j as f64 + 1.0, -(j as f64)))
            .collect()
    }

    #[test]
    fn test_middle_drop_boundary_512() {
        let drop = MiddleDrop::new(0.95).unwrap();
        assert_eq!(drop.drop_bins(512), 243);

        let original = filled(512);
        let mut spectrum = original.clone();
        drop.shape(&mut spectrum);

        for j in 0..512 {
            if (13..=499).contains(&j) {
                assert_eq!(spectrum[j], Complex64::new(0.0, 0.0), "bin {} should be zeroed", j);
            } else {
                assert_eq!(spectrum[j], original[j], "bin {} should be kept", j);
            }
        }
    }

    #[test]
    fn test_middle_drop_keeps_dc() {
        let mut spectrum = filled(128);
        MiddleDrop::default().shape(&mut spectrum);
        assert_eq!(spectrum[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_middle_drop_rejects_bad_fraction() {
        assert!(MiddleDrop::new(0.0).is_err());
        assert!(MiddleDrop::new(1.0).is_err());
        assert!(MiddleDrop::new(f64::NAN).is_err());
    }

    #[test]
    fn test_ring_default_128() {
        let ring = RingIsolation::default();
        // h = 64, inner = floor(51.2) = 51, outer = floor(63.552) = 63
        assert_eq!(ring.radii(128), (51, 63));

        let mut spectrum = filled(128);
        ring.shape(&mut spectrum);

        let kept: Vec<usize> = (0..128)
            .filter(|&j| spectrum[j] != Complex64::new(0.0, 0.0))
            .collect();
        let expected: Vec<usize> = (2..=13).chain(115..=126).collect();
        assert_eq!(kept, expected);
        assert_eq!(kept.len(), ring.kept_bins(128));
    }

    #[test]
    fn test_ring_is_symmetric_around_midpoint() {
        let ring = RingIsolation::new(0.25, 0.5).unwrap();
        let mut spectrum = filled(512);
        ring.shape(&mut spectrum);
        for j in 1..512 {
            let zero_here = spectrum[j] == Complex64::new(0.0, 0.0);
            let zero_mirror = spectrum[512 - j] == Complex64::new(0.0, 0.0);
            assert_eq!(zero_here, zero_mirror, "bin {}", j);
        }
    }

    #[test]
    fn test_ring_rejects_inverted_radii() {
        assert!(RingIsolation::new(0.9, 0.5).is_err());
        assert!(RingIsolation::new(0.5, 0.5).is_err());
        assert!(RingIsolation::new(0.1, 1.5).is_err());
    }
}
