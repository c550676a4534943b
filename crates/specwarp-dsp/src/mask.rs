//! Audibility masking.

use crate::processor::{retain_bins, SpectralProcessor};
use specwarp_core::{AudibleBand, BinGrid, Complex64, FrameContext};

/// Zeroes bins whose folded frequency lies outside the audible band.
///
/// Bin `k` and its mirror `W - k` share a frequency, so both are kept or
/// both are dropped. DC (0 Hz) is always below the band and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AudibilityMask {
    pub band: AudibleBand,
}

impl AudibilityMask {
    pub fn new(band: AudibleBand) -> Self {
        Self { band }
    }

    pub fn shape(&self, spectrum: &mut [Complex64], grid: &BinGrid) {
        retain_bins(spectrum, |bin| self.band.contains(grid.bin_to_hz(bin)));
    }
}

impl SpectralProcessor for AudibilityMask {
    fn process(&self, frame: &mut [Complex64], ctx: &FrameContext<'_>) {
        self.shape(frame, ctx.grid);
        ctx.transform.inverse(frame);
    }

    fn name(&self) -> &'static str {
        "mask"
    }
}
