//! The processing seam between a frame's spectrum and its time-domain output.

use specwarp_core::{Complex64, FrameContext};

/// Turns the forward spectrum of one frame into its processed time-domain
/// samples, in place.
///
/// Implementations must not keep state between frames: workers call the
/// same processor concurrently on disjoint frames.
pub trait SpectralProcessor: Send + Sync {
    fn process(&self, frame: &mut [Complex64], ctx: &FrameContext<'_>);

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Leaves the spectrum untouched and inverts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl SpectralProcessor for Passthrough {
    fn process(&self, frame: &mut [Complex64], ctx: &FrameContext<'_>) {
        ctx.transform.inverse(frame);
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Zeroes every bin for which `keep` returns false.
pub(crate) fn retain_bins(spectrum: &mut [Complex64], mut keep: impl FnMut(usize) -> bool) {
    for (bin, value) in spectrum.iter_mut().enumerate() {
        if !keep(bin) {
            *value = Complex64::new(0.0, 0.0);
        }
    }
}
