//! Overlap-add synthesis into partial accumulators.
//!
//! Each worker folds its frames into a private [`Accumulator`] spanning
//! only the samples its region touches. Accumulators are then merged into
//! the channel output one at a time, in region order. Two regions overlap
//! by at most one half window, and because every sample is covered by at
//! most two frames the merged sums are the same as a single-worker run.

use crate::frame::Region;
use crate::window::CrossfadeWindow;
use rustfft::num_complex::Complex64;
use std::ops::Range;

/// Additive buffer covering a contiguous range of output samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    start: usize,
    samples: Vec<Complex64>,
}

impl Accumulator {
    pub fn new(span: Range<usize>) -> Self {
        Self {
            start: span.start,
            samples: vec![Complex64::new(0.0, 0.0); span.len()],
        }
    }

    /// Accumulator sized for every frame of `region`.
    pub fn for_region(region: &Region) -> Self {
        Self::new(region.span())
    }

    /// Output samples this accumulator covers.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.samples.len()
    }

    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    /// Adds a processed frame starting at global `offset`, weighted by the
    /// crossfade window.
    ///
    /// # Panics
    ///
    /// If the frame does not lie inside [`span`](Self::span).
    pub fn add_frame(&mut self, offset: usize, frame: &[Complex64], window: &CrossfadeWindow) {
        debug_assert_eq!(frame.len(), window.len());
        let local = offset - self.start;
        let target = &mut self.samples[local..local + frame.len()];
        for ((out, &x), &w) in target.iter_mut().zip(frame).zip(window.weights()) {
            *out += x * w;
        }
    }

    /// Adds this accumulator into `output` at its global position.
    pub fn merge_into(&self, output: &mut [Complex64]) {
        let target = &mut output[self.span()];
        for (out, &x) in target.iter_mut().zip(&self.samples) {
            *out += x;
        }
    }
}

/// Merges partial accumulators into a zeroed output of `len` samples.
pub fn merge(len: usize, partials: &[Accumulator]) -> Vec<Complex64> {
    let mut output = vec![Complex64::new(0.0, 0.0); len];
    for partial in partials {
        partial.merge_into(&mut output);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FramePlan, Partition};
    use crate::grid::WindowSize;

    fn ones(len: usize) -> Vec<Complex64> {
        vec![Complex64::new(1.0, 0.0); len]
    }

    #[test]
    fn test_constant_frames_reconstruct_constant_interior() {
        let window = WindowSize::SMALL;
        let plan = FramePlan::new(1024, window);
        let table = CrossfadeWindow::new(window);
        let frame = ones(window.get());

        let mut acc = Accumulator::new(0..plan.len());
        for offset in plan.offsets() {
            acc.add_frame(offset, &frame, &table);
        }

        for i in plan.reconstructed_range() {
            assert_eq!(acc.samples()[i].re, 1.0, "sample {}", i);
        }
        // Leading half window only sees the ramp up
        assert_eq!(acc.samples()[0].re, 0.0);
        assert_eq!(acc.samples()[32].re, 0.5);
    }

    #[test]
    fn test_partials_merge_identically_to_single_accumulator() {
        let window = WindowSize::SMALL;
        let plan = FramePlan::new(2048, window);
        let table = CrossfadeWindow::new(window);
        let frame_at = |offset: usize| -> Vec<Complex64> {
            (0..window.get())
                .map(|j| Complex64::new(((offset + j) as f64 * 0.37).sin(), 0.0))
                .collect()
        };

        let mut single = Accumulator::new(0..plan.len());
        for offset in plan.offsets() {
            single.add_frame(offset, &frame_at(offset), &table);
        }
        let reference = merge(plan.len(), &[single]);

        let partials: Vec<Accumulator> = plan
            .partition(Partition::FrameAligned, 3)
            .iter()
            .map(|region| {
                let mut acc = Accumulator::for_region(region);
                for offset in region.offsets() {
                    acc.add_frame(offset, &frame_at(offset), &table);
                }
                acc
            })
            .collect();
        let merged = merge(plan.len(), &partials);

        assert_eq!(merged, reference);
    }

    #[test]
    fn test_empty_accumulator_merges_nothing() {
        let acc = Accumulator::new(5..5);
        let mut out = ones(8);
        acc.merge_into(&mut out);
        assert_eq!(out, ones(8));
    }
}
