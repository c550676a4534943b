//! Frame scheduling: window positions over a signal and their split into
//! worker regions.
//!
//! A plan truncates the signal to a whole number of windows and places a
//! frame at every half-window offset `i` with `i + W < N`. The first half
//! window and everything after the last frame's midpoint are covered by a
//! single ramp; only samples in [`FramePlan::reconstructed_range`] receive
//! the full crossfade weight.

use crate::grid::WindowSize;
use std::ops::Range;

/// How the frame offsets are split across workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Partition {
    /// Split the global frame sequence into contiguous runs of whole frames.
    ///
    /// Every frame of the plan is visited exactly once, and the merged
    /// output is identical to a single-worker run.
    #[default]
    FrameAligned,

    /// Split the samples into `N/P` regions and stride within each.
    ///
    /// Frames whose end would cross their region's end are dropped, which
    /// loses up to two frames at every interior region boundary.
    SampleRegions,
}

/// Contiguous run of frames assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub index: usize,
    pub first_offset: usize,
    pub frame_count: usize,
    window: WindowSize,
}

impl Region {
    /// Start offsets of this region's frames.
    pub fn offsets(&self) -> impl Iterator<Item = usize> {
        let first = self.first_offset;
        let hop = self.window.half();
        (0..self.frame_count).map(move |k| first + k * hop)
    }

    /// Samples touched by this region's frames.
    pub fn span(&self) -> Range<usize> {
        if self.frame_count == 0 {
            return self.first_offset..self.first_offset;
        }
        let last = self.first_offset + (self.frame_count - 1) * self.window.half();
        self.first_offset..last + self.window.get()
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }
}

/// Frame positions for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePlan {
    len: usize,
    window: WindowSize,
}

impl FramePlan {
    pub fn new(signal_len: usize, window: WindowSize) -> Self {
        Self {
            len: window.truncate(signal_len),
            window,
        }
    }

    /// Truncated signal length; also the output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn window(&self) -> WindowSize {
        self.window
    }

    #[inline]
    pub fn hop(&self) -> usize {
        self.window.half()
    }

    pub fn frame_count(&self) -> usize {
        Self::frames_between(0, self.len, self.window)
    }

    pub fn offsets(&self) -> impl Iterator<Item = usize> {
        let hop = self.hop();
        (0..self.frame_count()).map(move |k| k * hop)
    }

    /// Samples covered by two overlapping frames.
    ///
    /// Empty when the plan has no frames.
    pub fn reconstructed_range(&self) -> Range<usize> {
        let hop = self.hop();
        match self.frame_count() {
            0 => hop..hop,
            n => hop..(n - 1) * hop + hop,
        }
    }

    /// Splits the plan into `workers` regions (at least one).
    ///
    /// Regions are returned in offset order and may be empty when there are
    /// more workers than frames.
    pub fn partition(&self, strategy: Partition, workers: usize) -> Vec<Region> {
        let workers = workers.max(1);
        match strategy {
            Partition::FrameAligned => self.partition_frames(workers),
            Partition::SampleRegions => self.partition_samples(workers),
        }
    }

    fn partition_frames(&self, workers: usize) -> Vec<Region> {
        let total = self.frame_count();
        let base = total / workers;
        let extra = total % workers;

        let mut next = 0;
        (0..workers)
            .map(|index| {
                let frame_count = base + usize::from(index < extra);
                let region = Region {
                    index,
                    first_offset: next * self.hop(),
                    frame_count,
                    window: self.window,
                };
                next += frame_count;
                region
            })
            .collect()
    }

    fn partition_samples(&self, workers: usize) -> Vec<Region> {
        (0..workers)
            .map(|index| {
                let start = index * (self.len / workers);
                let end = (index + 1) * self.len / workers;
                Region {
                    index,
                    first_offset: start,
                    frame_count: Self::frames_between(start, end, self.window),
                    window: self.window,
                }
            })
            .collect()
    }

    /// Frames at `start, start + W/2, ...` with `offset + W < end`.
    fn frames_between(start: usize, end: usize, window: WindowSize) -> usize {
        let w = window.get();
        if end <= start + w {
            return 0;
        }
        (end - start - w - 1) / window.half() + 1
    }
}
