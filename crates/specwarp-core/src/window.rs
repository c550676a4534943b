//! Triangular crossfade window used by overlap-add.

use crate::grid::WindowSize;

/// Weight applied to local offset `j` of a `window`-sample frame.
///
/// Ramps up as `j / (W/2)` over the first half and down as
/// `(W - j) / (W/2)` over the second, so two frames a half window apart
/// sum to exactly one.
#[inline]
pub fn crossfade_weight(j: usize, window: WindowSize) -> f64 {
    let half = window.half();
    if j < half {
        j as f64 / half as f64
    } else {
        (window.get() - j) as f64 / half as f64
    }
}

/// Precomputed crossfade weights for one window size.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossfadeWindow {
    weights: Vec<f64>,
}

impl CrossfadeWindow {
    pub fn new(window: WindowSize) -> Self {
        Self {
            weights: (0..window.get())
                .map(|j| crossfade_weight(j, window))
                .collect(),
        }
    }

    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
