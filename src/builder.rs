//! Builder for configuring and constructing a [`Pipeline`].

use crate::pipeline::{Pipeline, PipelineConfig};
use crate::Result;
use specwarp_core::{Partition, WindowSize};
use specwarp_dsp::SpectralPolicy;

/// # Example
///
/// ```ignore
/// use specwarp::prelude::*;
///
/// let pipeline = Pipeline::builder()
///     .window(WindowSize::LARGE)
///     .workers(1)
///     .policy(SpectralPolicy::middle_drop())
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Default: 128 samples
    pub fn window(mut self, window: WindowSize) -> Self {
        self.config.window = window;
        self
    }

    /// Default: 4
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    /// Default: frequency inversion warp
    pub fn policy(mut self, policy: SpectralPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Default: [`Partition::FrameAligned`]
    pub fn partition(mut self, partition: Partition) -> Self {
        self.config.partition = partition;
        self
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Pipeline> {
        Pipeline::new(self.config)
    }
}
