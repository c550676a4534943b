//! Channel pipeline: frame scheduling, spectral processing and overlap-add
//! over a fixed worker pool.
//!
//! Each channel is split into worker regions by the configured
//! [`Partition`]. Workers read the shared, truncated source signal, copy
//! every frame into a private buffer, transform and process it, and fold
//! the result into a private accumulator. Once all workers have joined,
//! the accumulators are merged into the output in region order on the
//! calling thread.

use crate::builder::PipelineBuilder;
use crate::Result;
use rayon::prelude::*;
use specwarp_core::{
    merge, Accumulator, BinGrid, Complex64, CrossfadeWindow, FftTransform, FrameContext,
    FramePlan, Partition, Region, Signal, SpectralTransform, StereoSignal, WindowSize,
};
use specwarp_dsp::{SpectralPolicy, SpectralProcessor};
use tracing::{debug, trace};

/// Configuration for one pipeline instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Analysis window; fixed for the life of the pipeline
    pub window: WindowSize,
    /// Worker threads and regions per channel
    pub workers: usize,
    pub policy: SpectralPolicy,
    pub partition: Partition,
}

impl PipelineConfig {
    pub const DEFAULT_WORKERS: usize = 4;
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window: WindowSize::SMALL,
            workers: Self::DEFAULT_WORKERS,
            policy: SpectralPolicy::default(),
            partition: Partition::FrameAligned,
        }
    }
}

/// A configured spectral processing pipeline.
///
/// The FFT plan, crossfade table, processor and worker pool are built once
/// and reused for every channel processed.
pub struct Pipeline {
    config: PipelineConfig,
    transform: FftTransform,
    crossfade: CrossfadeWindow,
    processor: Box<dyn SpectralProcessor>,
    pool: rayon::ThreadPool,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("processor", &self.processor.name())
            .finish()
    }
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    pub fn new(config: PipelineConfig) -> Result<Self> {
        if config.workers == 0 {
            return Err(specwarp_core::Error::InvalidConfig(
                "at least one worker is required".into(),
            )
            .into());
        }

        let processor = config.policy.build()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("specwarp-worker-{}", i))
            .build()?;

        debug!(
            window = config.window.get(),
            workers = config.workers,
            policy = processor.name(),
            partition = ?config.partition,
            "pipeline ready"
        );

        Ok(Self {
            transform: FftTransform::new(config.window),
            crossfade: CrossfadeWindow::new(config.window),
            processor,
            pool,
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Frame plan this pipeline would use for a signal of `len` samples.
    pub fn plan(&self, len: usize) -> FramePlan {
        FramePlan::new(len, self.config.window)
    }

    /// Processes both channels independently.
    ///
    /// Both outputs have the truncated length of the input.
    pub fn process(&self, input: &StereoSignal, sample_rate: f64) -> Result<StereoSignal> {
        if input.left.len() != input.right.len() {
            return Err(specwarp_core::Error::LengthMismatch {
                left: input.left.len(),
                right: input.right.len(),
            }
            .into());
        }
        let grid = BinGrid::new(self.config.window, sample_rate)?;
        Ok(StereoSignal {
            left: self.render_channel(&input.left, &grid),
            right: self.render_channel(&input.right, &grid),
        })
    }

    /// Processes one channel.
    ///
    /// The output is real: imaginary residue from asymmetric policies is
    /// dropped after the merge.
    pub fn process_channel(&self, signal: &[Complex64], sample_rate: f64) -> Result<Signal> {
        let grid = BinGrid::new(self.config.window, sample_rate)?;
        Ok(self.render_channel(signal, &grid))
    }

    fn render_channel(&self, signal: &[Complex64], grid: &BinGrid) -> Signal {
        let plan = self.plan(signal.len());
        let source = &signal[..plan.len()];
        let regions = plan.partition(self.config.partition, self.config.workers);
        let ctx = FrameContext::new(grid, &self.transform);

        debug!(
            samples = signal.len(),
            truncated = plan.len(),
            frames = plan.frame_count(),
            regions = regions.len(),
            "processing channel"
        );

        let partials: Vec<Accumulator> = self.pool.install(|| {
            regions
                .par_iter()
                .map(|region| self.render_region(source, region, &ctx))
                .collect()
        });

        let mut output = merge(plan.len(), &partials);
        for sample in output.iter_mut() {
            sample.im = 0.0;
        }
        output
    }

    fn render_region(
        &self,
        source: &[Complex64],
        region: &Region,
        ctx: &FrameContext<'_>,
    ) -> Accumulator {
        let size = self.transform.size();
        let mut acc = Accumulator::for_region(region);
        let mut frame = vec![Complex64::new(0.0, 0.0); size];

        for offset in region.offsets() {
            frame.copy_from_slice(&source[offset..offset + size]);
            ctx.transform.forward(&mut frame);
            self.processor.process(&mut frame, ctx);
            acc.add_frame(offset, &frame, &self.crossfade);
        }

        trace!(
            region = region.index,
            frames = region.frame_count,
            span = ?region.span(),
            "region done"
        );
        acc
    }
}
