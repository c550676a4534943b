//! Command-line front end: `specwarp <mode> <input.wav> <output.wav>`.

use crate::pipeline::Pipeline;
use crate::{Error, Result};
use specwarp_core::{signal, BinGrid, FftTransform, StereoSignal, WindowSize};
use specwarp_dsp::{SpectralPolicy, ToneSpec, WarpFunction};
use specwarp_io::{read_wav, write_wav};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

pub const USAGE: &str = "usage: specwarp <mode> <input.wav> <output.wav>\n\
    modes: identity, mask, band, ring, warp, compress, translate, decimate, tone";

/// Processing preset selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Identity,
    Mask,
    /// Middle drop at the large window, single worker
    Band,
    Ring,
    /// Frequency inversion
    Warp,
    Compress,
    Translate,
    Decimate,
    /// Replace the input with a 440 Hz test tone
    Tone,
}

impl Mode {
    pub const ALL: [Mode; 9] = [
        Mode::Identity,
        Mode::Mask,
        Mode::Band,
        Mode::Ring,
        Mode::Warp,
        Mode::Compress,
        Mode::Translate,
        Mode::Decimate,
        Mode::Tone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Identity => "identity",
            Mode::Mask => "mask",
            Mode::Band => "band",
            Mode::Ring => "ring",
            Mode::Warp => "warp",
            Mode::Compress => "compress",
            Mode::Translate => "translate",
            Mode::Decimate => "decimate",
            Mode::Tone => "tone",
        }
    }

    /// `None` for [`Mode::Tone`], which does not run the pipeline.
    pub fn policy(&self) -> Option<SpectralPolicy> {
        Some(match self {
            Mode::Identity => SpectralPolicy::Identity,
            Mode::Mask => SpectralPolicy::mask(),
            Mode::Band => SpectralPolicy::middle_drop(),
            Mode::Ring => SpectralPolicy::ring(),
            Mode::Warp => SpectralPolicy::warp(WarpFunction::invert()),
            Mode::Compress => SpectralPolicy::warp(WarpFunction::compress()),
            Mode::Translate => SpectralPolicy::warp(WarpFunction::translate()),
            Mode::Decimate => SpectralPolicy::decimate(),
            Mode::Tone => return None,
        })
    }

    pub fn window(&self) -> WindowSize {
        match self {
            Mode::Band => WindowSize::LARGE,
            _ => WindowSize::SMALL,
        }
    }

    pub fn workers(&self) -> usize {
        match self {
            Mode::Band => 1,
            _ => 4,
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| Error::Usage(format!("unknown mode '{}'\n{}", s, USAGE)))
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Command {
    /// Parses arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        match args.as_slice() {
            [mode, input, output] => Ok(Self {
                mode: mode.parse()?,
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            }),
            _ => Err(Error::Usage(format!(
                "expected 3 arguments, got {}\n{}",
                args.len(),
                USAGE
            ))),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames_in: usize,
    pub frames_out: usize,
    pub clipped: usize,
}

/// Reads the input, processes it and writes the output with the input's
/// sample rate and bit depth.
pub fn run(command: &Command) -> Result<RunSummary> {
    let mode = command.mode;
    let data = read_wav(&command.input)?;
    let header = data.header;
    let sample_rate = f64::from(header.sample_rate);

    info!(
        mode = mode.name(),
        input = %command.input.display(),
        frames = data.frames.len(),
        sample_rate = header.sample_rate,
        bits = header.bits_per_sample,
        "read input"
    );

    let output = match mode.policy() {
        Some(policy) => {
            let pipeline = Pipeline::builder()
                .window(mode.window())
                .workers(mode.workers())
                .policy(policy)
                .build()?;
            let input = signal::normalize(&data.frames, header.bits_per_sample);
            pipeline.process(&input, sample_rate)?
        }
        None => {
            let window = mode.window();
            let grid = BinGrid::new(window, sample_rate)?;
            let tone = ToneSpec::default().render(&grid, &FftTransform::new(window))?;
            StereoSignal {
                left: tone.clone(),
                right: tone,
            }
        }
    };

    let quantized = signal::denormalize(&output, header.bits_per_sample)?;
    if quantized.clipped > 0 {
        warn!(
            clipped = quantized.clipped,
            bits = header.bits_per_sample,
            "samples saturated on output"
        );
    }

    write_wav(&command.output, &header, &quantized.frames)?;
    info!(
        output = %command.output.display(),
        frames = quantized.frames.len(),
        "wrote output"
    );

    Ok(RunSummary {
        frames_in: data.frames.len(),
        frames_out: quantized.frames.len(),
        clipped: quantized.clipped,
    })
}
