//! Test helpers and fixtures for specwarp integration tests.
//!
//! ## Tolerance Levels
//!
//! - `FLOAT_EPSILON` (1e-9): per-sample FFT rounding
//! - `RECONSTRUCTION_RMS` (1e-6): identity round trip over the
//!   reconstructed range
//! - `SILENCE_THRESHOLD` (1e-9): silence detection

#![allow(dead_code)]

pub mod tolerances;

use specwarp::prelude::*;
use specwarp::signal;
use std::f64::consts::PI;
use std::path::Path;

pub const TEST_SAMPLE_RATE: f64 = 44100.0;

/// Sine at `frequency` Hz.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| (2.0 * PI * frequency * i as f64 / sample_rate).sin())
        .collect()
}

/// Sine that completes exactly `cycles` periods every `window` samples,
/// so every frame sees a single bin.
pub fn generate_bin_tone(cycles: usize, window: usize, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| (2.0 * PI * (cycles * i) as f64 / window as f64).sin())
        .collect()
}

/// Reproducible white noise in -1..1.
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f64> {
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f64 / u32::MAX as f64) * 4.0 - 1.0
        })
        .collect()
}

/// Mixed tone and noise, scaled well inside the unit range.
pub fn test_signal(num_samples: usize, seed: u64) -> Signal {
    let sine = generate_sine(440.0, TEST_SAMPLE_RATE, num_samples);
    let noise = generate_noise(num_samples, seed);
    let mixed: Vec<f64> = sine
        .iter()
        .zip(&noise)
        .map(|(s, n)| 0.4 * s + 0.2 * n)
        .collect();
    signal::from_real(&mixed)
}

pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// RMS of the difference between real parts.
pub fn rms_error(actual: &[Complex64], expected: &[Complex64]) -> f64 {
    assert_eq!(actual.len(), expected.len());
    let diff: Vec<f64> = actual
        .iter()
        .zip(expected)
        .map(|(a, e)| a.re - e.re)
        .collect();
    rms(&diff)
}

pub fn peak(samples: &[Complex64]) -> f64 {
    samples.iter().map(|s| s.norm()).fold(0.0, f64::max)
}

pub fn test_pipeline(
    window: WindowSize,
    workers: usize,
    policy: SpectralPolicy,
    partition: Partition,
) -> Pipeline {
    Pipeline::builder()
        .window(window)
        .workers(workers)
        .policy(policy)
        .partition(partition)
        .build()
        .expect("Failed to build pipeline")
}

/// Stereo PCM frames with distinct tones per channel.
pub fn pcm_frames(num_samples: usize, bits: u16) -> Vec<PcmFrame> {
    let full = (1i64 << (bits - 1)) as f64;
    let left = generate_sine(440.0, TEST_SAMPLE_RATE, num_samples);
    let right = generate_sine(1000.0, TEST_SAMPLE_RATE, num_samples);
    left.iter()
        .zip(&right)
        .map(|(l, r)| ((l * 0.5 * full) as i64, (r * 0.25 * full) as i64))
        .collect()
}

pub fn write_test_wav(path: &Path, header: &WavHeader, frames: &[PcmFrame]) {
    write_wav(path, header, frames).expect("Failed to write test wav");
}
