//! Real-valued signals carried as complex samples, and PCM conversion.
//!
//! Integer PCM of bit depth `b` maps to `raw / 2^b` and back via
//! `trunc(value * 2^b)`. Both directions use the same power of two so that
//! unprocessed samples survive a round trip exactly.

use crate::error::{Error, Result};
use rustfft::num_complex::Complex64;

/// One channel of audio, one complex sample per frame.
///
/// Imaginary parts are zero outside the spectral processing stage.
pub type Signal = Vec<Complex64>;

/// One interleaved stereo PCM frame.
pub type PcmFrame = (i64, i64);

/// A pair of channel signals of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StereoSignal {
    pub left: Signal,
    pub right: Signal,
}

impl StereoSignal {
    pub fn new(left: Signal, right: Signal) -> Result<Self> {
        if left.len() != right.len() {
            return Err(Error::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Self { left, right })
    }

    /// Number of sample frames per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Wraps real samples as a complex signal with zero imaginary part.
pub fn from_real(samples: &[f64]) -> Signal {
    samples.iter().map(|&s| Complex64::new(s, 0.0)).collect()
}

#[inline]
fn full_scale(bits: u16) -> f64 {
    2.0_f64.powi(i32::from(bits))
}

/// Converts interleaved PCM frames into two normalized channel signals.
pub fn normalize(frames: &[PcmFrame], bits: u16) -> StereoSignal {
    let scale = full_scale(bits);
    let (left, right): (Signal, Signal) = frames
        .iter()
        .map(|&(l, r)| {
            (
                Complex64::new(l as f64 / scale, 0.0),
                Complex64::new(r as f64 / scale, 0.0),
            )
        })
        .unzip();
    StereoSignal { left, right }
}

/// Output of [`denormalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Quantized {
    pub frames: Vec<PcmFrame>,
    /// Samples that fell outside the signed range of the bit depth.
    pub clipped: usize,
}

/// Converts two channel signals back to interleaved PCM frames.
///
/// Only real parts are used. Values are truncated toward zero and then
/// saturated to the signed range of `bits`.
pub fn denormalize(signal: &StereoSignal, bits: u16) -> Result<Quantized> {
    if signal.left.len() != signal.right.len() {
        return Err(Error::LengthMismatch {
            left: signal.left.len(),
            right: signal.right.len(),
        });
    }
    if bits == 0 || bits > 32 {
        return Err(Error::InvalidConfig(format!("unsupported bit depth {}", bits)));
    }

    let scale = full_scale(bits);
    let max = (1i64 << (bits - 1)) - 1;
    let min = -(1i64 << (bits - 1));
    let mut clipped = 0;

    let mut quantize = |value: f64| -> i64 {
        let raw = (value * scale) as i64;
        if raw > max {
            clipped += 1;
            max
        } else if raw < min {
            clipped += 1;
            min
        } else {
            raw
        }
    };

    let frames = signal
        .left
        .iter()
        .zip(signal.right.iter())
        .map(|(l, r)| (quantize(l.re), quantize(r.re)))
        .collect();

    Ok(Quantized { frames, clipped })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scales_by_full_range() {
        let stereo = normalize(&[(32768, -16384), (0, 1)], 16);
        assert_eq!(stereo.left[0], Complex64::new(0.5, 0.0));
        assert_eq!(stereo.right[0], Complex64::new(-0.25, 0.0));
        assert_eq!(stereo.left[1], Complex64::new(0.0, 0.0));
        assert_eq!(stereo.right[1].re, 1.0 / 65536.0);
        assert!(stereo.left.iter().all(|s| s.im == 0.0));
    }

    #[test]
    fn test_pcm_round_trip_is_exact() {
        let frames: Vec<PcmFrame> = (-300..300).map(|v| (v * 97, -v * 13)).collect();
        let stereo = normalize(&frames, 16);
        let back = denormalize(&stereo, 16).unwrap();
        assert_eq!(back.frames, frames);
        assert_eq!(back.clipped, 0);
    }

    #[test]
    fn test_denormalize_truncates_toward_zero() {
        let stereo = StereoSignal::new(
            from_real(&[1.9 / 65536.0, -1.9 / 65536.0]),
            from_real(&[0.0, 0.0]),
        )
        .unwrap();
        let q = denormalize(&stereo, 16).unwrap();
        assert_eq!(q.frames[0].0, 1);
        assert_eq!(q.frames[1].0, -1);
    }

    #[test]
    fn test_denormalize_saturates() {
        let stereo = StereoSignal::new(from_real(&[0.75, -0.75]), from_real(&[0.1, 0.0])).unwrap();
        let q = denormalize(&stereo, 16).unwrap();
        assert_eq!(q.frames[0].0, 32767);
        assert_eq!(q.frames[1].0, -32768);
        assert_eq!(q.clipped, 2);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(StereoSignal::new(from_real(&[0.0]), Signal::new()).is_err());
    }
}
