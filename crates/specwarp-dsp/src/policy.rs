//! Policy selection: one named, parameterised spectral transformation per
//! pipeline.

use crate::band::{MiddleDrop, RingIsolation};
use crate::decimate::BinDecimation;
use crate::error::Result;
use crate::mask::AudibilityMask;
use crate::processor::{Passthrough, SpectralProcessor};
use crate::warp::{FrequencyWarp, WarpFunction};
use specwarp_core::AudibleBand;

/// The spectral transformation applied to every frame.
///
/// Constructors without arguments use the documented defaults of each
/// policy. Parameters are checked by [`build`](Self::build).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "policy", rename_all = "snake_case")
)]
pub enum SpectralPolicy {
    /// No change; the pipeline reconstructs its input.
    Identity,
    /// Zero bins outside the audible band.
    AudibilityMask { band: AudibleBand },
    /// Zero the middle `fraction` of each half spectrum.
    MiddleDrop { fraction: f64 },
    /// Keep the annulus between `inner` and `outer` around the midpoint.
    Ring { inner: f64, outer: f64 },
    /// Remap audible frequencies through a warp function.
    Warp {
        function: WarpFunction,
        band: AudibleBand,
    },
    /// Compress bins by an integer factor.
    Decimate { factor: usize },
}

impl SpectralPolicy {
    pub fn mask() -> Self {
        Self::AudibilityMask {
            band: AudibleBand::default(),
        }
    }

    pub fn middle_drop() -> Self {
        Self::MiddleDrop {
            fraction: MiddleDrop::DEFAULT_FRACTION,
        }
    }

    pub fn ring() -> Self {
        Self::Ring {
            inner: RingIsolation::DEFAULT_INNER,
            outer: RingIsolation::DEFAULT_OUTER,
        }
    }

    pub fn warp(function: WarpFunction) -> Self {
        Self::Warp {
            function,
            band: AudibleBand::default(),
        }
    }

    pub fn decimate() -> Self {
        Self::Decimate {
            factor: BinDecimation::DEFAULT_FACTOR,
        }
    }

    /// Validates parameters and constructs the processor.
    pub fn build(&self) -> Result<Box<dyn SpectralProcessor>> {
        Ok(match *self {
            Self::Identity => Box::new(Passthrough),
            Self::AudibilityMask { band } => Box::new(AudibilityMask::new(band)),
            Self::MiddleDrop { fraction } => Box::new(MiddleDrop::new(fraction)?),
            Self::Ring { inner, outer } => Box::new(RingIsolation::new(inner, outer)?),
            Self::Warp { function, band } => Box::new(FrequencyWarp::new(function, band)?),
            Self::Decimate { factor } => Box::new(BinDecimation::new(factor)?),
        })
    }
}

impl Default for SpectralPolicy {
    fn default() -> Self {
        Self::warp(WarpFunction::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_names() {
        let cases = [
            (SpectralPolicy::Identity, "identity"),
            (SpectralPolicy::mask(), "mask"),
            (SpectralPolicy::middle_drop(), "band"),
            (SpectralPolicy::ring(), "ring"),
            (SpectralPolicy::default(), "warp"),
            (SpectralPolicy::decimate(), "decimate"),
        ];
        for (policy, name) in cases {
            assert_eq!(policy.build().unwrap().name(), name);
        }
    }

    #[test]
    fn test_build_rejects_bad_parameters() {
        assert!(SpectralPolicy::MiddleDrop { fraction: 1.5 }.build().is_err());
        assert!(SpectralPolicy::Ring {
            inner: 0.9,
            outer: 0.1
        }
        .build()
        .is_err());
        assert!(SpectralPolicy::Decimate { factor: 0 }.build().is_err());
        assert!(SpectralPolicy::warp(WarpFunction::Scale { ratio: -2.0 })
            .build()
            .is_err());
    }
}
