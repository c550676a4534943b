//! Tolerance constants for specwarp integration tests.

/// Per-sample error for paths that only differ by FFT rounding.
pub const FLOAT_EPSILON: f64 = 1e-9;

/// RMS reconstruction error bound for an identity round trip.
pub const RECONSTRUCTION_RMS: f64 = 1e-6;

/// Values below this are considered silent.
pub const SILENCE_THRESHOLD: f64 = 1e-9;
