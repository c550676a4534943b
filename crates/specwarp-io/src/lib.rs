//! # Specwarp IO
//!
//! Audio container I/O for specwarp: whole-file reading and writing of
//! stereo integer PCM WAV via hound.
//!
//! ```ignore
//! use specwarp_io::{read_wav, write_wav};
//!
//! let data = read_wav("input.wav")?;
//! write_wav("copy.wav", &data.header, &data.frames)?;
//! ```

pub mod error;
pub mod wav;

pub use error::{IoError, Result};
pub use wav::{decode_wav, encode_wav, read_wav, write_wav, WavData, WavHeader};
