//! Stereo integer PCM WAV reading and writing using hound
//!
//! The pipeline only handles two-channel integer PCM of 1 to 32 bits.
//! Anything else is rejected when the header is read.

use crate::error::{IoError, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use specwarp_core::PcmFrame;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;
use tracing::debug;

/// Header fields the pipeline cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Number of channels (always 2 once validated)
    pub channels: u16,
}

impl WavHeader {
    /// Header for 16-bit stereo at the given sample rate
    pub fn stereo16(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            bits_per_sample: 16,
            channels: 2,
        }
    }

    fn from_spec(spec: WavSpec) -> Result<Self> {
        if spec.sample_format != SampleFormat::Int {
            return Err(IoError::UnsupportedFormat("floating point samples".into()));
        }
        if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
            return Err(IoError::UnsupportedFormat(format!(
                "{} bits per sample",
                spec.bits_per_sample
            )));
        }
        if spec.channels != 2 {
            return Err(IoError::ChannelCount(spec.channels));
        }
        Ok(Self {
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            channels: spec.channels,
        })
    }

    fn to_spec(self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: SampleFormat::Int,
        }
    }
}

/// Decoded stereo audio
#[derive(Debug, Clone, PartialEq)]
pub struct WavData {
    pub header: WavHeader,
    pub frames: Vec<PcmFrame>,
}

/// Read a whole stereo WAV file
pub fn read_wav(path: impl AsRef<Path>) -> Result<WavData> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = WavReader::new(BufReader::new(file))?;
    let data = read_all(reader)?;
    debug!(
        path = %path.display(),
        frames = data.frames.len(),
        sample_rate = data.header.sample_rate,
        bits = data.header.bits_per_sample,
        "read wav"
    );
    Ok(data)
}

/// Read stereo WAV data from any byte source
pub fn decode_wav<R: Read>(source: R) -> Result<WavData> {
    read_all(WavReader::new(source)?)
}

fn read_all<R: Read>(mut reader: WavReader<R>) -> Result<WavData> {
    let header = WavHeader::from_spec(reader.spec())?;

    let mut frames = Vec::with_capacity(reader.duration() as usize);
    let mut samples = reader.samples::<i32>();
    while let Some(left) = samples.next() {
        let left = left?;
        let right = samples
            .next()
            .ok_or_else(|| IoError::InvalidData("sample stream ends mid-frame".into()))??;
        frames.push((i64::from(left), i64::from(right)));
    }

    Ok(WavData { header, frames })
}

/// Write stereo frames to a WAV file
pub fn write_wav(path: impl AsRef<Path>, header: &WavHeader, frames: &[PcmFrame]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let writer = WavWriter::new(BufWriter::new(file), header.to_spec())?;
    write_all(writer, header, frames)?;
    debug!(path = %path.display(), frames = frames.len(), "wrote wav");
    Ok(())
}

/// Encode stereo frames to WAV in memory
///
/// # Returns
/// WAV file bytes
pub fn encode_wav(header: &WavHeader, frames: &[PcmFrame]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let cursor = std::io::Cursor::new(&mut buffer);
        let writer = WavWriter::new(cursor, header.to_spec())?;
        write_all(writer, header, frames)?;
    }
    Ok(buffer)
}

fn write_all<W: Write + Seek>(
    mut writer: WavWriter<W>,
    header: &WavHeader,
    frames: &[PcmFrame],
) -> Result<()> {
    if header.channels != 2 {
        return Err(IoError::ChannelCount(header.channels));
    }
    if header.bits_per_sample == 0 || header.bits_per_sample > 32 {
        return Err(IoError::UnsupportedFormat(format!(
            "{} bits per sample",
            header.bits_per_sample
        )));
    }

    let max = (1i64 << (header.bits_per_sample - 1)) - 1;
    let min = -(1i64 << (header.bits_per_sample - 1));
    let narrow = |value: i64| -> Result<i32> {
        if value < min || value > max {
            return Err(IoError::InvalidData(format!(
                "sample {} does not fit in {} bits",
                value, header.bits_per_sample
            )));
        }
        Ok(value as i32)
    };

    for &(left, right) in frames {
        writer.write_sample(narrow(left)?)?;
        writer.write_sample(narrow(right)?)?;
    }

    // Finalize writes the header and flushes
    writer.finalize()?;
    Ok(())
}
