//! Core WAV writing functions.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use crate::config::BitDepth;
use crate::error::{DtmfError, DtmfResult};

use super::format::WavFormat;

/// Writes a complete WAV stream to a writer.
///
/// # Arguments
/// * `writer` - Output stream; must be seekable so the header sizes can be patched
/// * `format` - WAV format parameters
/// * `samples` - Mono samples; duplicated into every channel
///
/// # Returns
/// Result indicating success or an encoding error
pub fn write_wav<W: Write + Seek>(
    writer: W,
    format: &WavFormat,
    samples: &[i16],
) -> DtmfResult<()> {
    format.validate()?;
    format.check_frames(samples.len())?;
    let mut wav = hound::WavWriter::new(writer, format.to_spec())?;
    write_frames(&mut wav, format, samples)?;
    wav.finalize()?;
    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Arguments
/// * `format` - WAV format parameters
/// * `samples` - Mono samples
///
/// # Returns
/// Complete WAV file as bytes
pub fn write_wav_to_vec(format: &WavFormat, samples: &[i16]) -> DtmfResult<Vec<u8>> {
    format.check_frames(samples.len())?;
    let data_len = format.data_bytes(samples.len()) as usize;
    let mut buffer = Vec::with_capacity(44 + data_len);
    write_wav(Cursor::new(&mut buffer), format, samples)?;
    Ok(buffer)
}

/// Writes a WAV file to disk.
///
/// The layout and payload size are checked before the file is created.
/// The file is created (or truncated) at `path`. Any failure, including one
/// while finalizing the header, is reported as [`DtmfError::Write`]. The file
/// handle is closed on every path out of this function.
pub fn write_wav_file(path: &Path, format: &WavFormat, samples: &[i16]) -> DtmfResult<()> {
    format.validate()?;
    format.check_frames(samples.len())?;
    let write_err = |source: hound::Error| DtmfError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut wav: hound::WavWriter<BufWriter<File>> =
        hound::WavWriter::create(path, format.to_spec()).map_err(write_err)?;
    write_frames(&mut wav, format, samples).map_err(write_err)?;
    wav.finalize().map_err(write_err)
}

fn write_frames<W: Write + Seek>(
    wav: &mut hound::WavWriter<W>,
    format: &WavFormat,
    samples: &[i16],
) -> hound::Result<()> {
    for &sample in samples {
        for _ in 0..format.channels {
            match format.bit_depth {
                BitDepth::Pcm8 => wav.write_sample(sample as i8)?,
                BitDepth::Pcm16 => wav.write_sample(sample)?,
            }
        }
    }
    Ok(())
}
