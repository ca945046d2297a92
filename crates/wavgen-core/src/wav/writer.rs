//! Core WAV writing.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use super::format::{WavFormat, HEADER_LEN};

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Little-endian sample bytes
///
/// # Returns
/// Result indicating success or I/O error. Data that does not fit the
/// 32-bit RIFF size fields, or a byte rate above `u32::MAX`, is rejected
/// with `InvalidInput`.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let byte_rate = format.byte_rate().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "byte rate of {} Hz at {} bytes per frame exceeds the RIFF field size",
                format.sample_rate,
                format.block_align()
            ),
        )
    })?;
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|size| size.checked_add(36).is_some())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} bytes of sample data exceed the RIFF size limit", pcm_data.len()),
            )
        })?;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_u32::<LittleEndian>(file_size)?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_u32::<LittleEndian>(16)?;
    writer.write_u16::<LittleEndian>(format.sample_format.format_tag())?;
    writer.write_u16::<LittleEndian>(format.channels)?;
    writer.write_u32::<LittleEndian>(format.sample_rate)?;
    writer.write_u32::<LittleEndian>(byte_rate)?;
    writer.write_u16::<LittleEndian>(format.block_align())?;
    writer.write_u16::<LittleEndian>(format.bits_per_sample)?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_u32::<LittleEndian>(data_size)?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}
