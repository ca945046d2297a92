//! PCM data extraction and hashing utilities.

use crate::pcm::SampleFormat;

use super::format::{WavFormat, HEADER_LEN};

fn le_u16(bytes: &[u8], pos: usize) -> Option<u16> {
    Some(u16::from_le_bytes([*bytes.get(pos)?, *bytes.get(pos + 1)?]))
}

fn le_u32(bytes: &[u8], pos: usize) -> Option<u32> {
    let b = bytes.get(pos..pos + 4)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// Iterates over `(id, body)` of every chunk after the RIFF/WAVE preamble.
fn chunks(wav_data: &[u8]) -> impl Iterator<Item = (&[u8], &[u8])> {
    let valid = wav_data.len() >= 12 && &wav_data[0..4] == b"RIFF" && &wav_data[8..12] == b"WAVE";
    let mut pos = if valid { 12 } else { wav_data.len() };

    std::iter::from_fn(move || {
        let id = wav_data.get(pos..pos + 4)?;
        let size = le_u32(wav_data, pos + 4)? as usize;
        let start = pos + 8;
        let body = wav_data.get(start..start.checked_add(size)?)?;

        pos = start + size;
        // Align to word boundary
        if size % 2 != 0 {
            pos += 1;
        }
        Some((id, body))
    })
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_LEN {
        return None;
    }
    chunks(wav_data).find(|(id, _)| *id == b"data").map(|(_, body)| body)
}

/// Reads the format parameters from a WAV file buffer.
///
/// # Returns
/// The format, or None if the `fmt ` chunk is missing or describes an
/// unsupported sample format
pub fn read_format(wav_data: &[u8]) -> Option<WavFormat> {
    let (_, fmt) = chunks(wav_data).find(|(id, _)| *id == b"fmt ")?;
    let sample_format = match le_u16(fmt, 0)? {
        1 => SampleFormat::Integer,
        3 => SampleFormat::FloatingPoint,
        _ => return None,
    };

    Some(WavFormat {
        channels: le_u16(fmt, 2)?,
        sample_rate: le_u32(fmt, 4)?,
        bits_per_sample: le_u16(fmt, 14)?,
        sample_format,
    })
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
