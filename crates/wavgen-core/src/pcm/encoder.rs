//! Float-to-PCM quantization.

use byteorder::{NativeEndian, WriteBytesExt};

use super::{EncodedAudio, EncodingSpec, SampleFormat};
use crate::error::{SynthError, SynthResult};

/// Largest integer magnitude used for `bits`-wide signed PCM: `2^(bits-1) - 1`.
pub fn max_int(bits: u16) -> f64 {
    (2.0_f64.powi(i32::from(bits) - 1) - 1.0).round()
}

/// Scales a sample to `max_int` and rounds half away from zero.
///
/// Samples are clipped to [-1, 1] first, so the result always fits the
/// signed range of the target width.
#[inline]
pub fn quantize(sample: f64, max_int: f64) -> f64 {
    (sample.clamp(-1.0, 1.0) * max_int).round()
}

/// Encodes samples into PCM bytes.
///
/// Elements are written in host byte order; pass the result through
/// [`to_little_endian`](super::to_little_endian) before storing it in a WAV
/// file.
///
/// # Arguments
/// * `samples` - Normalized samples
/// * `spec` - Bit depth and sample format
///
/// # Returns
/// Encoded audio, or `UnsupportedEncoding` for an invalid spec
pub fn encode(samples: &[f64], spec: EncodingSpec) -> SynthResult<EncodedAudio> {
    spec.validate()?;

    let width = spec.bytes_per_sample();
    let len = samples
        .len()
        .checked_mul(width)
        .ok_or(SynthError::Allocation {
            samples: samples.len(),
        })?;
    let mut out: Vec<u8> = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| SynthError::Allocation {
            samples: samples.len(),
        })?;

    let peak = max_int(spec.bits_per_sample);
    match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Integer, 8) => {
            // The only unsigned format: centered on 128. The offset is added
            // before rounding.
            let offset = f64::from(i8::MAX) + 1.0;
            for &s in samples {
                let value = (s.clamp(-1.0, 1.0) * peak + offset).round();
                out.write_u8(value as u8)?;
            }
        }
        (SampleFormat::Integer, 16) => {
            for &s in samples {
                out.write_i16::<NativeEndian>(quantize(s, peak) as i16)?;
            }
        }
        (SampleFormat::Integer, 24) => {
            for &s in samples {
                out.write_i24::<NativeEndian>(quantize(s, peak) as i32)?;
            }
        }
        (SampleFormat::Integer, 32) => {
            for &s in samples {
                out.write_i32::<NativeEndian>(quantize(s, peak) as i32)?;
            }
        }
        (SampleFormat::FloatingPoint, 32) => {
            for &s in samples {
                out.write_f32::<NativeEndian>(s as f32)?;
            }
        }
        (SampleFormat::FloatingPoint, 64) => {
            for &s in samples {
                out.write_f64::<NativeEndian>(s)?;
            }
        }
        (format, bits) => {
            return Err(SynthError::UnsupportedEncoding {
                bits,
                format: format.as_str(),
            });
        }
    }

    Ok(EncodedAudio {
        bytes: out,
        sample_count: samples.len(),
        bytes_per_sample: width,
    })
}
