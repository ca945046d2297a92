//! Main entry point for rendering tones.
//!
//! The pipeline runs mixer → ditherer → encoder → byte-order normalizer,
//! handing the sample buffer from stage to stage.

use crate::dither::{apply_dither, Dither, DITHER_STREAM};
use crate::error::{SynthError, SynthResult};
use crate::mixer::mix;
use crate::pcm::{encode, to_little_endian, EncodedAudio, EncodingSpec, SampleFormat};
use crate::request::SynthesisRequest;
use crate::rng::create_component_rng;
use crate::wav::{WavFormat, WavResult};

/// Renders a request into little-endian PCM data.
///
/// Dither is only applied to integer output; floating-point output ignores
/// the setting.
///
/// # Arguments
/// * `request` - Tones to synthesize
/// * `encoding` - Output bit depth and sample format
/// * `dither` - Dither setting for integer output
///
/// # Returns
/// Encoded little-endian sample data
pub fn render(
    request: &SynthesisRequest,
    encoding: EncodingSpec,
    dither: Dither,
) -> SynthResult<EncodedAudio> {
    request.validate()?;
    encoding.validate()?;

    let mut samples = mix(request)?;

    if let (SampleFormat::Integer, Dither::Triangular { seed }) = (encoding.sample_format, dither) {
        let mut rng = create_component_rng(seed, DITHER_STREAM);
        apply_dither(&mut samples, encoding.bits_per_sample, &mut rng);
    }

    let mut audio = encode(&samples, encoding)?;
    to_little_endian(&mut audio.bytes, encoding.bits_per_sample);
    Ok(audio)
}

/// WAV format a request renders to.
///
/// Sample rates whose byte rate does not fit the 32-bit header field are
/// rejected as `InvalidSampleRate`.
pub fn wav_format(request: &SynthesisRequest, encoding: EncodingSpec) -> SynthResult<WavFormat> {
    let format = WavFormat::mono(request.sample_rate, encoding);
    match format.byte_rate() {
        Some(_) => Ok(format),
        None => Err(SynthError::InvalidSampleRate {
            rate: request.sample_rate,
        }),
    }
}

/// Renders a request into a complete WAV file.
pub fn render_wav(
    request: &SynthesisRequest,
    encoding: EncodingSpec,
    dither: Dither,
) -> SynthResult<WavResult> {
    let format = wav_format(request, encoding)?;
    let audio = render(request, encoding, dither)?;
    Ok(WavResult::from_encoded(&audio, format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::WaveType;

    fn request() -> SynthesisRequest {
        SynthesisRequest::tone(WaveType::Triangle, 440.0, 22050, 0.05).with_level(-1.0)
    }

    #[test]
    fn test_render_length() {
        let audio = render(&request(), EncodingSpec::integer(24).unwrap(), Dither::Off).unwrap();
        assert_eq!(audio.sample_count, 1103);
        assert_eq!(audio.bytes_per_sample, 3);
        assert_eq!(audio.data_len(), 1103 * 3);
    }

    #[test]
    fn test_render_validates_request() {
        let mut bad = request();
        bad.sample_rate = 0;
        let err = render(&bad, EncodingSpec::integer(16).unwrap(), Dither::Off).unwrap_err();
        assert!(matches!(err, SynthError::InvalidSampleRate { .. }));
    }

    #[test]
    fn test_render_validates_encoding() {
        let spec = EncodingSpec {
            bits_per_sample: 12,
            sample_format: SampleFormat::Integer,
        };
        let err = render(&request(), spec, Dither::Off).unwrap_err();
        assert!(matches!(err, SynthError::UnsupportedEncoding { bits: 12, .. }));
    }

    #[test]
    fn test_dither_is_seeded() {
        let spec = EncodingSpec::integer(16).unwrap();
        let a = render(&request(), spec, Dither::Triangular { seed: 1 }).unwrap();
        let b = render(&request(), spec, Dither::Triangular { seed: 1 }).unwrap();
        let c = render(&request(), spec, Dither::Triangular { seed: 2 }).unwrap();
        let plain = render(&request(), spec, Dither::Off).unwrap();

        assert_eq!(a.pcm_hash(), b.pcm_hash());
        assert_ne!(a.pcm_hash(), c.pcm_hash());
        assert_ne!(a.pcm_hash(), plain.pcm_hash());
    }

    #[test]
    fn test_float_output_ignores_dither() {
        let spec = EncodingSpec::float(32).unwrap();
        let plain = render(&request(), spec, Dither::Off).unwrap();
        let dithered = render(&request(), spec, Dither::Triangular { seed: 9 }).unwrap();
        assert_eq!(plain, dithered);
    }

    #[test]
    fn test_render_wav() {
        let result =
            render_wav(&request(), EncodingSpec::float(64).unwrap(), Dither::Off).unwrap();
        assert_eq!(&result.wav_data[0..4], b"RIFF");
        assert_eq!(result.num_samples, 1103);
        assert_eq!(result.data_len(), 1103 * 8);
        assert_eq!(result.sample_rate(), 22050);
    }

    #[test]
    fn test_render_wav_rejects_byte_rate_overflow() {
        let request = SynthesisRequest::tone(WaveType::Sine, 1000.0, 1_000_000_000, 0.000_001);
        let err = render_wav(&request, EncodingSpec::float(64).unwrap(), Dither::Off).unwrap_err();
        assert!(matches!(
            err,
            SynthError::InvalidSampleRate { rate: 1_000_000_000 }
        ));
        assert!(err.is_config_error());

        // 8-bit frames still fit at the same rate.
        let ok = render_wav(&request, EncodingSpec::integer(8).unwrap(), Dither::Off).unwrap();
        assert_eq!(ok.sample_rate(), 1_000_000_000);
    }
}
