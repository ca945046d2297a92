//! End-to-end rendering tests.

use std::io::Cursor;

use wavgen_core::gain::decibels_to_gain;
use wavgen_core::mixer::{mix, peak_levels};
use wavgen_core::{
    render, render_wav, Dither, EncodingSpec, SampleFormat, SynthesisRequest, WaveType,
};

fn read_back_i32(wav_data: &[u8]) -> (hound::WavSpec, Vec<i32>) {
    let reader = hound::WavReader::new(Cursor::new(wav_data)).expect("valid wav");
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i32>()
        .collect::<Result<Vec<_>, _>>()
        .expect("readable samples");
    (spec, samples)
}

#[test]
fn test_sine_1khz_16bit_scenario() {
    let request = SynthesisRequest::tone(WaveType::Sine, 1000.0, 48000, 1.0).with_level(0.0);
    let result = render_wav(&request, EncodingSpec::integer(16).unwrap(), Dither::Off).unwrap();

    let (spec, samples) = read_back_i32(&result.wav_data);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    assert_eq!(samples.len(), 48000);
    assert_eq!(samples[0], 0);
    assert!(samples.iter().all(|&s| (-32767..=32767).contains(&s)));
    // 48 samples per period: the quarter-period sample is the crest.
    assert_eq!(samples[12], 32767);
    assert_eq!(samples[36], -32767);
}

#[test]
fn test_24bit_round_trip_through_hound() {
    let request = SynthesisRequest::tone(WaveType::Saw, 220.0, 44100, 0.2).with_level(-6.0);
    let encoding = EncodingSpec::integer(24).unwrap();

    let samples = mix(&request).unwrap();
    let result = render_wav(&request, encoding, Dither::Off).unwrap();
    let (spec, decoded) = read_back_i32(&result.wav_data);

    assert_eq!(spec.bits_per_sample, 24);
    assert_eq!(decoded.len(), samples.len());
    for (&s, &d) in samples.iter().zip(decoded.iter()) {
        assert_eq!(d, (s * 8_388_607.0).round() as i32);
    }
}

#[test]
fn test_8bit_reads_back_centered() {
    let request = SynthesisRequest::tone(WaveType::Square, 100.0, 8000, 0.1);
    let result = render_wav(&request, EncodingSpec::integer(8).unwrap(), Dither::Off).unwrap();

    let (spec, decoded) = read_back_i32(&result.wav_data);
    assert_eq!(spec.bits_per_sample, 8);
    // hound maps unsigned 8-bit back to signed around zero.
    assert_eq!(decoded[0], 0);
    assert!(decoded.iter().all(|&s| (-127..=127).contains(&s)));
    assert!(decoded.iter().any(|&s| s == 127 || s == -127));
}

#[test]
fn test_float32_reads_back() {
    let request = SynthesisRequest::tone(WaveType::EvenHarmonics, 300.0, 16000, 0.1).with_level(-3.0);
    let samples = mix(&request).unwrap();
    let result = render_wav(&request, EncodingSpec::float(32).unwrap(), Dither::Off).unwrap();

    let reader = hound::WavReader::new(Cursor::new(&result.wav_data[..])).unwrap();
    assert_eq!(reader.spec().sample_format, hound::SampleFormat::Float);
    let decoded: Vec<f32> = reader.into_samples::<f32>().map(|s| s.unwrap()).collect();

    assert_eq!(decoded.len(), samples.len());
    for (&s, &d) in samples.iter().zip(decoded.iter()) {
        assert_eq!(d, s as f32);
    }
}

#[test]
fn test_float64_preserves_normalized_samples() {
    let request = SynthesisRequest::tone(WaveType::Triangle, 500.0, 8000, 0.05)
        .with_frequency(750.0)
        .with_level(2.0);
    let samples = mix(&request).unwrap();
    let audio = render(&request, EncodingSpec::float(64).unwrap(), Dither::Off).unwrap();

    let decoded: Vec<f64> = audio
        .bytes
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
        .collect();
    assert_eq!(decoded, samples);

    let peak = peak_levels(&decoded).absolute();
    assert!((peak - decibels_to_gain(2.0)).abs() < 1e-12);
}

#[test]
fn test_every_encoding_renders() {
    let request = SynthesisRequest::tone(WaveType::Saw, 440.0, 22050, 0.02);
    for (bits, format) in [
        (8, SampleFormat::Integer),
        (16, SampleFormat::Integer),
        (24, SampleFormat::Integer),
        (32, SampleFormat::Integer),
        (32, SampleFormat::FloatingPoint),
        (64, SampleFormat::FloatingPoint),
    ] {
        let encoding = EncodingSpec::new(bits, format).unwrap();
        let result = render_wav(&request, encoding, Dither::Triangular { seed: 5 }).unwrap();
        assert_eq!(result.num_samples, 441);
        assert_eq!(result.data_len(), 441 * usize::from(bits / 8));
        assert_eq!(result.wav_data.len(), 44 + result.data_len());
    }
}

#[test]
fn test_dithered_output_is_reproducible() {
    let request = SynthesisRequest::tone(WaveType::Sine, 440.0, 48000, 0.1).with_level(-20.0);
    let encoding = EncodingSpec::integer(16).unwrap();

    let a = render_wav(&request, encoding, Dither::Triangular { seed: 42 }).unwrap();
    let b = render_wav(&request, encoding, Dither::Triangular { seed: 42 }).unwrap();
    assert_eq!(a.pcm_hash, b.pcm_hash);
    assert_eq!(a.wav_data, b.wav_data);
}

#[test]
fn test_dither_moves_samples_at_most_one_step() {
    let request = SynthesisRequest::tone(WaveType::Sine, 440.0, 48000, 0.1).with_level(-20.0);
    let encoding = EncodingSpec::integer(16).unwrap();

    let plain = read_back_i32(&render_wav(&request, encoding, Dither::Off).unwrap().wav_data).1;
    let dithered =
        read_back_i32(&render_wav(&request, encoding, Dither::Triangular { seed: 3 }).unwrap().wav_data).1;

    assert_eq!(plain.len(), dithered.len());
    assert!(plain.iter().zip(&dithered).all(|(a, b)| (a - b).abs() <= 1));
    assert!(plain.iter().zip(&dithered).any(|(a, b)| a != b));
}

/// 8-bit output adds the unsigned offset before rounding, and dither is
/// applied on top of that unchanged. Dithered silence therefore rounds
/// symmetrically around the 128 midpoint; no DC correction is applied.
#[test]
fn test_8bit_dither_keeps_offset_before_rounding() {
    // A tone above Nyquist renders as silence.
    let request = SynthesisRequest::tone(WaveType::Sine, 30000.0, 48000, 1.0);
    let audio = render(
        &request,
        EncodingSpec::integer(8).unwrap(),
        Dither::Triangular { seed: 11 },
    )
    .unwrap();

    assert!(audio.bytes.iter().all(|&b| (127..=129).contains(&b)));
    let mean = audio.bytes.iter().map(|&b| f64::from(b)).sum::<f64>() / audio.bytes.len() as f64;
    assert!((mean - 128.0).abs() < 0.02, "mean {}", mean);

    let plain = render(&request, EncodingSpec::integer(8).unwrap(), Dither::Off).unwrap();
    assert!(plain.bytes.iter().all(|&b| b == 128));
}
