//! Tests for tone mixing.

use super::*;
use crate::gain::decibels_to_gain;
use crate::request::SynthesisRequest;
use crate::synthesis::{synthesize, HarmonicSynth, WaveType};

#[test]
fn test_mix_length_and_peak() {
    let request = SynthesisRequest::tone(WaveType::Square, 220.0, 22050, 0.1)
        .with_frequency(330.0)
        .with_level(-6.0);
    let samples = mix(&request).unwrap();

    assert_eq!(samples.len(), 2205);
    let peak = peak_levels(&samples).absolute();
    assert!((peak - decibels_to_gain(-6.0)).abs() < 1e-12);
}

#[test]
fn test_every_wave_type_hits_target_level() {
    for wave_type in WaveType::ALL {
        let request = SynthesisRequest::tone(wave_type, 440.0, 16000, 0.05).with_level(-1.0);
        let samples = mix(&request).unwrap();
        let peak = peak_levels(&samples).absolute();
        assert!(
            (peak - decibels_to_gain(-1.0)).abs() < 1e-12,
            "{} peaked at {}",
            wave_type,
            peak
        );
    }
}

#[test]
fn test_mix_sums_tones_before_normalizing() {
    let request = SynthesisRequest::tone(WaveType::Sine, 100.0, 8000, 0.05).with_frequency(300.0);
    let mixed = mix(&request).unwrap();

    let mut expected = vec![0.0; 400];
    synthesize(&mut expected, WaveType::Sine, 100.0, 8000);
    synthesize(&mut expected, WaveType::Sine, 300.0, 8000);
    let peak = peak_levels(&expected).absolute();

    for (a, b) in mixed.iter().zip(expected.iter()) {
        assert!((a - b / peak).abs() < 1e-12);
    }
}

#[test]
fn test_all_tones_above_nyquist_yield_silence() {
    let request = SynthesisRequest::tone(WaveType::Saw, 5000.0, 8000, 0.01).with_frequency(4000.0);
    let samples = mix(&request).unwrap();
    assert_eq!(samples.len(), 80);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_tone_mixer_counts_partials() {
    let mut mixer = ToneMixer::new(64, 1000).unwrap();
    assert_eq!(mixer.len(), 64);
    assert!(!mixer.is_empty());

    // 100 Hz saw below 500 Hz: factors 1..=4.
    assert_eq!(mixer.add_tone(&HarmonicSynth::new(WaveType::Saw, 100.0)), 4);
    // 600 Hz is above Nyquist.
    assert_eq!(mixer.add_tone(&HarmonicSynth::new(WaveType::Saw, 600.0)), 0);
    assert_eq!(mixer.partials(), 4);

    let raw_peak = peak_levels(mixer.samples()).absolute();
    assert!(raw_peak > 1.0);

    let out = mixer.finish(0.0);
    assert!((peak_levels(&out).absolute() - 1.0).abs() < 1e-12);
}
