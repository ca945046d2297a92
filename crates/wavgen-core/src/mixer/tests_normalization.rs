//! Tests for peak measurement and normalization.

use super::*;
use crate::gain::decibels_to_gain;

fn abs_peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}

#[test]
fn test_peak_levels() {
    let peaks = peak_levels(&[0.5, -0.3, 0.8, -0.9]);
    assert_eq!(peaks.positive, 0.8);
    assert_eq!(peaks.negative, -0.9);
    assert_eq!(peaks.absolute(), 0.9);
}

#[test]
fn test_peak_levels_one_sided() {
    assert_eq!(peak_levels(&[0.1, 0.4, 0.2]).absolute(), 0.4);
    assert_eq!(peak_levels(&[-0.1, -0.4, -0.2]).absolute(), 0.4);
    assert_eq!(peak_levels(&[]).absolute(), 0.0);
}

#[test]
fn test_normalize_basic() {
    let mut samples = vec![0.5, -0.3, 0.8, -0.2];
    normalize_to_level(&mut samples, -3.0);

    let target = decibels_to_gain(-3.0);
    assert!((abs_peak(&samples) - target).abs() < 1e-12);
}

#[test]
fn test_normalize_negative_peak() {
    let mut samples = vec![0.25, -2.0, 1.0];
    let divisor = normalize_to_level(&mut samples, 0.0);
    assert_eq!(divisor, Some(2.0));
    assert_eq!(samples, vec![0.125, -1.0, 0.5]);
}

#[test]
fn test_normalize_above_full_scale() {
    let mut samples = vec![0.1, -0.05, 0.02];
    normalize_to_level(&mut samples, 6.0);
    assert!((abs_peak(&samples) - decibels_to_gain(6.0)).abs() < 1e-12);
    assert!(abs_peak(&samples) > 1.99);
}

#[test]
fn test_normalize_peak_db() {
    for level in [-24.0, -12.0, -6.0, -1.0, 0.0, 3.0] {
        let mut samples = vec![1.0, -0.5, 0.75, -0.25];
        normalize_to_level(&mut samples, level);
        let target = decibels_to_gain(level);
        assert!(
            (abs_peak(&samples) - target).abs() < 1e-12,
            "level {} dB gave peak {}",
            level,
            abs_peak(&samples)
        );
    }
}

#[test]
fn test_normalize_silent_audio() {
    let mut samples = vec![0.0; 16];
    assert_eq!(normalize_to_level(&mut samples, 0.0), None);
    assert!(samples.iter().all(|&s| s == 0.0));
    assert!(samples.iter().all(|s| !s.is_nan()));
}

#[test]
fn test_normalize_skips_exact_target() {
    let mut samples = vec![0.3, -1.0, 0.7];
    let before = samples.clone();
    assert_eq!(normalize_to_level(&mut samples, 0.0), None);
    assert_eq!(samples, before);
}

#[test]
fn test_normalize_to_silence_floor_clears() {
    let mut samples = vec![0.3, -1.0, 0.7];
    assert_eq!(normalize_to_level(&mut samples, -150.0), None);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_allocate_buffer_is_zeroed() {
    let buffer = allocate_buffer(1024).unwrap();
    assert_eq!(buffer.len(), 1024);
    assert!(buffer.iter().all(|&s| s == 0.0));
    assert!(allocate_buffer(0).unwrap().is_empty());
}

#[test]
fn test_allocate_buffer_reports_failure() {
    let err = allocate_buffer(usize::MAX).unwrap_err();
    assert_eq!(err.code(), "WAVGEN_008");
}
