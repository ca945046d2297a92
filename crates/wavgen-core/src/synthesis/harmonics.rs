//! Additive rendering of harmonic series.
//!
//! Partials are summed directly into the caller's buffer so several tones
//! can share one buffer without intermediate allocations.

use std::f64::consts::PI;

use super::{HarmonicSeries, Synthesizer, WaveType};

/// One tone of a given waveform family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicSynth {
    /// Waveform family.
    pub wave_type: WaveType,
    /// Fundamental frequency in Hz.
    pub frequency: f64,
}

impl HarmonicSynth {
    /// Creates a tone generator.
    pub fn new(wave_type: WaveType, frequency: f64) -> Self {
        Self {
            wave_type,
            frequency,
        }
    }

    /// Returns the band-limited partials of this tone at `sample_rate`.
    pub fn series(&self, sample_rate: u32) -> HarmonicSeries {
        HarmonicSeries::new(self.wave_type, self.frequency, sample_rate)
    }
}

impl Synthesizer for HarmonicSynth {
    fn render_into(&self, buffer: &mut [f64], sample_rate: u32) -> usize {
        let rate = sample_rate as f64;
        let mut rendered = 0;

        for partial in self.series(sample_rate) {
            let step = (2.0 * PI * self.frequency * partial.factor) / rate;
            for (i, sample) in buffer.iter_mut().enumerate() {
                *sample += (step * i as f64).sin() * partial.amplitude;
            }
            rendered += 1;
        }

        rendered
    }
}

/// Adds one tone of `wave_type` at `frequency` into `buffer`.
///
/// # Arguments
/// * `buffer` - Samples to accumulate into
/// * `wave_type` - Waveform family
/// * `frequency` - Fundamental frequency in Hz
/// * `sample_rate` - Audio sample rate in Hz
///
/// # Returns
/// Number of partials rendered (0 when the fundamental is at or above Nyquist)
pub fn synthesize(buffer: &mut [f64], wave_type: WaveType, frequency: f64, sample_rate: u32) -> usize {
    HarmonicSynth::new(wave_type, frequency).render_into(buffer, sample_rate)
}
