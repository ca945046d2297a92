//! Band-limited additive synthesis.
//!
//! Every waveform is built from a series of sine partials at multiples of
//! the fundamental. The series for each [`WaveType`] is produced by
//! [`HarmonicSeries`], which stops at the first partial that would reach the
//! Nyquist limit, so nothing ever aliases.
//!
//! - `harmonics` - Renders a series into a sample buffer

pub mod harmonics;


use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SynthError;

pub use harmonics::{synthesize, HarmonicSynth};

/// Common trait for tone generators that accumulate into a shared buffer.
pub trait Synthesizer {
    /// Adds this generator's output to `buffer`.
    ///
    /// # Arguments
    /// * `buffer` - Samples to accumulate into (length = sample count)
    /// * `sample_rate` - Audio sample rate in Hz
    ///
    /// # Returns
    /// Number of partials that were rendered
    fn render_into(&self, buffer: &mut [f64], sample_rate: u32) -> usize;
}

/// Waveform families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveType {
    /// Fundamental only.
    #[default]
    Sine,
    /// Odd harmonics at 1/n², alternating in sign.
    Triangle,
    /// Odd harmonics at 4/(nπ).
    Square,
    /// Every harmonic at 1/n.
    Saw,
    /// Fundamental plus even harmonics at 1/n.
    #[serde(rename = "even")]
    EvenHarmonics,
}

impl WaveType {
    /// All wave types, in configuration order.
    pub const ALL: [WaveType; 5] = [
        WaveType::Sine,
        WaveType::Triangle,
        WaveType::Square,
        WaveType::Saw,
        WaveType::EvenHarmonics,
    ];

    /// Name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveType::Sine => "sine",
            WaveType::Triangle => "triangle",
            WaveType::Square => "square",
            WaveType::Saw => "saw",
            WaveType::EvenHarmonics => "even",
        }
    }
}

impl fmt::Display for WaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaveType {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WaveType::ALL
            .into_iter()
            .find(|wave| wave.as_str() == s)
            .ok_or_else(|| {
                SynthError::invalid_param("wave_type", format!("unrecognized wave type: '{}'", s))
            })
    }
}

/// A single sine component of a waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Multiple of the fundamental frequency.
    pub factor: f64,
    /// Signed amplitude of the component.
    pub amplitude: f64,
}

impl Partial {
    /// Frequency of this partial for a given fundamental.
    #[inline]
    pub fn frequency(&self, fundamental: f64) -> f64 {
        fundamental * self.factor
    }
}

/// Iterator over the band-limited partials of a waveform.
///
/// Yields partials in ascending order while `fundamental * factor` stays
/// strictly below `sample_rate / 2`.
#[derive(Debug, Clone)]
pub struct HarmonicSeries {
    wave_type: WaveType,
    fundamental: f64,
    nyquist: f64,
    factor: f64,
    sign: f64,
    done: bool,
}

impl HarmonicSeries {
    /// Creates the series for a tone.
    pub fn new(wave_type: WaveType, fundamental: f64, sample_rate: u32) -> Self {
        Self {
            wave_type,
            fundamental,
            nyquist: sample_rate as f64 / 2.0,
            factor: 1.0,
            sign: 1.0,
            // Non-positive fundamentals never pass the Nyquist bound.
            done: !(fundamental.is_finite() && fundamental > 0.0),
        }
    }

    fn amplitude(&self) -> f64 {
        let factor = self.factor;
        match self.wave_type {
            WaveType::Sine => 1.0,
            WaveType::Triangle => self.sign / (factor * factor),
            WaveType::Square => 4.0 / (factor * PI),
            WaveType::Saw | WaveType::EvenHarmonics => 1.0 / factor,
        }
    }

    fn advance(&mut self) {
        match self.wave_type {
            WaveType::Sine => self.done = true,
            WaveType::Triangle => {
                self.sign = -self.sign;
                self.factor += 2.0;
            }
            WaveType::Square => self.factor += 2.0,
            WaveType::Saw => self.factor += 1.0,
            // 1, 2, 4, 6, ...
            WaveType::EvenHarmonics => {
                if self.factor == 1.0 {
                    self.factor = 0.0;
                }
                self.factor += 2.0;
            }
        }
    }
}

impl Iterator for HarmonicSeries {
    type Item = Partial;

    fn next(&mut self) -> Option<Partial> {
        let frequency = self.fundamental * self.factor;
        if self.done || !frequency.is_finite() || frequency >= self.nyquist {
            self.done = true;
            return None;
        }

        let partial = Partial {
            factor: self.factor,
            amplitude: self.amplitude(),
        };
        self.advance();
        Some(partial)
    }
}

impl std::iter::FusedIterator for HarmonicSeries {}
