//! Triangular noise dither applied before integer quantization.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Component key used to derive the dither stream from the base seed.
pub const DITHER_STREAM: &str = "dither";

/// Dither setting for integer PCM output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Dither {
    /// Quantize the signal as is.
    #[default]
    Off,
    /// Add triangular noise of one LSB peak, drawn from a seeded stream.
    Triangular {
        /// Base seed of the noise stream.
        seed: u32,
    },
}

impl Dither {
    /// Returns true unless dithering is off.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Dither::Off)
    }
}

/// Size of one quantization step at `bit_depth`, relative to full scale.
pub fn lsb(bit_depth: u16) -> f64 {
    1.0 / 2.0_f64.powi(i32::from(bit_depth) - 1)
}

/// Adds triangular-distributed noise to every sample.
///
/// Each offset is the difference of two independent uniform draws scaled to
/// one LSB at `bit_depth`, giving a triangular distribution on (-1, 1) LSB.
pub fn apply_dither<R: Rng>(buffer: &mut [f64], bit_depth: u16, rng: &mut R) {
    let amplitude = lsb(bit_depth);
    for sample in buffer.iter_mut() {
        let noise = rng.gen::<f64>() - rng.gen::<f64>();
        *sample += noise * amplitude;
    }
}
