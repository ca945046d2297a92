//! Buffer allocation, peak measurement and normalization.

use crate::error::{SynthError, SynthResult};
use crate::gain::decibels_to_gain;

/// Extreme excursions of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeakLevels {
    /// Largest positive sample (0.0 if none).
    pub positive: f64,
    /// Most negative sample (0.0 if none).
    pub negative: f64,
}

impl PeakLevels {
    /// Absolute peak: `max(positive, -negative)`.
    pub fn absolute(&self) -> f64 {
        self.positive.max(-self.negative)
    }
}

/// Allocates a zeroed buffer, reporting failure instead of aborting.
pub fn allocate_buffer(num_samples: usize) -> SynthResult<Vec<f64>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(num_samples)
        .map_err(|_| SynthError::Allocation {
            samples: num_samples,
        })?;
    buffer.resize(num_samples, 0.0);
    Ok(buffer)
}

/// Measures the positive and negative peaks of `samples`.
pub fn peak_levels(samples: &[f64]) -> PeakLevels {
    samples
        .iter()
        .fold(PeakLevels::default(), |peaks, &s| PeakLevels {
            positive: peaks.positive.max(s),
            negative: peaks.negative.min(s),
        })
}

/// Scales `samples` so the absolute peak equals `decibels_to_gain(target_level_db)`.
///
/// Silent buffers are left untouched, and the division pass is skipped when
/// the buffer already sits exactly at the target. A target at or below the
/// silence floor clears the buffer.
///
/// # Returns
/// The divisor that was applied, or `None` if no division took place
pub fn normalize_to_level(samples: &mut [f64], target_level_db: f64) -> Option<f64> {
    let peak = peak_levels(samples).absolute();
    if peak == 0.0 {
        return None;
    }

    let target = decibels_to_gain(target_level_db);
    if target == 0.0 {
        samples.fill(0.0);
        return None;
    }

    let divisor = peak / target;
    if divisor == 1.0 {
        return None;
    }

    for sample in samples.iter_mut() {
        *sample /= divisor;
    }
    Some(divisor)
}
