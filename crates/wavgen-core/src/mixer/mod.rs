//! Tone mixing and peak normalization.
//!
//! Every requested tone is rendered additively into one shared buffer, then
//! the whole mix is scaled so its absolute peak sits at the target level.

#[allow(clippy::module_inception)]
mod mixer;
mod processing;

#[cfg(test)]
mod tests_mixing;
#[cfg(test)]
mod tests_normalization;

// Re-export public API
pub use mixer::{mix, ToneMixer};
pub use processing::{allocate_buffer, normalize_to_level, peak_levels, PeakLevels};

/// Mono buffer of double-precision samples.
pub type SampleBuffer = Vec<f64>;
