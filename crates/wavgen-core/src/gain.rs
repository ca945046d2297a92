//! Conversions between linear gain and decibels.

/// Level used to represent silence; anything quieter is clamped to it.
pub const MINUS_INFINITY_DB: f64 = -150.0;

/// Converts a linear gain to decibels, clamped at [`MINUS_INFINITY_DB`].
pub fn gain_to_decibels(gain: f64) -> f64 {
    if gain > 0.0 {
        (gain.log10() * 20.0).max(MINUS_INFINITY_DB)
    } else {
        MINUS_INFINITY_DB
    }
}

/// Converts decibels to a linear gain. Levels at or below
/// [`MINUS_INFINITY_DB`] map to a gain of zero.
pub fn decibels_to_gain(decibels: f64) -> f64 {
    if decibels > MINUS_INFINITY_DB {
        10.0_f64.powf(decibels * 0.05)
    } else {
        0.0
    }
}
