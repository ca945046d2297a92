//! Byte-order normalization for encoded samples.

/// Reverses the bytes of every `width`-byte element in place.
///
/// Widths below 2 leave the buffer unchanged. A trailing partial element is
/// not touched.
pub fn swap_sample_bytes(bytes: &mut [u8], width: usize) {
    if width < 2 {
        return;
    }
    for element in bytes.chunks_exact_mut(width) {
        element.reverse();
    }
}

/// Converts host-order samples to little-endian in place.
///
/// A no-op on little-endian hosts.
pub fn to_little_endian(bytes: &mut [u8], bits_per_sample: u16) {
    if cfg!(target_endian = "big") {
        swap_sample_bytes(bytes, usize::from(bits_per_sample / 8));
    }
}
