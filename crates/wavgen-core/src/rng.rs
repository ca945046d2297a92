//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the pipeline flows through this module so that a given
//! configuration and seed always renders byte-identical output. Seeds are
//! derived using BLAKE3 so each consumer gets an independent stream.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named component from the base seed.
///
/// Hashes the base seed (little-endian) followed by the UTF-8 key and keeps
/// the first four bytes of the digest.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let digest = hash.as_bytes();
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Creates the RNG for a named component.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}
