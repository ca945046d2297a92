//! wavgen core
//!
//! This crate renders band-limited test tones into PCM audio.
//!
//! # Overview
//!
//! A [`SynthesisRequest`] describes one or more tones of a single waveform
//! family. The pipeline turns it into little-endian PCM bytes ready for a
//! WAV container:
//!
//! 1. **Synthesis** - every tone is summed from sine partials, truncated
//!    below the Nyquist limit ([`synthesis`])
//! 2. **Mixing** - tones share one buffer, which is peak-normalized to the
//!    target dBFS level ([`mixer`])
//! 3. **Dither** - optional triangular noise ahead of integer quantization
//!    ([`dither`])
//! 4. **Encoding** - 8/16/24/32-bit integer or 32/64-bit float PCM ([`pcm`])
//! 5. **Byte order** - samples are normalized to little-endian ([`pcm`])
//!
//! # Determinism
//!
//! Rendering is deterministic. Dither noise comes from PCG32 seeded through
//! BLAKE3 seed derivation, so the same request, encoding and seed give
//! byte-identical output.
//!
//! # Example
//!
//! ```
//! use wavgen_core::{render_wav, Dither, EncodingSpec, SynthesisRequest, WaveType};
//!
//! let request = SynthesisRequest::tone(WaveType::Square, 440.0, 48000, 0.1).with_level(-3.0);
//! let encoding = EncodingSpec::integer(16)?;
//! let result = render_wav(&request, encoding, Dither::Triangular { seed: 1 })?;
//!
//! assert_eq!(&result.wav_data[0..4], b"RIFF");
//! assert_eq!(result.num_samples, 4800);
//! # Ok::<(), wavgen_core::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`render()`] / [`render_wav()`] - Main entry points
//! - [`gain`] - Gain/decibel conversion
//! - [`synthesis`] - Harmonic series and additive rendering
//! - [`mixer`] - Tone mixing and peak normalization
//! - [`dither`] - Triangular dither
//! - [`pcm`] - Sample encoding and byte order
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - WAV container writer

pub mod dither;
pub mod error;
pub mod gain;
pub mod mixer;
pub mod pcm;
pub mod render;
pub mod request;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use dither::Dither;
pub use error::{SynthError, SynthResult};
pub use gain::{decibels_to_gain, gain_to_decibels, MINUS_INFINITY_DB};
pub use mixer::SampleBuffer;
pub use pcm::{EncodedAudio, EncodingSpec, SampleFormat};
pub use render::{render, render_wav, wav_format};
pub use request::{SynthesisRequest, MAX_LEVEL_DB};
pub use synthesis::WaveType;
pub use wav::{WavFormat, WavResult};
