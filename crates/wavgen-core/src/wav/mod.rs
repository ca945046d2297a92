//! Mono RIFF/WAVE container.
//!
//! Files consist of the canonical 44-byte header (`RIFF`, `fmt `, `data`)
//! followed by little-endian sample data, with no timestamps or optional
//! chunks, so identical audio always produces identical files. The hash of
//! the sample data can be used to compare renders.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::{WavFormat, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data, read_format};
pub use result::WavResult;
pub use writer::{write_wav, write_wav_to_vec};
