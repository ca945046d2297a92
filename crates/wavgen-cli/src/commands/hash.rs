//! Hash command implementation
//!
//! Prints the BLAKE3 hash of a WAV file's sample data. The header is not
//! hashed, so two renders of the same audio compare equal.

use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::error;
use wavgen_core::wav::{compute_pcm_hash, read_format};

use super::exit_codes;

/// Run the hash command
///
/// # Returns
/// Exit code: 0 on success, 2 if the file cannot be read or is not a WAV file
pub fn run(path: &Path) -> Result<u8> {
    let wav_data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            return Ok(report_failure(&format!(
                "Failed to read WAV file: {}: {}",
                path.display(),
                e
            )))
        }
    };

    let Some(hash) = compute_pcm_hash(&wav_data) else {
        return Ok(report_failure(&format!(
            "'{}' is not a valid WAV file",
            path.display()
        )));
    };

    println!("{}  {}", hash, path.display());
    if let Some(format) = read_format(&wav_data) {
        println!(
            "{}",
            format!(
                "{}Hz, {}-bit {}",
                format.sample_rate, format.bits_per_sample, format.sample_format
            )
            .dimmed()
        );
    }

    Ok(exit_codes::SUCCESS)
}

fn report_failure(message: &str) -> u8 {
    error!("{}", message);
    eprintln!("{}: {}", "error".red(), message);
    exit_codes::GENERATION_ERROR
}
