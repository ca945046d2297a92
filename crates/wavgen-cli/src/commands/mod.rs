//! CLI command implementations

pub mod check;
pub mod generate;
pub mod hash;
pub mod json_output;

/// Process exit codes returned by the commands.
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    /// The configuration cannot be used.
    pub const CONFIG_ERROR: u8 = 1;
    /// Rendering or writing the output failed.
    pub const GENERATION_ERROR: u8 = 2;
}
