//! wavgen CLI library.
//!
//! This crate provides the pieces behind the `wavgen` binary: config file
//! parsing, logging setup and the command implementations.

pub mod commands;
pub mod config;
pub mod logging;
