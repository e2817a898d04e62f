//! geotranslit CLI library
//!
//! This library provides the command-line interface for transliterating
//! Baltic and Polish place names into Russian Cyrillic.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
