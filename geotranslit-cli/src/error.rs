//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific failures; everything else travels as `anyhow::Error`
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither names nor name lists were given
    #[error("No input: pass names as arguments or name lists with --input")]
    NoInput,

    /// Orthography argument matches no embedded ruleset
    #[error("Unknown orthography: {0} (expected lv, lt, pl, et, a name or an id)")]
    UnknownOrthography(String),

    /// Configuration file content is unusable
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ruleset table failed to parse or validate
    #[error("Invalid ruleset: {0}")]
    InvalidRuleset(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
