//! Error types
//!
//! Transliteration itself cannot fail: every Unicode string is valid input.
//! Errors only arise at the configuration boundary, when a ruleset table is
//! parsed and validated, or when a caller names an orthography that has no
//! ruleset.

use thiserror::Error;

/// Problems found while building a [`Ruleset`](crate::Ruleset) from its table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesetError {
    /// The table document is not valid TOML or does not match the schema
    #[error("failed to parse ruleset '{code}': {message}")]
    Parse {
        /// Code the table was loaded under
        code: String,
        /// Parser diagnostic
        message: String,
    },

    /// Embedded table declares a different code than it was registered with
    #[error("ruleset code mismatch: expected {expected}, got {found}")]
    CodeMismatch {
        /// Code the table was registered under
        expected: String,
        /// Code declared in the table metadata
        found: String,
    },

    /// A grapheme key is empty, too long or not case-folded
    #[error("ruleset '{code}': invalid grapheme key '{key}': {reason}")]
    InvalidGrapheme {
        /// Ruleset code
        code: String,
        /// Offending key
        key: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A context rule is malformed
    #[error("ruleset '{code}': rule #{index} is invalid: {reason}")]
    InvalidRule {
        /// Ruleset code
        code: String,
        /// Zero-based position of the rule in the table
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// A rule references a character class the ruleset does not define
    #[error("ruleset '{code}': rule #{index} references undefined class '{class}'")]
    UndefinedClass {
        /// Ruleset code
        code: String,
        /// Zero-based position of the rule in the table
        index: usize,
        /// Name of the missing class
        class: &'static str,
    },
}

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No embedded ruleset for the requested orthography
    #[error("orthography '{0}' not supported")]
    UnsupportedOrthography(String),

    /// An embedded or external ruleset failed validation
    #[error("ruleset error: {0}")]
    Ruleset(#[from] RulesetError),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;
