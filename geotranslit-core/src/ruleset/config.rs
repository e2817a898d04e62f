//! Configuration structures
//!
//! This module defines the TOML schema for ruleset tables. The structures are
//! deliberately flat so a table reads like the printed transliteration
//! instructions it encodes; [`Ruleset::from_config`](super::Ruleset::from_config)
//! turns them into the typed runtime representation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::rule::{CharClass, Position, Resolution};

/// Root ruleset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesetConfig {
    /// Identity of the orthography
    pub metadata: Metadata,
    /// Character classes
    pub classes: Classes,
    /// Default rendering per grapheme
    pub graphemes: HashMap<String, String>,
    /// Whole-phrase exceptions
    #[serde(default)]
    pub lexicon: HashMap<String, String>,
    /// Context rules in precedence order
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Ruleset metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Short code
    pub code: String,
    /// Display name
    pub name: String,
    /// Stable numeric id
    pub id: u32,
    /// Rule resolution mode
    #[serde(default)]
    pub resolution: Resolution,
}

/// Character classes used by neighbour predicates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classes {
    /// Vowel letters
    pub vowel: Vec<char>,
    /// Consonant letters
    pub consonant: Vec<char>,
    /// Palatalised consonants
    #[serde(default)]
    pub soft: Option<Vec<char>>,
    /// Plain counterparts of the soft consonants
    #[serde(default)]
    pub hard: Option<Vec<char>>,
}

/// One context rule as written in the table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Graphemes the rule is attached to
    pub graphemes: Vec<String>,
    /// Position of the token itself
    #[serde(default)]
    pub position: Option<Position>,
    /// Constraints on the preceding token
    #[serde(default)]
    pub prev: Option<ProbeConfig>,
    /// Constraints on the following token
    #[serde(default)]
    pub next: Option<ProbeConfig>,
    /// Constraints on the token after the following one
    #[serde(default)]
    pub after_next: Option<ProbeConfig>,
    /// Replacement output
    #[serde(default)]
    pub output: Option<String>,
    /// Text appended to this token
    #[serde(default)]
    pub append: Option<String>,
    /// Text appended to the previous token
    #[serde(default)]
    pub append_prev: Option<String>,
}

/// Constraints on a neighbouring token; a present probe requires the neighbour
/// to exist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    /// Source grapheme is one of these
    #[serde(default)]
    pub is: Vec<String>,
    /// Source grapheme is none of these
    #[serde(default)]
    pub is_not: Vec<String>,
    /// Facing source character is one of these
    #[serde(default)]
    pub edge: Vec<char>,
    /// Facing source character belongs to this class
    #[serde(default)]
    pub class: Option<CharClass>,
    /// Facing character of the current output is one of these
    #[serde(default)]
    pub output_edge: Vec<char>,
    /// Position of the neighbour
    #[serde(default)]
    pub position: Option<Position>,
}
