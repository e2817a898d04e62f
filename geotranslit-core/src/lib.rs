//! Rule-table driven transliteration of place names into Cyrillic
//!
//! One engine serves four Latin-script orthographies (Latvian, Lithuanian,
//! Polish and Estonian). Each orthography is a declarative [`Ruleset`]
//! compiled into the binary from a TOML table; the engine itself knows
//! nothing about any particular language.
//!
//! # Pipeline
//!
//! ```text
//! input ─▶ lexicon? ─hit─▶ literal
//!            │ miss
//!            ▼
//!        to_lowercase ─▶ segment ─▶ resolve ─▶ assemble ─▶ output
//! ```
//!
//! - **Segmenter**: greedy longest match against grapheme tables of up to
//!   four characters. Unmapped characters pass through unchanged.
//! - **Resolver**: one left-to-right pass applying ordered context rules
//!   (position, neighbour identity, class and current output).
//! - **Lexicon**: whole-phrase exceptions consulted first (Polish only).
//!
//! # Example
//!
//! ```rust
//! use geotranslit_core::{transcriptor, Orthography};
//!
//! let latvian = transcriptor(Orthography::Latvian).unwrap();
//! assert_eq!(latvian.transliterate("Liepāja"), "лиепая");
//!
//! let polish = transcriptor(Orthography::Polish).unwrap();
//! assert_eq!(polish.transliterate("Szczecin"), "щецин");
//! assert_eq!(polish.transliterate("Kraków"), "краков");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod lexicon;
pub mod orthography;
pub mod resolver;
pub mod ruleset;
pub mod segmenter;
pub mod token;
pub mod transcriptor;

pub use error::{Error, Result, RulesetError};
pub use lexicon::ExceptionLexicon;
pub use orthography::Orthography;
pub use resolver::resolve;
pub use ruleset::{available_rulesets, get_ruleset, Ruleset};
pub use segmenter::segment;
pub use token::{Token, TokenChain};
pub use transcriptor::{transcriptor, transliterate, RuleTranscriptor, Transcription, Transcriptor};
