//! Context rule types
//!
//! A rule pairs a conjunction of [`Condition`]s with one [`Action`]. The set of
//! primitives is closed: identity of the current token, its position in the
//! word, and identity, facing character, class, current output or position of
//! a neighbour.
//!
//! ```text
//! Rule := graphemes × Condition* × Action
//!
//! Condition := At(Position)
//!            | Neighbor(Prev | Next | AfterNext, Test)
//!
//! Test := Exists | Is(set) | IsNot(set) | Edge(chars) | Class(class)
//!       | OutputEdge(chars) | At(Position)
//!
//! Action := Replace(text) | Append(text) | AppendPrev(text)
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Character classes a ruleset may define
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// Vowel letters
    Vowel,
    /// Consonant letters
    Consonant,
    /// Palatalised consonants
    Soft,
    /// Plain counterparts of the palatalised consonants
    Hard,
}

impl CharClass {
    pub(crate) const COUNT: usize = 4;

    pub(crate) fn index(self) -> usize {
        match self {
            CharClass::Vowel => 0,
            CharClass::Consonant => 1,
            CharClass::Soft => 2,
            CharClass::Hard => 3,
        }
    }

    /// Name as written in ruleset tables
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Vowel => "vowel",
            CharClass::Consonant => "consonant",
            CharClass::Soft => "soft",
            CharClass::Hard => "hard",
        }
    }
}

/// Position of a token within the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// First token (no predecessor)
    Start,
    /// Last token (no successor)
    End,
    /// Any token with a predecessor
    NotStart,
    /// Any token with a successor
    NotEnd,
}

/// How many matching rules apply to one token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resolution {
    /// Only the first matching rule in table order applies
    #[default]
    FirstMatch,
    /// Every matching rule applies, in table order
    AllMatches,
}

/// Which neighbour a test inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// The immediately preceding token
    Prev,
    /// The immediately following token
    Next,
    /// The token after the following one
    AfterNext,
}

impl Neighbor {
    /// Whether the facing character is the last one of the neighbour
    pub(crate) fn faces_back(self) -> bool {
        matches!(self, Neighbor::Prev)
    }
}

/// A test applied to an existing neighbour
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Test {
    /// Neighbour exists
    Exists,
    /// Neighbour source is one of the literals
    Is(Vec<String>),
    /// Neighbour source is none of the literals
    IsNot(Vec<String>),
    /// Facing source character is one of the literals
    Edge(SmallVec<[char; 4]>),
    /// Facing source character belongs to the class
    Class(CharClass),
    /// Facing character of the neighbour's current output is one of the literals
    OutputEdge(SmallVec<[char; 4]>),
    /// Neighbour sits at the given position
    At(Position),
}

/// One primitive predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The current token sits at the given position
    At(Position),
    /// A neighbour exists and passes the test
    Neighbor(Neighbor, Test),
}

/// What a matching rule does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace this token's output
    Replace(String),
    /// Append to this token's output
    Append(String),
    /// Append to the previous token's output
    AppendPrev(String),
}

/// A compiled context rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Source graphemes the rule is attached to
    pub graphemes: Vec<String>,
    /// Conjunction of predicates
    pub conditions: Vec<Condition>,
    /// Effect when all predicates hold
    pub action: Action,
}

impl Rule {
    /// Short description for diagnostics
    pub fn label(&self) -> String {
        let target = match &self.action {
            Action::Replace(text) => format!("-> {text}"),
            Action::Append(text) => format!("+= {text}"),
            Action::AppendPrev(text) => format!("prev += {text}"),
        };
        format!("{} {target}", self.graphemes.join("|"))
    }
}
