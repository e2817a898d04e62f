//! Runtime lookup tables
//!
//! All tables are allocation-free during lookup.

use std::collections::{HashMap, HashSet};

use super::rule::CharClass;

/// Longest grapheme a table may hold, in characters
pub const MAX_GRAPHEME_LEN: usize = 4;

/// Fast character membership set
#[derive(Debug, Clone)]
pub struct CharSet {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII letters (most diacritics)
    non_ascii: HashSet<char>,
}

impl CharSet {
    /// Create from a list of characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

/// Character classes of one ruleset
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    sets: [Option<CharSet>; CharClass::COUNT],
}

impl ClassTable {
    /// Register the members of a class
    pub fn define(&mut self, class: CharClass, chars: impl IntoIterator<Item = char>) {
        self.sets[class.index()] = Some(CharSet::new(chars));
    }

    /// Whether the ruleset defines this class at all
    pub fn is_defined(&self, class: CharClass) -> bool {
        self.sets[class.index()].is_some()
    }

    /// Whether `ch` belongs to `class`; undefined classes contain nothing
    #[inline]
    pub fn contains(&self, class: CharClass, ch: char) -> bool {
        self.sets[class.index()]
            .as_ref()
            .is_some_and(|set| set.contains(ch))
    }
}

/// Default grapheme mappings bucketed by key length in characters
#[derive(Debug, Clone, Default)]
pub struct GraphemeTable {
    /// `by_len[n - 1]` holds the keys of `n` characters
    by_len: Vec<HashMap<String, String>>,
}

impl GraphemeTable {
    /// Insert a mapping; the caller guarantees `1 <= len <= MAX_GRAPHEME_LEN`
    pub fn insert(&mut self, key: String, output: String) {
        let len = key.chars().count();
        if self.by_len.len() < len {
            self.by_len.resize_with(len, HashMap::new);
        }
        self.by_len[len - 1].insert(key, output);
    }

    /// Length of the longest key, in characters
    #[inline]
    pub fn max_len(&self) -> usize {
        self.by_len.len()
    }

    /// Look up a key of exactly `len` characters
    #[inline]
    pub fn get(&self, len: usize, key: &str) -> Option<&str> {
        self.by_len
            .get(len.checked_sub(1)?)
            .and_then(|bucket| bucket.get(key))
            .map(String::as_str)
    }

    /// Default output for any key
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key.chars().count(), key)
    }

    /// Number of keys across all lengths
    pub fn len(&self) -> usize {
        self.by_len.iter().map(HashMap::len).sum()
    }

    /// Whether the table has no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
