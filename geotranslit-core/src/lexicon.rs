//! Whole-phrase exception lexicon
//!
//! Some names carry a fixed traditional Cyrillic spelling that cannot be
//! derived letter by letter (`Kraków` → `краков`, `Śląsk` → `силезия`). The
//! lexicon is consulted before segmentation; a hit bypasses the engine.

use std::collections::HashMap;

/// Exact, case-folded phrase → literal rendering map
#[derive(Debug, Clone, Default)]
pub struct ExceptionLexicon {
    entries: HashMap<String, String>,
}

impl ExceptionLexicon {
    /// Build from raw entries; keys are trimmed and case-folded
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(phrase, rendering)| (fold(&phrase), rendering))
            .collect();
        Self { entries }
    }

    /// Literal rendering for `text`, compared after trimming and case folding
    pub fn lookup(&self, text: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(&fold(text)).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> ExceptionLexicon {
        ExceptionLexicon::new([
            ("kraków".to_string(), "краков".to_string()),
            ("augustowski Kanał".to_string(), "августовский канал".to_string()),
        ])
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let lexicon = lexicon();
        assert_eq!(lexicon.lookup("Kraków"), Some("краков"));
        assert_eq!(lexicon.lookup("  KRAKÓW\t"), Some("краков"));
    }

    #[test]
    fn test_keys_are_folded_on_build() {
        let lexicon = lexicon();
        assert_eq!(
            lexicon.lookup("Augustowski Kanał"),
            Some("августовский канал")
        );
    }

    #[test]
    fn test_partial_phrase_misses() {
        let lexicon = lexicon();
        assert_eq!(lexicon.lookup("krakó"), None);
        assert_eq!(lexicon.lookup("kraków stare"), None);
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = ExceptionLexicon::default();
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.lookup(""), None);
    }
}
