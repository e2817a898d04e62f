//! Transcriptor façade
//!
//! Binds the segmenter, the resolver and one ruleset behind an
//! orthography-agnostic contract. Transcriptors hold no per-call state and are
//! shared freely across threads.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{Result, RulesetError};
use crate::orthography::Orthography;
use crate::resolver::resolve;
use crate::ruleset::{get_ruleset, Ruleset};
use crate::segmenter::segment;

/// Result of one transcription, ready for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcription {
    /// Orthography code (`lv`, `lt`, `pl`, `et`)
    pub orthography: &'static str,
    /// Stable orthography id
    pub id: u32,
    /// Input as given
    pub source: String,
    /// Cyrillic rendering
    pub text: String,
    /// Destination table label supplied by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Whether the exception lexicon produced the rendering
    pub lexicon: bool,
}

/// Orthography-agnostic transliteration contract
pub trait Transcriptor: Send + Sync {
    /// Source orthography
    fn orthography(&self) -> Orthography;

    /// Transliterate and report how the rendering was produced
    ///
    /// `destination` is the caller's bookkeeping label and is passed through
    /// untouched.
    fn transcribe(&self, text: &str, destination: Option<&str>) -> Transcription;

    /// Cyrillic rendering of `text`; never fails, empty in gives empty out
    fn transliterate(&self, text: &str) -> String {
        self.transcribe(text, None).text
    }

    /// Display name of the source orthography
    fn name(&self) -> &'static str {
        self.orthography().as_str()
    }

    /// Russian display name of the source orthography
    fn russian_name(&self) -> &'static str {
        self.orthography().russian_name()
    }

    /// Stable numeric id
    fn id(&self) -> u32 {
        self.orthography().id()
    }

    /// Short code
    fn code(&self) -> &'static str {
        self.orthography().code()
    }
}

/// Transcriptor driven by a declarative [`Ruleset`]
#[derive(Debug, Clone)]
pub struct RuleTranscriptor {
    orthography: Orthography,
    ruleset: Arc<Ruleset>,
}

impl RuleTranscriptor {
    /// Transcriptor over the embedded ruleset for `orthography`
    pub fn new(orthography: Orthography) -> Result<Self> {
        Self::with_ruleset(orthography, get_ruleset(orthography)?)
    }

    /// Transcriptor over a caller-built ruleset
    ///
    /// The ruleset must declare the code of `orthography`, otherwise results
    /// would report the wrong identity.
    pub fn with_ruleset(orthography: Orthography, ruleset: Arc<Ruleset>) -> Result<Self> {
        if ruleset.code() != orthography.code() {
            return Err(RulesetError::CodeMismatch {
                expected: orthography.code().to_string(),
                found: ruleset.code().to_string(),
            }
            .into());
        }
        Ok(Self {
            orthography,
            ruleset,
        })
    }

    /// The underlying ruleset
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Segment, resolve and assemble without consulting the lexicon
    pub fn apply_rules(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let folded = text.to_lowercase();
        let mut chain = segment(&self.ruleset, &folded);
        resolve(&self.ruleset, &mut chain);
        chain.assemble()
    }
}

impl Transcriptor for RuleTranscriptor {
    fn orthography(&self) -> Orthography {
        self.orthography
    }

    fn transcribe(&self, text: &str, destination: Option<&str>) -> Transcription {
        let (rendering, lexicon) = match self.ruleset.lexicon().lookup(text) {
            Some(literal) => {
                tracing::debug!(code = self.code(), source = text, "exception lexicon hit");
                (literal.to_string(), true)
            }
            None => (self.apply_rules(text), false),
        };

        Transcription {
            orthography: self.code(),
            id: self.id(),
            source: text.to_string(),
            text: rendering,
            destination: destination.map(str::to_string),
            lexicon,
        }
    }
}

/// Shared transcriptor for an orthography
pub fn transcriptor(orthography: Orthography) -> Result<Arc<dyn Transcriptor>> {
    Ok(Arc::new(RuleTranscriptor::new(orthography)?))
}

/// One-shot transliteration with the embedded ruleset
pub fn transliterate(orthography: Orthography, text: &str) -> Result<String> {
    Ok(RuleTranscriptor::new(orthography)?.transliterate(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_metadata() {
        let t = transcriptor(Orthography::Lithuanian).unwrap();
        assert_eq!(t.name(), "Lithuanian");
        assert_eq!(t.russian_name(), "Литовский");
        assert_eq!(t.id(), 2);
        assert_eq!(t.code(), "lt");
        assert_eq!(t.orthography(), Orthography::Lithuanian);
    }

    #[test]
    fn test_empty_input() {
        for orthography in Orthography::ALL {
            assert_eq!(transliterate(orthography, "").unwrap(), "");
        }
    }

    #[test]
    fn test_input_is_case_folded() {
        let t = RuleTranscriptor::new(Orthography::Latvian).unwrap();
        assert_eq!(t.transliterate("CĒSIS"), t.transliterate("cēsis"));
    }

    #[test]
    fn test_destination_is_passed_through() {
        let t = RuleTranscriptor::new(Orthography::Estonian).unwrap();
        let result = t.transcribe("Tartu", Some("geo_ee"));
        assert_eq!(result.destination.as_deref(), Some("geo_ee"));
        assert_eq!(result.source, "Tartu");
        assert_eq!(result.text, "тарту");
        assert!(!result.lexicon);

        assert_eq!(t.transcribe("Tartu", None).destination, None);
    }

    #[test]
    fn test_lexicon_hit_is_reported() {
        let t = RuleTranscriptor::new(Orthography::Polish).unwrap();
        let result = t.transcribe("Kraków", None);
        assert_eq!(result.text, "краков");
        assert!(result.lexicon);
        // The rules alone give a different rendering
        assert_eq!(t.apply_rules("Kraków"), "кракув");
    }

    #[test]
    fn test_serialized_shape() {
        let t = RuleTranscriptor::new(Orthography::Polish).unwrap();
        let value = serde_json::to_value(t.transcribe("Łódź", Some("geo_pl"))).unwrap();
        assert_eq!(value["orthography"], "pl");
        assert_eq!(value["id"], 3);
        assert_eq!(value["text"], "лодзь");
        assert_eq!(value["destination"], "geo_pl");
        assert_eq!(value["lexicon"], true);

        let value = serde_json::to_value(t.transcribe("Wrocław", None)).unwrap();
        assert!(value.get("destination").is_none());
    }

    #[test]
    fn test_custom_ruleset_must_match_orthography() {
        use crate::error::Error;

        let table = r#"
            [metadata]
            code = "et"
            name = "Estonian (reduced)"
            id = 4

            [classes]
            vowel = ["a"]
            consonant = ["t"]

            [graphemes]
            "a" = "а"
            "t" = "т"
        "#;
        let ruleset = Arc::new(Ruleset::from_toml_str("et", table).unwrap());

        let t = RuleTranscriptor::with_ruleset(Orthography::Estonian, Arc::clone(&ruleset)).unwrap();
        let result = t.transcribe("tata", None);
        assert_eq!(result.text, "тата");
        assert_eq!(result.orthography, "et");

        let err = RuleTranscriptor::with_ruleset(Orthography::Polish, ruleset).unwrap_err();
        assert_eq!(
            err,
            Error::Ruleset(RulesetError::CodeMismatch {
                expected: "pl".to_string(),
                found: "et".to_string(),
            })
        );
    }
}
