//! Property-based tests for segmentation and resolution
//!
//! Inputs are drawn from the letters the tables know plus characters they do
//! not (digits, punctuation, capitals, other scripts), so that every length of
//! grapheme key is exercised next to pass-through tokens.

use geotranslit_core::{get_ruleset, resolve, segment, transcriptor, Orthography};
use proptest::prelude::*;

const ALPHABET: &[char] = &[
    'a', 'ą', 'ā', 'ä', 'b', 'c', 'č', 'ć', 'd', 'e', 'ē', 'ė', 'ę', 'g', 'ģ', 'h', 'i', 'ī', 'į',
    'j', 'k', 'ķ', 'l', 'ļ', 'ł', 'n', 'ņ', 'ń', 'o', 'ó', 'õ', 'ö', 'p', 'r', 's', 'ś', 'š', 't',
    'u', 'ū', 'ü', 'w', 'y', 'z', 'ź', 'ż', 'ž', 'S', 'Ä', ' ', '-', '7', '.', 'ß', 'я',
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

fn orthography_strategy() -> impl Strategy<Value = Orthography> {
    prop::sample::select(Orthography::ALL.to_vec())
}

proptest! {
    #[test]
    fn spans_cover_folded_input(orthography in orthography_strategy(), text in text_strategy()) {
        let ruleset = get_ruleset(orthography).unwrap();
        let folded = text.to_lowercase();
        let chain = segment(&ruleset, &folded);

        let mut expected_start = 0;
        for token in &chain {
            prop_assert_eq!(token.span.start, expected_start);
            prop_assert!(token.span.end > token.span.start);
            prop_assert_eq!(&folded[token.span.clone()], token.source);
            expected_start = token.span.end;
        }
        prop_assert_eq!(expected_start, folded.len());

        let total: usize = chain.iter().map(|t| t.span.len()).sum();
        prop_assert_eq!(total, folded.len());
    }

    #[test]
    fn graphemes_respect_table_depth(orthography in orthography_strategy(), text in text_strategy()) {
        let ruleset = get_ruleset(orthography).unwrap();
        let folded = text.to_lowercase();
        let chain = segment(&ruleset, &folded);
        let max_len = ruleset.graphemes().max_len();

        for token in &chain {
            let len = token.source.chars().count();
            prop_assert!(len >= 1 && len <= max_len);
            // Multi-character tokens always come from the table
            if len > 1 {
                prop_assert!(ruleset.graphemes().lookup(token.source).is_some());
            }
        }
    }

    #[test]
    fn links_follow_sequence_order(orthography in orthography_strategy(), text in text_strategy()) {
        let ruleset = get_ruleset(orthography).unwrap();
        let folded = text.to_lowercase();
        let chain = segment(&ruleset, &folded);

        for (index, token) in chain.iter().enumerate() {
            prop_assert_eq!(token.prev, index.checked_sub(1));
            prop_assert_eq!(token.next, (index + 1 < chain.len()).then_some(index + 1));
        }
    }

    #[test]
    fn transliteration_is_deterministic(orthography in orthography_strategy(), text in text_strategy()) {
        let t = transcriptor(orthography).unwrap();
        prop_assert_eq!(t.transliterate(&text), t.transliterate(&text));
    }

    #[test]
    fn unmapped_tokens_pass_through(orthography in orthography_strategy(), text in text_strategy()) {
        let ruleset = get_ruleset(orthography).unwrap();
        let folded = text.to_lowercase();
        let chain = segment(&ruleset, &folded);

        for token in &chain {
            if ruleset.graphemes().lookup(token.source).is_none() {
                prop_assert_eq!(&*token.output, token.source);
            }
        }
    }

    #[test]
    fn tokens_without_rules_keep_default(text in text_strategy()) {
        // Estonian rules never touch a neighbour's output
        let ruleset = get_ruleset(Orthography::Estonian).unwrap();
        let folded = text.to_lowercase();
        let mut chain = segment(&ruleset, &folded);
        resolve(&ruleset, &mut chain);

        for token in &chain {
            if ruleset.rules_for(token.source).next().is_none() {
                let default = ruleset.graphemes().lookup(token.source).unwrap_or(token.source);
                prop_assert_eq!(&*token.output, default);
            }
        }
    }
}
