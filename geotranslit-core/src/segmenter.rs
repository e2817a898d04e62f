//! Greedy longest-match segmentation
//!
//! At every character position the segmenter tries the ruleset's longest
//! grapheme length first and walks down to single characters. The first hit
//! wins and there is no backtracking. A character no table knows becomes a
//! one-character token whose output is the character itself.

use std::borrow::Cow;

use crate::ruleset::Ruleset;
use crate::token::{Token, TokenChain};

/// Split case-folded `text` into a linked token chain
///
/// The caller folds the input with [`str::to_lowercase`] first; table keys
/// are lower-case, so unfolded capitals simply pass through.
pub fn segment<'a>(ruleset: &'a Ruleset, text: &'a str) -> TokenChain<'a> {
    // Byte offset of every char boundary, including the end
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;

    let table = ruleset.graphemes();
    let max_len = table.max_len();
    let mut tokens = Vec::with_capacity(char_count);

    let mut pos = 0;
    while pos < char_count {
        let longest = max_len.min(char_count - pos);

        let matched = (1..=longest).rev().find_map(|len| {
            let key = &text[bounds[pos]..bounds[pos + len]];
            table.get(len, key).map(|output| (len, output))
        });

        let (len, output) = match matched {
            Some((len, output)) => (len, Cow::Borrowed(output)),
            None => (1, Cow::Borrowed(&text[bounds[pos]..bounds[pos + 1]])),
        };

        let span = bounds[pos]..bounds[pos + len];
        tokens.push(Token {
            source: &text[span.clone()],
            span,
            output,
            prev: None,
            next: None,
        });
        pos += len;
    }

    TokenChain::from_tokens(tokens)
}
