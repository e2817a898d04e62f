//! Token arena
//!
//! Tokens live in one `Vec` owned by a [`TokenChain`]; neighbour links are
//! plain indices into it, so a rule that rewrites the previous token's output
//! is an indexed write.

use std::borrow::Cow;
use std::ops::{Index, IndexMut, Range};

/// One segmented grapheme cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte range in the case-folded input
    pub span: Range<usize>,
    /// The matched grapheme cluster
    pub source: &'a str,
    /// Cyrillic rendering, default mapping until the resolver rewrites it
    pub output: Cow<'a, str>,
    /// Index of the preceding token
    pub prev: Option<usize>,
    /// Index of the following token
    pub next: Option<usize>,
}

/// Ordered, linked sequence of tokens for one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenChain<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenChain<'a> {
    /// Build a chain from tokens in sequence order and link neighbours
    pub fn from_tokens(mut tokens: Vec<Token<'a>>) -> Self {
        let len = tokens.len();
        for (index, token) in tokens.iter_mut().enumerate() {
            token.prev = index.checked_sub(1);
            token.next = (index + 1 < len).then_some(index + 1);
        }
        Self { tokens }
    }

    /// Number of tokens
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the chain is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token<'a>> {
        self.tokens.get(index)
    }

    /// Mutable token at `index`
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Token<'a>> {
        self.tokens.get_mut(index)
    }

    /// Tokens in sequence order
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }

    /// Concatenate outputs in sequence order
    pub fn assemble(&self) -> String {
        let capacity = self.tokens.iter().map(|t| t.output.len()).sum();
        let mut out = String::with_capacity(capacity);
        for token in &self.tokens {
            out.push_str(&token.output);
        }
        out
    }
}

impl<'a> Index<usize> for TokenChain<'a> {
    type Output = Token<'a>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl IndexMut<usize> for TokenChain<'_> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.tokens[index]
    }
}

impl<'c, 'a> IntoIterator for &'c TokenChain<'a> {
    type Item = &'c Token<'a>;
    type IntoIter = std::slice::Iter<'c, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(span: Range<usize>, source: &'static str, output: &'static str) -> Token<'static> {
        Token {
            span,
            source,
            output: Cow::Borrowed(output),
            prev: None,
            next: None,
        }
    }

    #[test]
    fn test_links_are_indices() {
        let chain = TokenChain::from_tokens(vec![
            token(0..1, "a", "а"),
            token(1..3, "ie", "ие"),
            token(3..4, "s", "с"),
        ]);

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.get(0).unwrap().prev, None);
        assert_eq!(chain.get(0).unwrap().next, Some(1));
        assert_eq!(chain.get(1).unwrap().prev, Some(0));
        assert_eq!(chain.get(1).unwrap().next, Some(2));
        assert_eq!(chain.get(2).unwrap().next, None);
    }

    #[test]
    fn test_assemble_concatenates_outputs() {
        let mut chain = TokenChain::from_tokens(vec![
            token(0..1, "p", "п"),
            token(1..4, "jū", "ю"),
        ]);
        chain.get_mut(0).unwrap().output.to_mut().push('ь');
        assert_eq!(chain.assemble(), "пью");
    }

    #[test]
    fn test_empty_chain() {
        let chain = TokenChain::from_tokens(Vec::new());
        assert!(chain.is_empty());
        assert_eq!(chain.assemble(), "");
    }
}
