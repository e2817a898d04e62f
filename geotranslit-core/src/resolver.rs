//! Context resolution
//!
//! One left-to-right pass over the token chain. Each token is checked against
//! the rules attached to its grapheme, in table order. Because `append_prev`
//! writes into the previous token, the pass order is observable: token `k-1`
//! has already been resolved when token `k` runs.

use std::borrow::Cow;

use crate::ruleset::rule::{Action, Condition, Neighbor, Position, Resolution, Test};
use crate::ruleset::Ruleset;
use crate::token::{Token, TokenChain};

/// Rewrite token outputs in place according to the ruleset's context rules
pub fn resolve<'a>(ruleset: &'a Ruleset, chain: &mut TokenChain<'a>) {
    let first_match = ruleset.resolution() == Resolution::FirstMatch;

    for index in 0..chain.len() {
        let source = chain[index].source;

        for rule in ruleset.rules_for(source) {
            let matched = rule
                .conditions
                .iter()
                .all(|condition| holds(ruleset, chain, index, condition));
            if !matched {
                continue;
            }

            apply(chain, index, &rule.action);
            tracing::trace!(
                code = ruleset.code(),
                token = source,
                index,
                rule = %rule.label(),
                "applied rule"
            );

            if first_match {
                break;
            }
        }
    }
}

fn holds(ruleset: &Ruleset, chain: &TokenChain<'_>, index: usize, condition: &Condition) -> bool {
    match condition {
        Condition::At(position) => at(&chain[index], *position),
        Condition::Neighbor(neighbor, test) => match neighbor_index(chain, index, *neighbor) {
            Some(other) => passes(ruleset, &chain[other], *neighbor, test),
            None => false,
        },
    }
}

fn neighbor_index(chain: &TokenChain<'_>, index: usize, neighbor: Neighbor) -> Option<usize> {
    let token = &chain[index];
    match neighbor {
        Neighbor::Prev => token.prev,
        Neighbor::Next => token.next,
        Neighbor::AfterNext => token.next.and_then(|next| chain[next].next),
    }
}

fn at(token: &Token<'_>, position: Position) -> bool {
    match position {
        Position::Start => token.prev.is_none(),
        Position::End => token.next.is_none(),
        Position::NotStart => token.prev.is_some(),
        Position::NotEnd => token.next.is_some(),
    }
}

/// Character of `text` that faces the current token
fn facing(text: &str, neighbor: Neighbor) -> Option<char> {
    if neighbor.faces_back() {
        text.chars().next_back()
    } else {
        text.chars().next()
    }
}

fn passes(ruleset: &Ruleset, token: &Token<'_>, neighbor: Neighbor, test: &Test) -> bool {
    match test {
        Test::Exists => true,
        Test::Is(set) => set.iter().any(|s| s == token.source),
        Test::IsNot(set) => !set.iter().any(|s| s == token.source),
        Test::Edge(chars) => facing(token.source, neighbor).is_some_and(|ch| chars.contains(&ch)),
        Test::Class(class) => {
            facing(token.source, neighbor).is_some_and(|ch| ruleset.classes().contains(*class, ch))
        }
        Test::OutputEdge(chars) => {
            facing(&token.output, neighbor).is_some_and(|ch| chars.contains(&ch))
        }
        Test::At(position) => at(token, *position),
    }
}

fn apply<'a>(chain: &mut TokenChain<'a>, index: usize, action: &'a Action) {
    match action {
        Action::Replace(text) => chain[index].output = Cow::Borrowed(text.as_str()),
        Action::Append(text) => chain[index].output.to_mut().push_str(text),
        Action::AppendPrev(text) => {
            if let Some(prev) = chain[index].prev {
                chain[prev].output.to_mut().push_str(text);
            }
        }
    }
}
