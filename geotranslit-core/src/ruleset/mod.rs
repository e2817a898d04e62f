//! Rulesets: one declarative configuration per orthography
//!
//! A [`Ruleset`] bundles the default grapheme mappings, the character classes,
//! the ordered context rules and, for Polish, the exception lexicon. Rulesets
//! are built once from TOML tables and then shared read-only.

pub mod config;
pub(crate) mod loader;
pub mod rule;
pub mod tables;

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::error::RulesetError;
use crate::lexicon::ExceptionLexicon;

use config::{ProbeConfig, RuleConfig, RulesetConfig};
use rule::{Action, CharClass, Condition, Neighbor, Resolution, Rule, Test};
use tables::{ClassTable, GraphemeTable, MAX_GRAPHEME_LEN};

pub use loader::{available_rulesets, get_ruleset};

/// Compiled, immutable ruleset
#[derive(Debug, Clone)]
pub struct Ruleset {
    code: String,
    name: String,
    id: u32,
    resolution: Resolution,

    graphemes: GraphemeTable,
    classes: ClassTable,
    rules: Vec<Rule>,
    /// Rule indices per source grapheme, in table order
    rule_index: HashMap<String, SmallVec<[usize; 4]>>,
    lexicon: ExceptionLexicon,
}

impl Ruleset {
    /// Parse and validate a TOML table document
    pub fn from_toml_str(code: &str, toml_str: &str) -> Result<Self, RulesetError> {
        let config: RulesetConfig = toml::from_str(toml_str).map_err(|e| RulesetError::Parse {
            code: code.to_string(),
            message: e.to_string(),
        })?;
        Self::from_config(config)
    }

    /// Create from configuration
    pub fn from_config(config: RulesetConfig) -> Result<Self, RulesetError> {
        let code = config.metadata.code;

        // Build grapheme table
        let mut graphemes = GraphemeTable::default();
        for (key, output) in config.graphemes {
            validate_key(&code, &key)?;
            graphemes.insert(key, output);
        }

        // Build class table
        let mut classes = ClassTable::default();
        classes.define(CharClass::Vowel, config.classes.vowel);
        classes.define(CharClass::Consonant, config.classes.consonant);
        if let Some(soft) = config.classes.soft {
            classes.define(CharClass::Soft, soft);
        }
        if let Some(hard) = config.classes.hard {
            classes.define(CharClass::Hard, hard);
        }

        // Compile rules in table order
        let mut rules = Vec::with_capacity(config.rules.len());
        let mut rule_index: HashMap<String, SmallVec<[usize; 4]>> = HashMap::new();
        for (index, rule_config) in config.rules.into_iter().enumerate() {
            let rule = compile_rule(&code, index, rule_config, &classes)?;
            for grapheme in &rule.graphemes {
                rule_index.entry(grapheme.clone()).or_default().push(index);
            }
            rules.push(rule);
        }

        let lexicon = ExceptionLexicon::new(config.lexicon);

        Ok(Self {
            code,
            name: config.metadata.name,
            id: config.metadata.id,
            resolution: config.metadata.resolution,
            graphemes,
            classes,
            rules,
            rule_index,
            lexicon,
        })
    }

    /// Short code (`lv`, `lt`, `pl`, `et`)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name of the source orthography
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable numeric identifier
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether one or every matching rule applies per token
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Default grapheme mappings
    pub fn graphemes(&self) -> &GraphemeTable {
        &self.graphemes
    }

    /// Character classes
    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    /// All rules in table order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules attached to `grapheme`, in table order
    pub fn rules_for<'r>(&'r self, grapheme: &str) -> impl Iterator<Item = &'r Rule> + 'r {
        self.rule_index
            .get(grapheme)
            .into_iter()
            .flat_map(move |indices| indices.iter().map(move |&i| &self.rules[i]))
    }

    /// Whole-phrase exceptions (empty for most orthographies)
    pub fn lexicon(&self) -> &ExceptionLexicon {
        &self.lexicon
    }
}

fn validate_key(code: &str, key: &str) -> Result<(), RulesetError> {
    let invalid = |reason| RulesetError::InvalidGrapheme {
        code: code.to_string(),
        key: key.to_string(),
        reason,
    };

    if key.is_empty() {
        return Err(invalid("keys must not be empty"));
    }
    if key.chars().count() > MAX_GRAPHEME_LEN {
        return Err(invalid("keys are limited to 4 characters"));
    }
    if key.to_lowercase() != key {
        return Err(invalid("keys must be lower-case"));
    }
    Ok(())
}

fn compile_rule(
    code: &str,
    index: usize,
    config: RuleConfig,
    classes: &ClassTable,
) -> Result<Rule, RulesetError> {
    let invalid = |reason: &str| RulesetError::InvalidRule {
        code: code.to_string(),
        index,
        reason: reason.to_string(),
    };

    if config.graphemes.is_empty() {
        return Err(invalid("no graphemes"));
    }
    if config.graphemes.iter().any(String::is_empty) {
        return Err(invalid("empty grapheme"));
    }

    let action = match (config.output, config.append, config.append_prev) {
        (Some(text), None, None) => Action::Replace(text),
        (None, Some(text), None) => Action::Append(text),
        (None, None, Some(text)) => Action::AppendPrev(text),
        (None, None, None) => return Err(invalid("no action")),
        _ => return Err(invalid("more than one action")),
    };

    let mut conditions = Vec::new();
    if let Some(position) = config.position {
        conditions.push(Condition::At(position));
    }

    let probes = [
        (Neighbor::Prev, config.prev),
        (Neighbor::Next, config.next),
        (Neighbor::AfterNext, config.after_next),
    ];
    for (neighbor, probe) in probes {
        if let Some(probe) = probe {
            for test in compile_probe(code, index, probe, classes)? {
                conditions.push(Condition::Neighbor(neighbor, test));
            }
        }
    }

    Ok(Rule {
        graphemes: config.graphemes,
        conditions,
        action,
    })
}

fn compile_probe(
    code: &str,
    index: usize,
    probe: ProbeConfig,
    classes: &ClassTable,
) -> Result<Vec<Test>, RulesetError> {
    let mut tests = Vec::new();

    if !probe.is.is_empty() {
        tests.push(Test::Is(probe.is));
    }
    if !probe.is_not.is_empty() {
        tests.push(Test::IsNot(probe.is_not));
    }
    if !probe.edge.is_empty() {
        tests.push(Test::Edge(probe.edge.into()));
    }
    if let Some(class) = probe.class {
        if !classes.is_defined(class) {
            return Err(RulesetError::UndefinedClass {
                code: code.to_string(),
                index,
                class: class.name(),
            });
        }
        tests.push(Test::Class(class));
    }
    if !probe.output_edge.is_empty() {
        tests.push(Test::OutputEdge(probe.output_edge.into()));
    }
    if let Some(position) = probe.position {
        tests.push(Test::At(position));
    }

    // A bare probe still demands the neighbour
    if tests.is_empty() {
        tests.push(Test::Exists);
    }
    Ok(tests)
}
