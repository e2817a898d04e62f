//! Embedded ruleset loader
//!
//! The four orthography tables are compiled into the binary and built on
//! first access. The build result is cached as-is, so a broken table surfaces
//! as an error on every lookup instead of a panic.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result, RulesetError};
use crate::orthography::Orthography;

use super::Ruleset;

type RulesetMap = HashMap<Orthography, Arc<Ruleset>>;

/// Embedded ruleset tables
static EMBEDDED: OnceLock<std::result::Result<RulesetMap, RulesetError>> = OnceLock::new();

fn embedded_source(orthography: Orthography) -> &'static str {
    match orthography {
        Orthography::Latvian => include_str!("../../configs/orthographies/latvian.toml"),
        Orthography::Lithuanian => include_str!("../../configs/orthographies/lithuanian.toml"),
        Orthography::Polish => include_str!("../../configs/orthographies/polish.toml"),
        Orthography::Estonian => include_str!("../../configs/orthographies/estonian.toml"),
    }
}

fn load_embedded() -> std::result::Result<RulesetMap, RulesetError> {
    let mut map = HashMap::new();

    for orthography in Orthography::ALL {
        let ruleset = load_embedded_ruleset(orthography.code(), embedded_source(orthography))?;
        tracing::debug!(
            code = orthography.code(),
            graphemes = ruleset.graphemes().len(),
            rules = ruleset.rules().len(),
            "loaded embedded ruleset"
        );
        map.insert(orthography, Arc::new(ruleset));
    }

    Ok(map)
}

/// Parse a table and check it declares the code it is registered under
fn load_embedded_ruleset(code: &str, toml_str: &str) -> std::result::Result<Ruleset, RulesetError> {
    let ruleset = Ruleset::from_toml_str(code, toml_str)?;
    if ruleset.code() != code {
        return Err(RulesetError::CodeMismatch {
            expected: code.to_string(),
            found: ruleset.code().to_string(),
        });
    }
    Ok(ruleset)
}

/// Shared ruleset for an orthography
pub fn get_ruleset(orthography: Orthography) -> Result<Arc<Ruleset>> {
    let embedded = EMBEDDED.get_or_init(load_embedded).as_ref().map_err(|e| e.clone())?;

    embedded
        .get(&orthography)
        .cloned()
        .ok_or_else(|| Error::UnsupportedOrthography(orthography.code().to_string()))
}

/// Orthographies with an embedded ruleset, ordered by id
pub fn available_rulesets() -> Vec<Orthography> {
    Orthography::ALL.to_vec()
}
