//! Name-list pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to name-list paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        let before = files.len();
        for entry in paths {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            log::warn!("Pattern matched no name lists: {pattern}");
        }
    }

    if files.is_empty() {
        anyhow::bail!("No name lists found matching: {}", patterns.join(", "));
    }

    files.sort();
    files.dedup();

    Ok(files)
}
