//! Reading name lists from disk

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads UTF-8 files and name lists
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read one name per line, trimming whitespace and skipping blank lines
    pub fn read_names(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(split_names(&content))
    }
}

fn split_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
