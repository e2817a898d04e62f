//! Validate command implementation

use anyhow::Result;
use clap::Args;
use geotranslit_core::ruleset::rule::Resolution;
use geotranslit_core::Ruleset;
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::FileReader;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the ruleset table to validate
    #[arg(short = 'r', long, value_name = "FILE", required = true)]
    pub ruleset: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating ruleset: {}", self.ruleset.display());

        let content = FileReader::read_text(&self.ruleset)?;
        let code = self
            .ruleset
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        match Ruleset::from_toml_str(&code, &content) {
            Ok(ruleset) => {
                println!("✓ Ruleset is valid!");
                println!("  Code: {}", ruleset.code());
                println!("  Name: {}", ruleset.name());
                println!("  Id: {}", ruleset.id());
                println!(
                    "  Resolution: {}",
                    match ruleset.resolution() {
                        Resolution::FirstMatch => "first-match",
                        Resolution::AllMatches => "all-matches",
                    }
                );
                println!(
                    "  Graphemes: {} (longest {})",
                    ruleset.graphemes().len(),
                    ruleset.graphemes().max_len()
                );
                println!("  Rules: {}", ruleset.rules().len());
                println!("  Lexicon entries: {}", ruleset.lexicon().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Ruleset is invalid!");
                println!("  Error: {e}");
                Err(CliError::InvalidRuleset(e.to_string()).into())
            }
        }
    }
}
