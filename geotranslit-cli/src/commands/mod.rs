//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use geotranslit_core::{available_rulesets, get_ruleset};

use crate::output::OutputFormat;

pub mod transliterate;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transliterate place names into Russian Cyrillic
    Transliterate(transliterate::TransliterateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a ruleset table file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded orthographies
    Orthographies,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Transliterate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Orthographies => {
                println!("Available orthographies:");
                for orthography in available_rulesets() {
                    let ruleset = get_ruleset(orthography)
                        .with_context(|| format!("Failed to load the {orthography} ruleset"))?;
                    println!(
                        "  {:<4}{:<4}{:<12}{:<12}{} rules",
                        ruleset.code(),
                        ruleset.id(),
                        ruleset.name(),
                        orthography.russian_name(),
                        ruleset.rules().len()
                    );
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        println!(
                            "  {:<10}{}",
                            value.get_name(),
                            value.get_help().map(ToString::to_string).unwrap_or_default()
                        );
                    }
                }
            }
        }
        Ok(())
    }
}
