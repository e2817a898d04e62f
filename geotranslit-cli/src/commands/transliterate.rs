//! Transliterate command implementation

use anyhow::{Context, Result};
use clap::Args;
use geotranslit_core::{Orthography, RuleTranscriptor, Transcription, Transcriptor};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::OutputFormat;

/// Arguments for the transliterate command
#[derive(Debug, Args)]
pub struct TransliterateArgs {
    /// Source orthography: code (lv, lt, pl, et), English name or numeric id
    #[arg(short = 'l', long, value_name = "ORTHOGRAPHY", value_parser = parse_orthography)]
    pub orthography: Orthography,

    /// Names to transliterate
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Name-list files or patterns (supports glob), one name per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Destination-table label attached to every result
    #[arg(short, long, value_name = "TABLE")]
    pub destination: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Transliterate names across the rayon thread pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Clap value parser for `--orthography`
pub fn parse_orthography(value: &str) -> Result<Orthography, CliError> {
    value
        .parse()
        .map_err(|_| CliError::UnknownOrthography(value.to_string()))
}

impl TransliterateArgs {
    /// Execute the transliterate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let names = self.collect_names()?;
        log::info!(
            "Transliterating {} names from {}",
            names.len(),
            self.orthography
        );

        let transcriptor = RuleTranscriptor::new(self.orthography)
            .with_context(|| format!("Failed to load the {} ruleset", self.orthography))?;
        let destination = self
            .destination
            .as_deref()
            .or_else(|| config.destination_for(self.orthography));
        if let Some(table) = destination {
            log::debug!("Destination table: {table}");
        }

        let results = transcribe_all(&transcriptor, &names, destination, self.parallel);

        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };
        self.write_results(format, config.output.pretty_json, &results)
    }

    /// Names from arguments first, then from each name list in path order
    fn collect_names(&self) -> Result<Vec<String>> {
        let mut names = self.names.clone();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                let listed = FileReader::read_names(&path)?;
                log::debug!("Read {} names from {}", listed.len(), path.display());
                names.extend(listed);
            }
        }

        if names.is_empty() {
            return Err(CliError::NoInput.into());
        }
        Ok(names)
    }

    fn write_results(
        &self,
        format: OutputFormat,
        pretty_json: bool,
        results: &[Transcription],
    ) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let mut formatter = format.formatter(writer, pretty_json);
        for transcription in results {
            formatter.format_transcription(transcription)?;
        }
        formatter.finish()
    }
}

/// Transcribe every name, preserving input order
fn transcribe_all(
    transcriptor: &RuleTranscriptor,
    names: &[String],
    destination: Option<&str>,
    parallel: bool,
) -> Vec<Transcription> {
    if parallel {
        names
            .par_iter()
            .map(|name| transcriptor.transcribe(name, destination))
            .collect()
    } else {
        names
            .iter()
            .map(|name| transcriptor.transcribe(name, destination))
            .collect()
    }
}

/// Initialize logging based on verbosity level
fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
