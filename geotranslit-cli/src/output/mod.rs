//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use geotranslit_core::Transcription;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single transcription
    fn format_transcription(&mut self, transcription: &Transcription) -> Result<()>;

    /// Finalize output (e.g., emit the collected JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One Cyrillic rendering per line
    Text,
    /// JSON array of transcription records
    Json,
    /// Markdown table of source and rendering
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as it appears in configuration files
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// Build the formatter for this format over `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}
