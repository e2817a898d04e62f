//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use geotranslit_core::Transcription;
use std::io::Write;

/// Markdown formatter - outputs a source/rendering table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    row_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            row_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| # | Source | Cyrillic |")?;
        writeln!(self.writer, "|---|--------|----------|")?;
        Ok(())
    }
}

/// Pipes would split the cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_transcription(&mut self, transcription: &Transcription) -> Result<()> {
        if self.row_count == 0 {
            self.write_header()?;
        }
        self.row_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            self.row_count,
            escape_cell(&transcription.source),
            escape_cell(&transcription.text)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.row_count == 0 {
            self.write_header()?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total names: {}*", self.row_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
