//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use geotranslit_core::Transcription;
use std::io::Write;

/// Plain text formatter - one rendering per line, in input order
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_transcription(&mut self, transcription: &Transcription) -> Result<()> {
        writeln!(self.writer, "{}", transcription.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{sample, SharedBuffer};

    #[test]
    fn test_one_line_per_name() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        formatter
            .format_transcription(&sample("Szczecin", "щецин"))
            .unwrap();
        formatter
            .format_transcription(&sample("Toruń", "торунь"))
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(buffer.contents(), "щецин\nторунь\n");
    }

    #[test]
    fn test_empty_rendering_keeps_its_line() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());
        formatter.format_transcription(&sample("", "")).unwrap();
        formatter.finish().unwrap();

        assert_eq!(buffer.contents(), "\n");
    }
}
