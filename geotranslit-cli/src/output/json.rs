//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use geotranslit_core::Transcription;
use std::io::Write;

/// JSON formatter - collects transcriptions and writes one array on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Transcription>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_transcription(&mut self, transcription: &Transcription) -> Result<()> {
        self.records.push(transcription.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
