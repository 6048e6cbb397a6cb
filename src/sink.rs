//! Output sinks
//!
//! The read loop hands every chunk it reads to one sink. Which sink is
//! chosen once, when the stream is set up:
//!
//! - [`PassthroughSink`] writes bytes unchanged, for a real terminal
//! - [`MarkupSink`] assembles lines and writes them as markup, for a log view
//!
//! Each stream gets its own sink; sinks share no state.

use std::io::Write;

use tracing::debug;

use crate::assembler::LineAssembler;
use crate::config::OutputMode;
use crate::decode::Utf8Decoder;
use crate::error::Result;

/// Destination for one stream of captured output
pub trait OutputSink {
    /// Accept the next chunk of raw output, in stream order
    fn write_chunk(&mut self, chunk: &[u8]) -> Result<()>;

    /// Signal end of stream
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes raw bytes unmodified
#[derive(Debug)]
pub struct PassthroughSink<W: Write> {
    writer: W,
}

impl<W: Write> PassthroughSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for PassthroughSink<W> {
    fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        self.writer.write_all(chunk)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Converts output to markup lines for a log view
#[derive(Debug)]
pub struct MarkupSink<W: Write> {
    writer: W,
    decoder: Utf8Decoder,
    assembler: LineAssembler,
}

impl<W: Write> MarkupSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            decoder: Utf8Decoder::new(),
            assembler: LineAssembler::new(),
        }
    }

    /// The line assembler owned by this sink
    pub fn assembler(&self) -> &LineAssembler {
        &self.assembler
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, markup: &str) -> Result<()> {
        if !markup.is_empty() {
            self.writer.write_all(markup.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: Write> OutputSink for MarkupSink<W> {
    fn write_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        let text = self.decoder.decode(chunk);
        let markup = self.assembler.process(&text);
        self.emit(&markup)
    }

    fn finish(&mut self) -> Result<()> {
        let tail = self.decoder.finish();
        let mut markup = self.assembler.process(&tail);
        markup.push_str(&self.assembler.flush());
        self.emit(&markup)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Build the sink for `mode`
pub fn sink_for<W: Write + 'static>(mode: OutputMode, writer: W) -> Box<dyn OutputSink> {
    debug!("Selected {:?} output sink", mode);
    match mode {
        OutputMode::Passthrough => Box::new(PassthroughSink::new(writer)),
        OutputMode::Markup => Box::new(MarkupSink::new(writer)),
    }
}
