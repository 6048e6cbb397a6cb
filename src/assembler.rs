//! Line assembly
//!
//! Reinterprets a cursor-addressed character stream as an append-only list
//! of lines. Only three controls act on the line itself:
//!
//! - CR LF (inside one chunk) and LF end the line
//! - CR alone discards the line so far (progress bars redraw this way)
//! - BS removes the last buffered character
//!
//! Each completed line is converted to markup before it is returned. The
//! unfinished line is kept across calls, so chunks for one stream must be
//! fed in order, and each stream needs its own assembler.

use tracing::debug;

use crate::markup::line_to_markup;

const CR: char = '\r';
const LF: char = '\n';
const BS: char = '\x08';

/// Streaming line assembler for one output stream
#[derive(Debug, Clone, Default)]
pub struct LineAssembler {
    /// Raw, unconverted content of the current line
    current_line: String,
}

impl LineAssembler {
    /// Create an assembler with an empty line buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw content buffered for the unfinished line
    pub fn pending(&self) -> &str {
        &self.current_line
    }

    /// Check if there is unfinished content
    pub fn has_pending(&self) -> bool {
        !self.current_line.is_empty()
    }

    /// Process one chunk of raw terminal output.
    ///
    /// Returns every line completed by this chunk, converted to markup and
    /// each followed by `\n`. Returns an empty string if no line ended.
    pub fn process(&mut self, chunk: &str) -> String {
        let mut completed: Vec<String> = Vec::new();
        let mut chars = chunk.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                CR => {
                    if chars.peek() == Some(&LF) {
                        chars.next();
                        completed.push(self.take_line());
                    } else {
                        self.current_line.clear();
                    }
                }
                LF => completed.push(self.take_line()),
                BS => {
                    self.current_line.pop();
                }
                _ => self.current_line.push(c),
            }
        }

        let mut out = String::new();
        for line in &completed {
            out.push_str(&line_to_markup(line));
            out.push(LF);
        }
        out
    }

    /// Emit the unfinished line, if any, for end of stream.
    ///
    /// Returns the converted line followed by `\n`, or an empty string.
    pub fn flush(&mut self) -> String {
        if self.current_line.is_empty() {
            return String::new();
        }

        debug!("Flushing {} buffered bytes", self.current_line.len());
        let line = self.take_line();
        let mut out = line_to_markup(&line);
        out.push(LF);
        out
    }

    /// Discard the unfinished line without emitting it
    pub fn reset(&mut self) {
        if !self.current_line.is_empty() {
            debug!("Discarding {} buffered bytes", self.current_line.len());
        }
        self.current_line.clear();
    }

    fn take_line(&mut self) -> String {
        std::mem::take(&mut self.current_line)
    }
}
