//! Streaming UTF-8 decoding
//!
//! A PTY read can end in the middle of a multi-byte character. The decoder
//! holds the incomplete tail until the next chunk arrives. Malformed input
//! becomes U+FFFD.

use tracing::warn;

/// Replacement for undecodable input
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// UTF-8 decoder state
#[derive(Debug, Clone, Default)]
pub struct Utf8Decoder {
    /// Bytes accumulated for current character
    buffer: [u8; 4],
    /// Number of bytes in buffer
    len: usize,
    /// Expected total bytes for current character
    expected: usize,
}

/// Result of feeding a byte to the decoder
#[derive(Debug, Clone, PartialEq)]
pub enum Utf8Result {
    /// Need more bytes
    Pending,
    /// Successfully decoded a character
    Char(char),
    /// Invalid sequence
    Invalid,
}

impl Utf8Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the decoder state
    pub fn reset(&mut self) {
        self.len = 0;
        self.expected = 0;
    }

    /// Check if decoder is in the middle of a sequence
    pub fn is_pending(&self) -> bool {
        self.len > 0
    }

    /// Decode a chunk of bytes.
    ///
    /// Returns the characters completed by this chunk. An incomplete
    /// trailing sequence is kept for the next call.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len());
        let mut invalid = 0usize;

        for &byte in bytes {
            let interrupts = self.is_pending() && !is_continuation(byte);
            let result = self.feed(byte);
            let replaced = push_result(&mut out, result);
            invalid += replaced as usize;

            // The byte that cut the sequence short starts over on its own
            if replaced && interrupts {
                let result = self.feed(byte);
                invalid += push_result(&mut out, result) as usize;
            }
        }

        if invalid > 0 {
            warn!("Replaced {} invalid UTF-8 sequence(s)", invalid);
        }
        out
    }

    /// End of stream: an incomplete trailing sequence becomes one U+FFFD
    pub fn finish(&mut self) -> String {
        if self.is_pending() {
            self.reset();
            REPLACEMENT_CHAR.to_string()
        } else {
            String::new()
        }
    }

    /// Feed a byte to the decoder.
    ///
    /// A non-continuation byte that arrives mid-sequence yields `Invalid` and
    /// is not consumed; feed it again to decode it.
    pub fn feed(&mut self, byte: u8) -> Utf8Result {
        // ASCII fast path
        if self.len == 0 && byte < 0x80 {
            return Utf8Result::Char(byte as char);
        }

        // Start of new sequence
        if self.len == 0 {
            self.expected = match byte {
                b if b & 0b1110_0000 == 0b1100_0000 => 2,
                b if b & 0b1111_0000 == 0b1110_0000 => 3,
                b if b & 0b1111_1000 == 0b1111_0000 => 4,
                _ => return Utf8Result::Invalid,
            };
            self.buffer[0] = byte;
            self.len = 1;
            return Utf8Result::Pending;
        }

        if !is_continuation(byte) {
            self.reset();
            return Utf8Result::Invalid;
        }

        self.buffer[self.len] = byte;
        self.len += 1;

        if self.len < self.expected {
            return Utf8Result::Pending;
        }

        let result = self.complete();
        self.reset();
        result
    }

    /// Decode the full sequence held in the buffer
    fn complete(&self) -> Utf8Result {
        let b = &self.buffer;
        let (cp, min) = match self.expected {
            2 => ((b[0] as u32 & 0x1F) << 6 | (b[1] as u32 & 0x3F), 0x80),
            3 => (
                (b[0] as u32 & 0x0F) << 12 | (b[1] as u32 & 0x3F) << 6 | (b[2] as u32 & 0x3F),
                0x800,
            ),
            4 => (
                (b[0] as u32 & 0x07) << 18
                    | (b[1] as u32 & 0x3F) << 12
                    | (b[2] as u32 & 0x3F) << 6
                    | (b[3] as u32 & 0x3F),
                0x10000,
            ),
            _ => return Utf8Result::Invalid,
        };

        // Overlong encodings; char::from_u32 rejects surrogates and > U+10FFFF
        if cp < min {
            return Utf8Result::Invalid;
        }
        char::from_u32(cp)
            .map(Utf8Result::Char)
            .unwrap_or(Utf8Result::Invalid)
    }
}

/// Append a decode result to `out`, returning true if it was replaced
fn push_result(out: &mut String, result: Utf8Result) -> bool {
    match result {
        Utf8Result::Pending => false,
        Utf8Result::Char(c) => {
            out.push(c);
            false
        }
        Utf8Result::Invalid => {
            out.push(REPLACEMENT_CHAR);
            true
        }
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}
