//! Escape-sequence scanner
//!
//! Splits a text span into literal runs and recognized control sequences.
//! The split covers the whole input in order, with no gaps or overlaps.
//!
//! Recognition at each ESC, first match wins:
//! - CSI: ESC \[ {0-9 ; :}* letter
//! - OSC: ESC \] payload, ended by BEL or ST (ESC \\), or by a bare ESC / end of input
//! - DCS/SOS/PM/APC: ESC {P X ^ _} payload, ended by ST, or by a bare ESC / end of input
//! - Fe: ESC followed by one byte in `@`-`Z` or `\`-`_`
//!
//! An ESC that matches none of these stays in the surrounding literal text.
//! The scanner sees one span at a time; a sequence cut in half by the caller
//! is scanned as two unrelated pieces.

use super::sequence::{ControlSequence, CsiSequence, Span, StringKind};

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;
/// Second byte of ST (ESC \)
const ST_FINAL: u8 = b'\\';

/// Lazy iterator over the spans of one input text
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Unscanned remainder of the input
    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Length of the literal run at the start of `rest`.
    ///
    /// The run ends at the first ESC (after position 0) that starts a
    /// recognized sequence, or at the end of input.
    fn literal_len(rest: &str) -> usize {
        let bytes = rest.as_bytes();
        let mut i = 1;
        while i < bytes.len() {
            if bytes[i] == ESC && recognize(&rest[i..]).is_some() {
                return i;
            }
            i += 1;
        }
        bytes.len()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let rest = self.remainder();
        if rest.is_empty() {
            return None;
        }

        if let Some((sequence, len)) = recognize(rest) {
            self.pos += len;
            return Some(Span::Control(sequence));
        }

        let len = Self::literal_len(rest);
        self.pos += len;
        Some(Span::Text(&rest[..len]))
    }
}

/// Scan `input` into its spans
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

/// Try to recognize a control sequence at the start of `rest`.
///
/// Returns the sequence and the number of bytes it occupies.
fn recognize(rest: &str) -> Option<(ControlSequence<'_>, usize)> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&ESC) {
        return None;
    }

    let introducer = *bytes.get(1)?;
    match introducer {
        b'[' => recognize_csi(rest),
        b']' => Some(recognize_osc(rest)),
        b'P' | b'X' | b'^' | b'_' => {
            let kind = StringKind::from_introducer(introducer)?;
            Some(recognize_string(rest, kind))
        }
        b'@'..=b'Z' | b'\\'..=b'_' => Some((ControlSequence::Fe(introducer as char), 2)),
        _ => None,
    }
}

/// ESC \[ params letter
fn recognize_csi(rest: &str) -> Option<(ControlSequence<'_>, usize)> {
    let bytes = rest.as_bytes();
    let mut i = 2;
    while i < bytes.len() && matches!(bytes[i], b'0'..=b'9' | b';' | b':') {
        i += 1;
    }

    let command = *bytes.get(i)?;
    if !command.is_ascii_alphabetic() {
        return None;
    }

    let csi = CsiSequence {
        raw_params: &rest[2..i],
        command: command as char,
    };
    Some((ControlSequence::Csi(csi), i + 1))
}

/// ESC \] payload (BEL | ST)?
fn recognize_osc(rest: &str) -> (ControlSequence<'_>, usize) {
    let bytes = rest.as_bytes();
    let mut i = 2;
    while i < bytes.len() && bytes[i] != BEL && bytes[i] != ESC {
        i += 1;
    }

    let payload = &rest[2..i];
    let (terminated, len) = match bytes.get(i) {
        Some(&BEL) => (true, i + 1),
        Some(&ESC) if bytes.get(i + 1) == Some(&ST_FINAL) => (true, i + 2),
        _ => (false, i),
    };

    (
        ControlSequence::Osc {
            payload,
            terminated,
        },
        len,
    )
}

/// ESC {P X ^ _} payload ST?
fn recognize_string(rest: &str, kind: StringKind) -> (ControlSequence<'_>, usize) {
    let bytes = rest.as_bytes();
    let mut i = 2;
    while i < bytes.len() && bytes[i] != ESC {
        i += 1;
    }

    let payload = &rest[2..i];
    let (terminated, len) = if bytes.get(i + 1) == Some(&ST_FINAL) {
        (true, i + 2)
    } else {
        (false, i)
    };

    (
        ControlSequence::String {
            kind,
            payload,
            terminated,
        },
        len,
    )
}
