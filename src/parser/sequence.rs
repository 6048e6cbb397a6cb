//! Spans produced by the scanner
//!
//! A scanned text is a sequence of literal runs and recognized control
//! sequences. Control sequences borrow from the scanned input.

/// The four string-type introducers that share the `ESC ... ESC \` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    /// Device Control String (ESC P)
    Dcs,
    /// Start Of String (ESC X)
    Sos,
    /// Privacy Message (ESC ^)
    Pm,
    /// Application Program Command (ESC _)
    Apc,
}

impl StringKind {
    /// Map the byte following ESC to a string kind
    pub fn from_introducer(byte: u8) -> Option<Self> {
        match byte {
            b'P' => Some(StringKind::Dcs),
            b'X' => Some(StringKind::Sos),
            b'^' => Some(StringKind::Pm),
            b'_' => Some(StringKind::Apc),
            _ => None,
        }
    }
}

/// CSI (Control Sequence Introducer) sequence
/// Format: ESC \[ \[params\] command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsiSequence<'a> {
    /// Raw parameter text: digits, `;` and `:`
    pub raw_params: &'a str,
    /// Final letter that selects the command
    pub command: char,
}

impl<'a> CsiSequence<'a> {
    /// Semicolon-separated parameter strings, in order.
    ///
    /// An empty parameter section yields an empty list, not one empty string.
    pub fn params(&self) -> Vec<&'a str> {
        if self.raw_params.is_empty() {
            Vec::new()
        } else {
            self.raw_params.split(';').collect()
        }
    }

    /// Check if this is an SGR (Select Graphic Rendition) sequence
    pub fn is_sgr(&self) -> bool {
        self.command == 'm'
    }
}

/// A recognized escape construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSequence<'a> {
    /// ESC \[ params letter
    Csi(CsiSequence<'a>),

    /// OSC (Operating System Command)
    /// Format: ESC ] Pt BEL  or  ESC ] Pt ST
    Osc {
        /// Payload between the introducer and the terminator
        payload: &'a str,
        /// False when the input ended (or another ESC began) before BEL/ST
        terminated: bool,
    },

    /// DCS, SOS, PM or APC string, terminated by ST (ESC \)
    String {
        /// Which introducer started the string
        kind: StringKind,
        /// Payload between the introducer and the terminator
        payload: &'a str,
        /// False when no ST was found
        terminated: bool,
    },

    /// Single-character Fe sequence: ESC followed by one of `@`-`Z` or `\`-`_`
    Fe(char),
}

impl<'a> ControlSequence<'a> {
    /// The CSI payload if this is an SGR sequence
    pub fn as_sgr(&self) -> Option<CsiSequence<'a>> {
        match *self {
            ControlSequence::Csi(csi) if csi.is_sgr() => Some(csi),
            _ => None,
        }
    }
}

/// One piece of scanned input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Literal text, possibly containing unrecognized ESC characters
    Text(&'a str),
    /// A recognized escape construct
    Control(ControlSequence<'a>),
}
