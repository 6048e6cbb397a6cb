//! Terminal escape sequence scanner
//!
//! A stateless scanner that splits text into literal runs and
//! recognized control sequences (CSI, OSC, DCS/SOS/PM/APC, Fe).

mod scanner;
mod sequence;

pub use scanner::{scan, Scanner};
pub use sequence::{ControlSequence, CsiSequence, Span, StringKind};
