//! PTY output to log markup
//!
//! Turns the raw character stream of a process running under a
//! pseudo-terminal into completed, styled lines for an append-only
//! rich-text log view.
//!
//! - `parser`: Escape-sequence scanner (CSI, OSC, DCS/SOS/PM/APC, Fe)
//! - `markup`: Bracket escaping, SGR-to-tag translation, per-line conversion
//! - `assembler`: Streaming line assembly (CR, LF, BS)
//! - `decode`: Streaming UTF-8 decoding of raw reads
//! - `sink`: Pass-through and markup output sinks
//! - `config`: Output mode and read size
//!
//! ```
//! use pty_markup::LineAssembler;
//!
//! let mut assembler = LineAssembler::new();
//! assert_eq!(assembler.process("\x1b[31mred\x1b[0m\r\nnext"), "[red]red[/]\n");
//! assert_eq!(assembler.flush(), "next\n");
//! ```

pub mod assembler;
pub mod config;
pub mod decode;
pub mod error;
pub mod markup;
pub mod parser;
pub mod sink;

pub use assembler::LineAssembler;
pub use config::{Config, OutputMode};
pub use error::{Error, Result};
pub use markup::{escape, line_to_markup, StyleTag};
pub use sink::{sink_for, MarkupSink, OutputSink, PassthroughSink};
