//! Line-to-markup conversion
//!
//! Drives the scanner over one completed line. Literal runs are escaped,
//! SGR sequences become style tags, and every other control sequence
//! (cursor movement, erase, titles, device strings) is dropped.

use tracing::trace;

use super::escape::escape_into;
use super::sgr;
use crate::parser::{scan, Span};

/// Convert one line of raw terminal text into markup.
///
/// `line` must not contain line terminators; the assembler strips them.
pub fn line_to_markup(line: &str) -> String {
    let mut out = String::with_capacity(line.len());

    for span in scan(line) {
        match span {
            Span::Text(text) => escape_into(&mut out, text),
            Span::Control(sequence) => match sequence.as_sgr() {
                Some(csi) => out.push_str(&sgr::to_markup(&csi.params())),
                None => trace!("Dropping control sequence: {:?}", sequence),
            },
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_plain_text_unchanged() {
        assert_eq!(line_to_markup("cargo build --release"), "cargo build --release");
    }

    #[test]
    fn test_convert_escapes_brackets() {
        assert_eq!(line_to_markup("a[b]c"), r"a\[b\]c");
    }

    #[test]
    fn test_convert_basic_color() {
        assert_eq!(line_to_markup("\x1b[31mred\x1b[0m"), "[red]red[/]");
    }

    #[test]
    fn test_convert_indexed_color() {
        assert_eq!(
            line_to_markup("\x1b[38;5;196mtext\x1b[0m"),
            "[color(196)]text[/]"
        );
    }

    #[test]
    fn test_convert_true_color() {
        assert_eq!(
            line_to_markup("\x1b[38;2;255;0;0mtext\x1b[0m"),
            "[rgb(255,0,0)]text[/]"
        );
    }

    #[test]
    fn test_convert_empty_sgr_is_reset() {
        assert_eq!(line_to_markup("\x1b[1mB\x1b[m"), "[bold]B[/]");
    }

    #[test]
    fn test_convert_erase_contributes_nothing() {
        assert_eq!(line_to_markup("\x1b[2K"), "");
        assert_eq!(line_to_markup("ab\x1b[2Kcd"), "abcd");
        assert_eq!(line_to_markup("\x1b[1A\x1b[2K\x1b[Gdone"), "done");
    }

    #[test]
    fn test_convert_drops_titles_and_strings() {
        assert_eq!(line_to_markup("\x1b]0;build\x07ok"), "ok");
        assert_eq!(line_to_markup("\x1bPq#0\x1b\\ok"), "ok");
        assert_eq!(line_to_markup("\x1bMok\x1b]2;unterminated"), "ok");
    }

    #[test]
    fn test_convert_tags_at_code_positions() {
        assert_eq!(
            line_to_markup("error\x1b[1m:\x1b[22m x[0]"),
            r"error[bold]:[/dim] x\[0\]"
        );
    }

    #[test]
    fn test_convert_unrecognized_escape_kept_as_text() {
        assert_eq!(line_to_markup("\x1b[?25lhi"), "\x1b\\[?25lhi");
    }

    #[test]
    fn test_convert_brackets_inside_dropped_sequence_are_not_escaped() {
        assert_eq!(line_to_markup("\x1b]0;[title]\x07x"), "x");
    }
}
