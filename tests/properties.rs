//! Property tests for the scanner, converter and assembler

use proptest::prelude::*;
use pty_markup::markup::sgr;
use pty_markup::parser::{scan, Span};
use pty_markup::{line_to_markup, LineAssembler};

/// Characters that carry no special meaning anywhere in the pipeline
fn inert_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:;!?/_=+*-]{0,64}"
}

/// Terminal-like text: plain runs, escape fragments and line controls
fn terminal_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-z \\[\\]]{1,8}",
        "[0-9;:]{0,6}[mKHJA]",
        prop::sample::select(vec!["\x1b", "\x1b[", "\x1b]0;", "\x1bP", "\x1b\\", "\x07"])
            .prop_map(String::from),
        prop::sample::select(vec!["\r", "\n", "\r\n", "\x08"]).prop_map(String::from),
        Just("世".to_string()),
    ];
    prop::collection::vec(piece, 0..32).prop_map(|pieces| pieces.concat())
}

/// Compound color slots, valid or not. None of them starts a directive.
fn color_slot() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["0", "7", "42", "255", "007", "99999999999", "", "x"])
}

/// `38`/`48` followed by `5`/`2`
fn color_directive() -> impl Strategy<Value = (&'static str, &'static str)> {
    (
        prop::sample::select(vec!["38", "48"]),
        prop::sample::select(vec!["5", "2"]),
    )
}

proptest! {
    #[test]
    fn prop_inert_text_passes_through(text in inert_text()) {
        prop_assert_eq!(line_to_markup(&text), text);
    }

    #[test]
    fn prop_scan_covers_input(text in terminal_text()) {
        let mut scanner = scan(&text);
        let mut literal = 0usize;
        for span in scanner.by_ref() {
            if let Span::Text(run) = span {
                prop_assert!(!run.is_empty());
                literal += run.len();
            }
        }
        prop_assert!(scanner.remainder().is_empty());
        prop_assert!(literal <= text.len());
    }

    #[test]
    fn prop_converter_never_panics(text in terminal_text()) {
        let _ = line_to_markup(&text);
    }

    #[test]
    fn prop_sgr_never_panics(params in prop::collection::vec("[0-9x]{0,4}", 0..12)) {
        let params: Vec<&str> = params.iter().map(String::as_str).collect();
        let _ = sgr::translate(&params);
    }

    #[test]
    fn prop_malformed_color_directive_resumes(
        (lead, mode) in color_directive(),
        slots in prop::collection::vec(color_slot(), 0..4),
    ) {
        let mut params = vec![lead, mode];
        params.extend(slots);
        // "x" can never be a color slot, so bold is always read as a code
        params.extend(["x", "1"]);

        let markup = sgr::to_markup(&params);
        prop_assert!(markup.ends_with("[bold]"), "{:?} -> {}", params, markup);
    }

    #[test]
    fn prop_short_color_directive_emits_no_color(
        (lead, mode) in color_directive(),
        slots in prop::collection::vec(color_slot(), 0..3),
    ) {
        let needed = if mode == "5" { 1 } else { 3 };
        let mut params = vec![lead, mode];
        params.extend(slots.into_iter().take(needed - 1));

        let markup = sgr::to_markup(&params);
        prop_assert!(!markup.contains("color("), "{:?} -> {}", params, markup);
        prop_assert!(!markup.contains("rgb("), "{:?} -> {}", params, markup);
    }

    #[test]
    fn prop_output_is_whole_lines(text in terminal_text()) {
        let mut assembler = LineAssembler::new();
        let mut out = assembler.process(&text);
        out.push_str(&assembler.flush());
        prop_assert!(out.is_empty() || out.ends_with('\n'));
        prop_assert!(!assembler.has_pending());
    }

    #[test]
    fn prop_chunking_without_cr_is_invisible(
        lines in prop::collection::vec(inert_text(), 0..8),
        split in 1usize..16,
    ) {
        let text: String = lines.iter().map(|line| format!("{}\n", line)).collect();

        let mut whole = LineAssembler::new();
        let expected = whole.process(&text);

        let mut chunked = LineAssembler::new();
        let chars: Vec<char> = text.chars().collect();
        let mut actual = String::new();
        for chunk in chars.chunks(split) {
            let chunk: String = chunk.iter().collect();
            actual.push_str(&chunked.process(&chunk));
        }

        prop_assert_eq!(actual, expected);
    }
}
