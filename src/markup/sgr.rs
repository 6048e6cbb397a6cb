//! SGR (Select Graphic Rendition) translation
//!
//! Turns the parameter list of an `ESC [ ... m` sequence into style tags.
//! Single codes come from a fixed table. `38`/`48` start compound color
//! directives: `38;5;N` (3 slots) and `38;2;R;G;B` (5 slots).
//!
//! Malformed input never fails: a compound directive that is short or has a
//! non-numeric slot degrades to its lead code (which has no table entry),
//! and scanning resumes at the following slot. Numeric slots have no upper
//! bound.

use tracing::trace;

use super::tag::{Plane, StyleTag};

/// Fixed single-code table.
///
/// Codes are matched as written, so `01` is not `1`.
const SGR_TABLE: &[(&str, StyleTag<'static>)] = &[
    // Reset
    ("0", StyleTag::Reset),
    // Text styles
    ("1", StyleTag::Open("bold")),
    ("2", StyleTag::Open("dim")),
    ("3", StyleTag::Open("italic")),
    ("4", StyleTag::Open("underline")),
    ("5", StyleTag::Open("blink")),
    ("7", StyleTag::Open("reverse")),
    ("8", StyleTag::Open("hidden")),
    ("9", StyleTag::Open("strike")),
    // Style off. 21 is double underline on some terminals, bold off on others.
    ("21", StyleTag::Close("bold")),
    ("22", StyleTag::Close("dim")),
    ("23", StyleTag::Close("italic")),
    ("24", StyleTag::Close("underline")),
    ("25", StyleTag::Close("blink")),
    ("27", StyleTag::Close("reverse")),
    ("28", StyleTag::Close("hidden")),
    ("29", StyleTag::Close("strike")),
    // Foreground (30-37, 39)
    ("30", StyleTag::Open("black")),
    ("31", StyleTag::Open("red")),
    ("32", StyleTag::Open("green")),
    ("33", StyleTag::Open("yellow")),
    ("34", StyleTag::Open("blue")),
    ("35", StyleTag::Open("magenta")),
    ("36", StyleTag::Open("cyan")),
    ("37", StyleTag::Open("white")),
    ("39", StyleTag::Open("default")),
    // Background (40-47, 49)
    ("40", StyleTag::Open("on black")),
    ("41", StyleTag::Open("on red")),
    ("42", StyleTag::Open("on green")),
    ("43", StyleTag::Open("on yellow")),
    ("44", StyleTag::Open("on blue")),
    ("45", StyleTag::Open("on magenta")),
    ("46", StyleTag::Open("on cyan")),
    ("47", StyleTag::Open("on white")),
    ("49", StyleTag::Open("on default")),
    // Bright foreground (90-97)
    ("90", StyleTag::Open("bright_black")),
    ("91", StyleTag::Open("bright_red")),
    ("92", StyleTag::Open("bright_green")),
    ("93", StyleTag::Open("bright_yellow")),
    ("94", StyleTag::Open("bright_blue")),
    ("95", StyleTag::Open("bright_magenta")),
    ("96", StyleTag::Open("bright_cyan")),
    ("97", StyleTag::Open("bright_white")),
    // Bright background (100-107)
    ("100", StyleTag::Open("on bright_black")),
    ("101", StyleTag::Open("on bright_red")),
    ("102", StyleTag::Open("on bright_green")),
    ("103", StyleTag::Open("on bright_yellow")),
    ("104", StyleTag::Open("on bright_blue")),
    ("105", StyleTag::Open("on bright_magenta")),
    ("106", StyleTag::Open("on bright_cyan")),
    ("107", StyleTag::Open("on bright_white")),
];

/// Look up a single code in the fixed table
pub fn lookup(code: &str) -> Option<StyleTag<'static>> {
    SGR_TABLE
        .iter()
        .find(|(key, _)| *key == code)
        .map(|&(_, tag)| tag)
}

/// Translate SGR parameters into style tags, in order
pub fn translate<'a>(params: &[&'a str]) -> Vec<StyleTag<'a>> {
    if params.is_empty() || params == ["0"] {
        return vec![StyleTag::Reset];
    }

    let mut tags = Vec::with_capacity(params.len());
    let mut i = 0;

    while i < params.len() {
        let param = params[i];

        if let Some(plane) = extended_plane(param) {
            if let Some((tag, consumed)) = extended_color(plane, &params[i + 1..]) {
                tags.push(tag);
                i += consumed;
                continue;
            }
        }

        match lookup(param) {
            Some(tag) => tags.push(tag),
            None => trace!("Unknown SGR parameter: {:?}", param),
        }

        i += 1;
    }

    tags
}

/// Translate SGR parameters straight to markup text
pub fn to_markup(params: &[&str]) -> String {
    translate(params).iter().map(ToString::to_string).collect()
}

/// `38` and `48` introduce compound color directives
fn extended_plane(param: &str) -> Option<Plane> {
    match param {
        "38" => Some(Plane::Foreground),
        "48" => Some(Plane::Background),
        _ => None,
    }
}

/// Parse the slots following `38`/`48`.
///
/// Returns the tag and the total number of slots consumed, lead code included.
fn extended_color<'a>(plane: Plane, rest: &[&'a str]) -> Option<(StyleTag<'a>, usize)> {
    match *rest.first()? {
        "5" => {
            let index = parse_slot(rest.get(1).copied()?)?;
            Some((StyleTag::Indexed { plane, index }, 3))
        }
        "2" => {
            let r = parse_slot(rest.get(1).copied()?)?;
            let g = parse_slot(rest.get(2).copied()?)?;
            let b = parse_slot(rest.get(3).copied()?)?;
            Some((StyleTag::Rgb { plane, r, g, b }, 5))
        }
        _ => None,
    }
}

/// A numeric slot as its canonical decimal text: `"007"` is `"7"`, `"000"` is `"0"`
fn parse_slot(slot: &str) -> Option<&str> {
    if slot.is_empty() || !slot.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match slot.trim_start_matches('0') {
        "" => Some("0"),
        digits => Some(digits),
    }
}
