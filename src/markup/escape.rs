//! Escaping of literal text for the markup syntax
//!
//! `[` and `]` delimit tags, so literal brackets are written as `\[` and `\]`.

use std::borrow::Cow;

/// Escape markup delimiters in plain text.
///
/// Text without brackets is returned borrowed.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['[', ']']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    escape_into(&mut out, text);
    Cow::Owned(out)
}

/// Append `text` to `out` with markup delimiters escaped
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '[' || c == ']' {
            out.push('\\');
        }
        out.push(c);
    }
}
