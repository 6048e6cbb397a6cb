//! Style tags of the log markup syntax
//!
//! | Tag | Text |
//! |-----|------|
//! | open a named style | `[name]` |
//! | close a named style | `[/name]` |
//! | close everything | `[/]` |
//! | indexed color | `[color(N)]`, `[on color(N)]` |
//! | true color | `[rgb(R,G,B)]`, `[on rgb(R,G,B)]` |
//!
//! Color values are kept as the decimal digits they arrived as, with leading
//! zeros stripped, so any length of number renders unchanged.

use std::fmt;

/// Which color plane a color tag applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    Foreground,
    Background,
}

impl Plane {
    /// Prefix written before the color directive
    fn prefix(self) -> &'static str {
        match self {
            Plane::Foreground => "",
            Plane::Background => "on ",
        }
    }
}

/// One open or close tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag<'a> {
    /// Open a named style, e.g. `bold`, `red`, `on bright_blue`
    Open(&'static str),
    /// Close one named style
    Close(&'static str),
    /// Close all open styles. Valid even when nothing is open.
    Reset,
    /// 256-color palette entry
    Indexed { plane: Plane, index: &'a str },
    /// 24-bit color
    Rgb {
        plane: Plane,
        r: &'a str,
        g: &'a str,
        b: &'a str,
    },
}

impl fmt::Display for StyleTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleTag::Open(name) => write!(f, "[{}]", name),
            StyleTag::Close(name) => write!(f, "[/{}]", name),
            StyleTag::Reset => f.write_str("[/]"),
            StyleTag::Indexed { plane, index } => {
                write!(f, "[{}color({})]", plane.prefix(), index)
            }
            StyleTag::Rgb { plane, r, g, b } => {
                write!(f, "[{}rgb({},{},{})]", plane.prefix(), r, g, b)
            }
        }
    }
}
