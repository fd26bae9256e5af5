//! Display glyphs.
//!
//! A [`Glyph`] is opaque to the simulation: nothing in the kernel makes a
//! decision based on appearance. It exists so a rendering collaborator can
//! ask a cell what to draw through a query event.

/// ANSI 16-colour palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    /// Black (0).
    #[default]
    Black = 0,
    /// Red (1).
    Red,
    /// Green (2).
    Green,
    /// Yellow (3).
    Yellow,
    /// Blue (4).
    Blue,
    /// Magenta (5).
    Magenta,
    /// Cyan (6).
    Cyan,
    /// White (7).
    White,
    /// Bright black (8).
    LightBlack,
    /// Bright red (9).
    LightRed,
    /// Bright green (10).
    LightGreen,
    /// Bright yellow (11).
    LightYellow,
    /// Bright blue (12).
    LightBlue,
    /// Bright magenta (13).
    LightMagenta,
    /// Bright cyan (14).
    LightCyan,
    /// Bright white (15).
    LightWhite,
}

impl Color {
    /// ANSI colour code (0..16).
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A single on-screen character with foreground and background colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    /// The character drawn.
    pub ch: char,
    /// Foreground colour.
    pub fg: Color,
    /// Background colour.
    pub bg: Color,
}

impl Glyph {
    /// White-on-black glyph for `ch`.
    pub const fn ch(ch: char) -> Self {
        Self {
            ch,
            fg: Color::White,
            bg: Color::Black,
        }
    }

    /// Glyph for `ch` with the given foreground on black.
    pub const fn ch_fg(ch: char, fg: Color) -> Self {
        Self {
            ch,
            fg,
            bg: Color::Black,
        }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::ch(' ')
    }
}
