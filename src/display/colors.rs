// Color definitions for 16-bit RGB565 format
// Layout: bits 15..11 red, bits 10..5 green, bits 4..0 blue

use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A packed RGB565 pixel value.
///
/// Keeps colors apart from plain integers such as glyph sizes or timeouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u16);

const RED_MASK: u16 = 0xF800;
const GREEN_MASK: u16 = 0x07E0;
const BLUE_MASK: u16 = 0x001F;

// Basic colors
pub const BLACK: Color = Color(0x0000);
pub const BLUE: Color = Color(0x001F);
pub const RED: Color = Color(0xF800);
pub const GREEN: Color = Color(0x07E0);
pub const CYAN: Color = Color(0x07FF);
pub const MAGENTA: Color = Color(0xF81F);
pub const YELLOW: Color = Color(0xFFE0);
pub const WHITE: Color = Color(0xFFFF);

// Light variants
pub const LBLUE: Color = Color(0x000F);
pub const LRED: Color = Color(0x7800);
pub const LGREEN: Color = Color(0x03E0);
pub const LCYAN: Color = Color(0x07EF);
pub const LMAGENTA: Color = Color(0x780F);
pub const LYELLOW: Color = Color(0x7BE0);
pub const LWHITE: Color = Color(0x7BEF);

/// Every named color, standard colors first, then the light variants.
pub const PALETTE: [(&str, Color); 15] = [
    ("BLACK", BLACK),
    ("BLUE", BLUE),
    ("RED", RED),
    ("GREEN", GREEN),
    ("CYAN", CYAN),
    ("MAGENTA", MAGENTA),
    ("YELLOW", YELLOW),
    ("WHITE", WHITE),
    ("LBLUE", LBLUE),
    ("LRED", LRED),
    ("LGREEN", LGREEN),
    ("LCYAN", LCYAN),
    ("LMAGENTA", LMAGENTA),
    ("LYELLOW", LYELLOW),
    ("LWHITE", LWHITE),
];

impl Color {
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel, 0..=31
    pub const fn red(self) -> u8 {
        ((self.0 & RED_MASK) >> 11) as u8
    }

    /// Green channel, 0..=63
    pub const fn green(self) -> u8 {
        ((self.0 & GREEN_MASK) >> 5) as u8
    }

    /// Blue channel, 0..=31
    pub const fn blue(self) -> u8 {
        (self.0 & BLUE_MASK) as u8
    }

    /// Table name of a named color, `None` for anything else.
    pub const fn name(self) -> Option<&'static str> {
        let mut i = 0;
        while i < PALETTE.len() {
            if PALETTE[i].1 .0 == self.0 {
                return Some(PALETTE[i].0);
            }
            i += 1;
        }
        None
    }

    /// Look up a named color at runtime. Names are case-sensitive.
    ///
    /// Code that knows the color up front should use the constants instead;
    /// an undefined constant does not compile:
    ///
    /// ```compile_fail
    /// let _ = display_defs::display::colors::ORANGE;
    /// ```
    pub fn from_name(name: &str) -> Result<Self, UnknownColor> {
        PALETTE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, color)| color)
            .ok_or_else(|| UnknownColor::new(name))
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

// Same 5/6/5 fields on both sides, so both directions are lossless
impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        Rgb565::new(color.red(), color.green(), color.blue())
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(((color.r() as u16) << 11) | ((color.g() as u16) << 5) | color.b() as u16)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "#{:04X}", self.0),
        }
    }
}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_name(s)
    }
}

/// Returned when a name is not in [`PALETTE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor {
    pub name: String,
}

impl UnknownColor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color name: {:?}", self.name)
    }
}

impl std::error::Error for UnknownColor {}
