// Font size
// We use the default font, so the glyph cell never changes

use embedded_graphics_core::geometry::Size;

pub const FONT_SIZE_X: u32 = 6; // glyph width, pixels
pub const FONT_SIZE_Y: u32 = 8; // glyph height, pixels

pub const GLYPH_SIZE: Size = Size::new(FONT_SIZE_X, FONT_SIZE_Y);
