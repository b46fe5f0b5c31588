pub mod colors;
pub mod font;

pub use colors::{Color, UnknownColor, PALETTE};
pub use font::{FONT_SIZE_X, FONT_SIZE_Y, GLYPH_SIZE};
