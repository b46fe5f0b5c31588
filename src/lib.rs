//! Display definitions for the RGB565 dashboard firmware
//!
//! Named 16-bit colors, the fixed glyph cell of the built-in font and the
//! HMI cursor timing. Everything here is a compile-time constant, so the
//! crate builds and tests on the host without hardware.

pub mod diagnostics;
pub mod display;
pub mod ui;

pub use display::colors;
pub use display::{Color, UnknownColor};
