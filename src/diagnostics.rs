/// Boot-time self check and log dump for the display definitions
use anyhow::{bail, Result};
use embedded_graphics_core::pixelcolor::Rgb565;
use log::{debug, error, info};

use crate::display::{Color, FONT_SIZE_X, FONT_SIZE_Y, GLYPH_SIZE, PALETTE};
use crate::ui::cursor::CURSOR_BLINK_PERIOD;

/// Log the palette, glyph cell and cursor timing at info level.
pub fn log_palette() {
    info!("DISPLAY: {} named colors (RGB565)", PALETTE.len());
    for (name, color) in PALETTE.iter() {
        info!(
            "DISPLAY: {:<8} 0x{:04X}  r={:>2} g={:>2} b={:>2}",
            name,
            color.raw(),
            color.red(),
            color.green(),
            color.blue()
        );
    }
    info!("DISPLAY: Glyph cell {}x{} px", FONT_SIZE_X, FONT_SIZE_Y);
    info!("DISPLAY: Cursor blink period {} ms", CURSOR_BLINK_PERIOD);
}

/// Check that the built-in tables agree with each other.
pub fn verify_palette() -> Result<()> {
    check_palette(&PALETTE)?;

    for &(name, color) in PALETTE.iter() {
        match Color::from_name(name) {
            Ok(found) if found == color => {}
            Ok(found) => {
                error!(
                    "DISPLAY: {} resolves to {:#06X}, expected {:#06X}",
                    name,
                    found.raw(),
                    color.raw()
                );
                bail!("color {} resolves to the wrong value", name);
            }
            Err(e) => {
                error!("DISPLAY: {}", e);
                return Err(e.into());
            }
        }
    }

    if GLYPH_SIZE.width != FONT_SIZE_X || GLYPH_SIZE.height != FONT_SIZE_Y {
        error!(
            "DISPLAY: Glyph cell {}x{} does not match font size {}x{}",
            GLYPH_SIZE.width, GLYPH_SIZE.height, FONT_SIZE_X, FONT_SIZE_Y
        );
        bail!("glyph cell does not match font size");
    }

    if CURSOR_BLINK_PERIOD == 0 {
        error!("DISPLAY: Cursor blink period is zero");
        bail!("cursor blink period must be positive");
    }

    debug!("DISPLAY: Palette verified ({} colors)", PALETTE.len());
    Ok(())
}

// Names and values must be unique and survive the embedded-graphics repacking
fn check_palette(palette: &[(&str, Color)]) -> Result<()> {
    for (i, &(name, color)) in palette.iter().enumerate() {
        for &(other_name, other_color) in &palette[i + 1..] {
            if name == other_name {
                error!("DISPLAY: Duplicate color name {}", name);
                bail!("duplicate color name {}", name);
            }
            if color == other_color {
                error!("DISPLAY: {} and {} share value 0x{:04X}", name, other_name, color.raw());
                bail!("colors {} and {} share a value", name, other_name);
            }
        }

        let repacked = Color::from(Rgb565::from(color));
        if repacked != color {
            error!("DISPLAY: {} repacks to 0x{:04X}", name, repacked.raw());
            bail!("color {} does not survive Rgb565 conversion", name);
        }
    }
    Ok(())
}
