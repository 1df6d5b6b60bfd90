//! WS2812 colour packing.
//!
//! The LEDs expect green, then red, then blue, each MSB first. A packed
//! word holds `(g << 16) | (r << 8) | b` in its low 24 bits.

use smart_leds::RGB8;

/// Pack one colour into the 24-bit GRB wire order.
pub const fn urgb_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 8) | ((g as u32) << 16) | (b as u32)
}

/// Wire word for an [`RGB8`].
pub const fn grb_word(color: RGB8) -> u32 {
    urgb_u32(color.r, color.g, color.b)
}
