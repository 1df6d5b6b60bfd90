//! Digit type and the 5x5 glyph table.
//!
//! Masks are stored as 25-bit integers written row by row, so bit 24 is
//! pixel 0 and bit 0 is pixel 24. Pixel order is the physical wiring order
//! of the matrix; the rows are already laid out for it.

use crate::config::NUM_PIXELS;

/// A counter value in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const MIN: Digit = Digit(0);
    pub const MAX: Digit = Digit(9);

    /// Returns `None` when `value` is above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Digit(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// One up, stopping at 9.
    pub const fn saturating_inc(self) -> Self {
        if self.0 < Self::MAX.0 { Digit(self.0 + 1) } else { self }
    }

    /// One down, stopping at 0.
    pub const fn saturating_dec(self) -> Self {
        if self.0 > Self::MIN.0 { Digit(self.0 - 1) } else { self }
    }

    #[cfg(test)]
    pub(crate) fn all() -> impl Iterator<Item = Digit> {
        (Self::MIN.0..=Self::MAX.0).map(Digit)
    }
}

/// On/off pattern for one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(u32);

impl Glyph {
    pub fn pixels(self) -> [bool; NUM_PIXELS] {
        core::array::from_fn(|i| (self.0 >> (NUM_PIXELS - 1 - i)) & 1 == 1)
    }
}

#[rustfmt::skip]
static GLYPHS: [Glyph; 10] = [
    Glyph(0b11111_10001_10001_10001_11111), // 0
    Glyph(0b01110_00100_00100_01100_00100), // 1
    Glyph(0b11111_10000_11111_00001_11111), // 2
    Glyph(0b11111_00001_11100_00001_11111), // 3
    Glyph(0b10000_00001_11111_10001_10001), // 4
    Glyph(0b11111_00001_11111_10000_11111), // 5
    Glyph(0b11111_10001_11111_10000_11111), // 6
    Glyph(0b00010_00100_01000_00001_11111), // 7
    Glyph(0b11111_10001_11111_10001_11111), // 8
    Glyph(0b11111_00001_11111_10001_11111), // 9
];

pub fn glyph(digit: Digit) -> Glyph {
    GLYPHS[digit.value() as usize]
}
