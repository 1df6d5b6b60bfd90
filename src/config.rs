//! Compile-time constants shared by the firmware and the host tests.
//!
//! Pin assignment lives in the firmware binary, next to the peripheral
//! setup that consumes it.

use embassy_time::Duration;
use smart_leds::RGB8;

/// Pixels on the matrix, 5 rows of 5.
pub const NUM_PIXELS: usize = 25;

/// Edges closer than this to the last accepted edge are dropped.
pub const DEBOUNCE_MS: u64 = 200;

/// Status LED on-time and off-time (5 Hz blink).
pub const BLINK_HALF_PERIOD: Duration = Duration::from_millis(100);

/// Colour of a lit glyph pixel.
pub const LIT_COLOR: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

/// Colour of an unlit pixel.
pub const OFF_COLOR: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
