//! Digit renderer for the 5x5 matrix.
//!
//! [`DigitRenderer`] owns the pixel buffer. Every call rewrites all 25
//! entries and then hands the whole frame to the sink, lit pixels in
//! [`LIT_COLOR`] and the rest in [`OFF_COLOR`].

use smart_leds::RGB8;

use crate::config::{LIT_COLOR, NUM_PIXELS, OFF_COLOR};
use crate::glyph::{Digit, glyph};
use crate::hardware::traits::PixelSink;

pub struct DigitRenderer<S> {
    sink: S,
    // One flag per LED, in wiring order.
    buffer: [bool; NUM_PIXELS],
}

impl<S: PixelSink> DigitRenderer<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            buffer: [false; NUM_PIXELS],
        }
    }

    /// Draw `digit`. Always a full frame.
    pub async fn render(&mut self, digit: Digit) {
        self.buffer = glyph(digit).pixels();
        self.flush().await;
    }

    /// Turn every pixel off.
    pub async fn clear(&mut self) {
        self.buffer = [false; NUM_PIXELS];
        self.flush().await;
    }

    async fn flush(&mut self) {
        let frame: [RGB8; NUM_PIXELS] =
            core::array::from_fn(|i| if self.buffer[i] { LIT_COLOR } else { OFF_COLOR });
        self.sink.write_frame(&frame).await;
    }
}
