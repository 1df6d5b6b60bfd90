//! WS2812 matrix on the HAL's PIO driver (800 kHz, GRB on the wire).

use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::RGB8;

use super::traits::PixelSink;
use crate::config::NUM_PIXELS;

pub type Ws2812<'d, P, const S: usize> = PioWs2812<'d, P, S, NUM_PIXELS>;

impl<P: Instance, const S: usize> PixelSink for Ws2812<'_, P, S> {
    async fn write_frame(&mut self, frame: &[RGB8; NUM_PIXELS]) {
        self.write(frame).await;
    }
}
