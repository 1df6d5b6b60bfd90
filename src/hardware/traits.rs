use smart_leds::RGB8;

use crate::config::NUM_PIXELS;

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
}

#[allow(async_fn_in_trait)]
pub trait Button {
    fn is_pressed(&mut self) -> bool;

    /// Resolves on the next press edge.
    async fn wait_for_press(&mut self);
}

/// Takes a whole matrix frame at once, pixels in wiring order.
#[allow(async_fn_in_trait)]
pub trait PixelSink {
    async fn write_frame(&mut self, frame: &[RGB8; NUM_PIXELS]);
}
