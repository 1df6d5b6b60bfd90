use super::traits::Button;
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

/// Active-low push-button; the pin is expected to have a pull-up.
pub struct GpioButton<P> {
    pin: P,
}

impl<P> GpioButton<P>
where
    P: InputPin<Error = core::convert::Infallible> + Wait,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> Button for GpioButton<P>
where
    P: InputPin<Error = core::convert::Infallible> + Wait,
{
    fn is_pressed(&mut self) -> bool {
        let Ok(low) = self.pin.is_low();
        low
    }

    async fn wait_for_press(&mut self) {
        let Ok(()) = self.pin.wait_for_falling_edge().await;
    }
}
