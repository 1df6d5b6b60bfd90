use super::traits::Led;
use embedded_hal::digital::OutputPin;

/// Active-high LED on a push-pull pin.
pub struct GpioLed<P> {
    pin: P,
}

impl<P> GpioLed<P>
where
    P: OutputPin<Error = core::convert::Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> Led for GpioLed<P>
where
    P: OutputPin<Error = core::convert::Infallible>,
{
    fn on(&mut self) {
        let Ok(()) = self.pin.set_high();
    }

    fn off(&mut self) {
        let Ok(()) = self.pin.set_low();
    }
}
