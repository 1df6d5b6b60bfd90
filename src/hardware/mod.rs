pub mod gpio_led;
pub mod traits;

#[cfg(feature = "async")]
pub mod gpio_button;

#[cfg(target_os = "none")]
pub mod ws2812;
