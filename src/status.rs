//! Heartbeat on the status LED.

use core::future::Future;

use crate::hardware::traits::Led;
use embassy_time::Duration;

/// Blink `led` forever: on for `half_period`, off for `half_period`.
///
/// `wait` does the sleeping; the firmware passes `Timer::after`.
pub async fn heartbeat<L, W, F>(led: &mut L, half_period: Duration, mut wait: W)
where
    L: Led,
    W: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    loop {
        led.on();
        wait(half_period).await;
        led.off();
        wait(half_period).await;
    }
}
