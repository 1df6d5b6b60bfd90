//! RP2040 Two-Button Digit Counter on a 5x5 WS2812 Matrix
//! =============================================================================================
//!
//! This firmware keeps a single digit (0-9) and shows it on a 25-pixel
//! addressable LED matrix:
//! - Button A counts up, button B counts down, both stop at the ends
//! - Presses closer than 200ms to the last accepted press are ignored
//! - The red channel of the RGB status LED blinks at 5Hz
//!
//! Hardware Connections:
//!   Buttons (active low, internal pull-up)
//!      A (increment) -> GPIO5
//!      B (decrement) -> GPIO6
//!
//!   WS2812 matrix
//!      DIN  -> GPIO7
//!
//!   RGB status LED
//!      G    -> GPIO11
//!      B    -> GPIO12
//!      R    -> GPIO13
//!
//! Task layout:
//! 1. One task per button waits for falling edges and updates the counter
//! 2. Accepted changes go through a single-slot signal to the render task
//! 3. The render task hands the frame to the PIO WS2812 driver
//! 4. The main task runs the heartbeat

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::{
    bind_interrupts,
    gpio::{Input, Level, Output, Pull},
    peripherals::PIO0,
    pio::{InterruptHandler, Pio},
    pio_programs::ws2812::{PioWs2812, PioWs2812Program},
};
use embassy_sync::{
    blocking_mutex::{Mutex, raw::CriticalSectionRawMutex},
    signal::Signal,
};
use embassy_time::{Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use digit_matrix::color::grb_word;
use digit_matrix::config::{BLINK_HALF_PERIOD, LIT_COLOR};
use digit_matrix::display::DigitRenderer;
use digit_matrix::glyph::Digit;
use digit_matrix::hardware::{
    gpio_button::GpioButton,
    gpio_led::GpioLed,
    traits::{Button, Led},
    ws2812::Ws2812,
};
use digit_matrix::input::{EdgeOutcome, InputChannel, InputController};
use digit_matrix::status::heartbeat;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

type Matrix = DigitRenderer<Ws2812<'static, PIO0, 0>>;
type PushButton = GpioButton<Input<'static>>;

// Counter and debounce timestamp, shared by both button tasks
static CONTROLLER: Mutex<CriticalSectionRawMutex, RefCell<InputController>> =
    Mutex::new(RefCell::new(InputController::new()));

// Latest digit waiting to be drawn
static PENDING_DIGIT: Signal<CriticalSectionRawMutex, Digit> = Signal::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Digit counter starting");

    // Status LED: red blinks, green and blue stay dark
    let mut red = GpioLed::new(Output::new(p.PIN_13, Level::Low));
    let mut green = GpioLed::new(Output::new(p.PIN_11, Level::Low));
    let mut blue = GpioLed::new(Output::new(p.PIN_12, Level::Low));
    green.off();
    blue.off();

    let mut increment: PushButton = GpioButton::new(Input::new(p.PIN_5, Pull::Up));
    let mut decrement: PushButton = GpioButton::new(Input::new(p.PIN_6, Pull::Up));
    if increment.is_pressed() || decrement.is_pressed() {
        warn!("Button held at boot; first edge comes on release and re-press");
    }

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let leds: Ws2812<'static, PIO0, 0> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &program);
    let matrix: Matrix = DigitRenderer::new(leds);
    info!("Matrix on GPIO7, lit pixel word {=u32:#x}", grb_word(LIT_COLOR));

    spawner
        .spawn(render_task(matrix))
        .expect("Failed to spawn render task");
    spawner
        .spawn(button_task(increment, InputChannel::Increment))
        .expect("Failed to spawn increment button task");
    spawner
        .spawn(button_task(decrement, InputChannel::Decrement))
        .expect("Failed to spawn decrement button task");

    info!("Tasks running, heartbeat on GPIO13");
    heartbeat(&mut red, BLINK_HALF_PERIOD, Timer::after).await
}

/// Button Edge Task
///
/// Waits for a press, stamps it and runs it through the shared controller.
/// Only changed digits are forwarded; drawing happens in [`render_task`].
#[embassy_executor::task(pool_size = 2)]
async fn button_task(mut button: PushButton, channel: InputChannel) {
    loop {
        button.wait_for_press().await;
        let now = Instant::now().as_millis();

        let outcome = CONTROLLER.lock(|ctl| ctl.borrow_mut().on_edge(channel, now));
        match outcome {
            EdgeOutcome::Suppressed => debug!("{} bounce at {}ms dropped", channel, now),
            EdgeOutcome::Unchanged(digit) => info!("{} ignored, counter at {}", channel, digit.value()),
            EdgeOutcome::Changed(digit) => {
                info!("{} -> {}", channel, digit.value());
                PENDING_DIGIT.signal(digit);
            }
        }
    }
}

/// Matrix Render Task
///
/// Blanks the matrix once, then draws every digit the buttons publish.
#[embassy_executor::task]
async fn render_task(mut matrix: Matrix) {
    matrix.clear().await;

    loop {
        let digit = PENDING_DIGIT.wait().await;
        matrix.render(digit).await;
        debug!("Frame written for {}", digit.value());
    }
}
