//! Two-button digit counter shown on a 5x5 WS2812 matrix.
//!
//! Everything except [`hardware::ws2812`] builds on the host so the glyph
//! table, colour packing, renderer and debounce logic can be unit tested.
//! The firmware entry point lives in `src/bin/digit_counter.rs`.

#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod config;
pub mod display;
pub mod glyph;
pub mod hardware;
pub mod input;
pub mod status;
