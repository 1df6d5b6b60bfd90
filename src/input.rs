//! Button edge handling: debounce window plus the saturating counter.
//!
//! Time is passed in as milliseconds since boot so the controller stays
//! independent of the time driver. An edge is dropped when it arrives less
//! than the debounce window after the last *accepted* edge; dropped edges do
//! not move the window.

use crate::config::DEBOUNCE_MS;
use crate::glyph::Digit;

/// Which button produced the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputChannel {
    Increment,
    Decrement,
}

/// Result of feeding one edge to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Inside the debounce window.
    Suppressed,
    /// Accepted, but the counter was already at its limit.
    Unchanged(Digit),
    /// Accepted and the counter moved; the digit needs drawing.
    Changed(Digit),
}

#[derive(Debug)]
pub struct InputController {
    counter: Digit,
    // Shared by both buttons.
    last_accepted: Option<u64>,
}

impl InputController {
    pub const fn new() -> Self {
        Self {
            counter: Digit::MIN,
            last_accepted: None,
        }
    }

    pub const fn counter(&self) -> Digit {
        self.counter
    }

    /// Handle one falling edge seen at `now_ms`.
    pub fn on_edge(&mut self, channel: InputChannel, now_ms: u64) -> EdgeOutcome {
        if let Some(last) = self.last_accepted {
            // A clock that went backwards counts as no time elapsed.
            if now_ms.saturating_sub(last) < DEBOUNCE_MS {
                return EdgeOutcome::Suppressed;
            }
        }
        self.last_accepted = Some(now_ms);

        let next = match channel {
            InputChannel::Increment => self.counter.saturating_inc(),
            InputChannel::Decrement => self.counter.saturating_dec(),
        };
        if next == self.counter {
            return EdgeOutcome::Unchanged(next);
        }
        self.counter = next;
        EdgeOutcome::Changed(next)
    }
}

#[cfg(test)]
mod tests {
    use super::InputChannel::{Decrement, Increment};
    use super::*;
    use proptest::prelude::*;

    fn digit(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    #[test]
    fn first_edge_is_accepted_at_boot() {
        let mut ctl = InputController::new();
        assert_eq!(ctl.on_edge(Increment, 0), EdgeOutcome::Changed(digit(1)));
    }

    #[test]
    fn bounce_inside_window_is_dropped() {
        let mut ctl = InputController::new();
        assert_eq!(ctl.on_edge(Increment, 0), EdgeOutcome::Changed(digit(1)));
        assert_eq!(ctl.on_edge(Increment, 50), EdgeOutcome::Suppressed);
        assert_eq!(ctl.counter(), digit(1));
        assert_eq!(ctl.on_edge(Increment, 250), EdgeOutcome::Changed(digit(2)));
    }

    #[test]
    fn window_boundary_is_accepted() {
        let mut ctl = InputController::new();
        ctl.on_edge(Increment, 1_000);
        assert_eq!(ctl.on_edge(Increment, 1_199), EdgeOutcome::Suppressed);
        assert_eq!(ctl.on_edge(Increment, 1_200), EdgeOutcome::Changed(digit(2)));
    }

    #[test]
    fn suppressed_edges_do_not_extend_the_window() {
        let mut ctl = InputController::new();
        ctl.on_edge(Increment, 0);
        for t in (10..200).step_by(10) {
            assert_eq!(ctl.on_edge(Increment, t), EdgeOutcome::Suppressed);
        }
        assert_eq!(ctl.on_edge(Increment, 200), EdgeOutcome::Changed(digit(2)));
    }

    #[test]
    fn decrement_at_zero_stays_zero_without_redraw() {
        let mut ctl = InputController::new();
        let outcome = ctl.on_edge(Decrement, 0);
        assert_eq!(outcome, EdgeOutcome::Unchanged(digit(0)));
        assert_eq!(ctl.counter(), digit(0));
    }

    #[test]
    fn increment_stops_at_nine() {
        let mut ctl = InputController::new();
        for i in 0..9u64 {
            ctl.on_edge(Increment, i * 300);
        }
        assert_eq!(ctl.counter(), Digit::MAX);
        assert_eq!(ctl.on_edge(Increment, 9_000), EdgeOutcome::Unchanged(Digit::MAX));
    }

    #[test]
    fn shared_window_blocks_the_other_button() {
        let mut ctl = InputController::new();
        ctl.on_edge(Increment, 0);
        assert_eq!(ctl.on_edge(Decrement, 100), EdgeOutcome::Suppressed);
        assert_eq!(ctl.counter(), digit(1));
    }

    #[test]
    fn clock_going_backwards_is_suppressed() {
        let mut ctl = InputController::new();
        ctl.on_edge(Increment, 5_000);
        assert_eq!(ctl.on_edge(Increment, 4_000), EdgeOutcome::Suppressed);
    }

    fn edges() -> impl Strategy<Value = Vec<(bool, u64)>> {
        prop::collection::vec((any::<bool>(), 0u64..500), 0..64)
    }

    proptest! {
        #[test]
        fn counter_never_leaves_range(events in edges()) {
            let mut ctl = InputController::new();
            let mut now = 0u64;
            for (up, gap) in events {
                now += gap;
                let channel = if up { Increment } else { Decrement };
                ctl.on_edge(channel, now);
                prop_assert!(ctl.counter() <= Digit::MAX);
            }
        }

        #[test]
        fn increments_saturate_at_nine(gaps in prop::collection::vec(200u64..1_000, 0..40)) {
            let mut ctl = InputController::new();
            let mut now = 0u64;
            for (n, gap) in gaps.iter().enumerate() {
                now += gap;
                ctl.on_edge(Increment, now);
                prop_assert_eq!(ctl.counter().value() as usize, (n + 1).min(9));
            }
        }

        #[test]
        fn decrements_saturate_at_zero(ups in 0usize..12, downs in 0usize..12) {
            let mut ctl = InputController::new();
            let mut now = 0u64;
            for _ in 0..ups {
                ctl.on_edge(Increment, now);
                now += DEBOUNCE_MS;
            }
            for _ in 0..downs {
                ctl.on_edge(Decrement, now);
                now += DEBOUNCE_MS;
            }
            prop_assert_eq!(ctl.counter().value() as usize, ups.min(9).saturating_sub(downs));
        }

        #[test]
        fn close_edges_change_nothing(first in 0u64..10_000, gap in 0u64..DEBOUNCE_MS, up in any::<bool>()) {
            let mut ctl = InputController::new();
            ctl.on_edge(Increment, first);
            let before = ctl.counter();
            let channel = if up { Increment } else { Decrement };
            prop_assert_eq!(ctl.on_edge(channel, first + gap), EdgeOutcome::Suppressed);
            prop_assert_eq!(ctl.counter(), before);
        }

        #[test]
        fn spaced_edges_are_both_accepted(first in 0u64..10_000, gap in DEBOUNCE_MS..5_000) {
            let mut ctl = InputController::new();
            prop_assert_eq!(ctl.on_edge(Increment, first), EdgeOutcome::Changed(Digit::new(1).unwrap()));
            prop_assert_eq!(ctl.on_edge(Increment, first + gap), EdgeOutcome::Changed(Digit::new(2).unwrap()));
        }
    }
}
