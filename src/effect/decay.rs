//! Uniform brightness decay.

use super::{Effect, GATE_PERIOD};
use crate::color::Rgb;

/// Saturating per-channel darkening.
///
/// Shares the smear gate: runs only on ticks that are a multiple of
/// [`GATE_PERIOD`], after the smear pass in the ambient chain. Channels
/// never underflow; a value at or below the amount clamps to zero.
#[derive(Debug, Clone, Copy)]
pub struct DecayEffect {
    amount: u8,
}

impl DecayEffect {
    pub const fn new(amount: u8) -> Self {
        Self { amount }
    }
}

impl Effect for DecayEffect {
    fn apply(&mut self, tick: u32, leds: &mut [Rgb]) {
        if !tick.is_multiple_of(GATE_PERIOD) {
            return;
        }
        for led in leds {
            led.r = led.r.saturating_sub(self.amount);
            led.g = led.g.saturating_sub(self.amount);
            led.b = led.b.saturating_sub(self.amount);
        }
    }
}
