//! Rare white flicker.

use rand_core::RngCore;

use super::Effect;
use crate::color::Rgb;
use crate::config::FlickerInterval;

/// Default draw bounds for the white flicker, in ticks.
pub const WHITE_FLICKER_INTERVAL: FlickerInterval = FlickerInterval::new(1200, 1600);

const WHITE: Rgb = Rgb {
    r: 0xff,
    g: 0xff,
    b: 0xff,
};

/// Occasional full-white injection.
///
/// A second flicker variant with much longer intervals. The target index
/// is drawn from the interior of the strip, never the first or last
/// element. Not part of the default ambient chain.
#[derive(Debug)]
pub struct WhiteFlickerEffect<R: RngCore> {
    interval: FlickerInterval,
    last_event: u32,
    rng: R,
}

impl<R: RngCore> WhiteFlickerEffect<R> {
    pub fn new(interval: FlickerInterval, rng: R) -> Self {
        Self {
            interval,
            last_event: 0,
            rng,
        }
    }
}

impl<R: RngCore> Effect for WhiteFlickerEffect<R> {
    #[allow(clippy::cast_possible_truncation)]
    fn apply(&mut self, tick: u32, leds: &mut [Rgb]) {
        // The interior draw needs at least one inner element.
        if leds.len() < 3 {
            return;
        }
        let wait = self.interval.min + self.rng.next_u32() % self.interval.span();
        if tick.wrapping_sub(self.last_event) > wait {
            self.last_event = tick;
            let index = 1 + self.rng.next_u32() as usize % (leds.len() - 2);
            leds[index] = WHITE;
        }
    }

    fn reset(&mut self) {
        self.last_event = 0;
    }
}
