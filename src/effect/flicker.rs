//! Random colorful flicker.

use rand_core::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::color::{Rgb, hue_to_rgb};
use crate::config::FlickerInterval;

/// Randomized single-element color injection.
///
/// Keeps the tick of the most recent event. Each call draws a fresh wait
/// from the configured interval; once the ticks elapsed since the last
/// event exceed that draw, one element is overwritten with a random hue
/// at full saturation. At most one element changes per tick.
#[derive(Debug)]
pub struct FlickerEffect<R: RngCore> {
    interval: FlickerInterval,
    last_event: u32,
    rng: R,
}

impl<R: RngCore> FlickerEffect<R> {
    pub fn new(interval: FlickerInterval, rng: R) -> Self {
        Self {
            interval,
            last_event: 0,
            rng,
        }
    }
}

impl<R: RngCore> Effect for FlickerEffect<R> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn apply(&mut self, tick: u32, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        let wait = self.interval.min + self.rng.next_u32() % self.interval.span();
        // wrapping_sub keeps the comparison sound across the counter wrap
        if tick.wrapping_sub(self.last_event) > wait {
            self.last_event = tick;
            let index = self.rng.next_u32() as usize % leds.len();
            // 256 discrete hue levels
            let hue = (self.rng.next_u32() & 0xff) as f32 / 255.0;
            #[cfg(feature = "esp32-log")]
            println!("flicker: element {} hue {}", index, hue);
            leds[index] = hue_to_rgb(hue, 1.0);
        }
    }

    fn reset(&mut self) {
        self.last_event = 0;
    }
}
