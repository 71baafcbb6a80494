//! Tick scheduling.
//!
//! Drives the effect pipeline and the output driver at a fixed cadence,
//! forever. One iteration is one tick, the unit of animation time.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use rand_core::RngCore;

use crate::OutputDriver;
use crate::config::{StripConfig, duration_micros};
use crate::renderer::Renderer;

/// Fixed-cadence driver for the render/transmit loop.
pub struct Scheduler<O, D, R, const MAX_LEDS: usize>
where
    O: OutputDriver,
    D: DelayNs,
    R: RngCore,
{
    renderer: Renderer<R, MAX_LEDS>,
    output: O,
    delay: D,
    tick: u32,
    tick_interval: Duration,
}

impl<O, D, R, const MAX_LEDS: usize> Scheduler<O, D, R, MAX_LEDS>
where
    O: OutputDriver,
    D: DelayNs,
    R: RngCore,
{
    pub fn new(
        renderer: Renderer<R, MAX_LEDS>,
        output: O,
        delay: D,
        config: &StripConfig,
    ) -> Self {
        Self {
            renderer,
            output,
            delay,
            tick: 0,
            tick_interval: config.tick_interval,
        }
    }

    /// Start the counter at a specific tick.
    ///
    /// Useful for reproducing a point in the animation deterministically.
    #[must_use]
    pub fn with_initial_tick(mut self, tick: u32) -> Self {
        self.tick = tick;
        self
    }

    /// Run one iteration: render, transmit, hold for the tick interval.
    ///
    /// The counter wraps at `u32::MAX`; the animation just keeps going.
    pub fn step(&mut self) {
        let frame = self.renderer.render(self.tick);
        self.output.write(frame);
        self.delay.delay_us(duration_micros(self.tick_interval));
        self.tick = self.tick.wrapping_add(1);
    }

    /// Run until power-off. There is no stop condition.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Current tick counter.
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<R, MAX_LEDS> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<R, MAX_LEDS> {
        &mut self.renderer
    }
}
