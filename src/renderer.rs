//! Frame ownership and per-tick effect application.

use rand_core::RngCore;

use crate::color::Rgb;
use crate::config::{ConfigError, StripConfig};
use crate::effect::Pipeline;

/// Owns the frame buffer and drives the effect pipeline over it.
///
/// The frame is the single piece of shared mutable state in the system:
/// it lives here, is handed to each effect in sequence, and goes to the
/// output driver as a read-only slice.
pub struct Renderer<R: RngCore, const MAX_LEDS: usize> {
    pipeline: Pipeline<R, MAX_LEDS>,
    frame_buffer: [Rgb; MAX_LEDS],
    led_count: usize,
}

impl<R: RngCore, const MAX_LEDS: usize> Renderer<R, MAX_LEDS> {
    /// Create a renderer with the standard ambient pipeline.
    pub fn new(config: &StripConfig, rng: R) -> Result<Self, ConfigError> {
        let pipeline = Pipeline::ambient(config, rng);
        Self::with_pipeline(config, pipeline)
    }

    /// Create a renderer with a custom pipeline.
    ///
    /// Rejects configurations the per-tick path could not honor: a strip
    /// longer than the frame capacity, or flicker bounds with nothing to
    /// draw from.
    pub fn with_pipeline(
        config: &StripConfig,
        pipeline: Pipeline<R, MAX_LEDS>,
    ) -> Result<Self, ConfigError> {
        if config.led_count > MAX_LEDS {
            return Err(ConfigError::StripTooLong {
                led_count: config.led_count,
                capacity: MAX_LEDS,
            });
        }
        if config.flicker_interval.max <= config.flicker_interval.min {
            return Err(ConfigError::EmptyFlickerInterval);
        }
        Ok(Self {
            pipeline,
            frame_buffer: [Rgb::default(); MAX_LEDS],
            led_count: config.led_count,
        })
    }

    /// Apply the pipeline for one tick and return the frame.
    pub fn render(&mut self, tick: u32) -> &[Rgb] {
        let frame = &mut self.frame_buffer[..self.led_count];
        self.pipeline.apply(tick, frame);
        frame
    }

    /// Current frame contents, without advancing the animation.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer[..self.led_count]
    }

    /// Number of active elements.
    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// Reset all effect state; the frame itself is left as is.
    pub fn reset(&mut self) {
        self.pipeline.reset();
    }
}
