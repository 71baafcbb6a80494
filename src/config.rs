//! Strip configuration.
//!
//! Collects every tunable the animation and the serial link depend on,
//! threaded through construction instead of scattered literals.

use embassy_time::Duration;

/// Default number of addressable elements on the strip.
pub const DEFAULT_LED_COUNT: usize = 50;

/// Half-open bounds `[min, max)` for a flicker interval draw, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlickerInterval {
    pub min: u32,
    pub max: u32,
}

impl FlickerInterval {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub(crate) const fn span(self) -> u32 {
        self.max - self.min
    }
}

/// Configuration for the strip, the effect pipeline and the serial link.
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Number of addressable elements
    pub led_count: usize,
    /// Pause between scheduler ticks
    pub tick_interval: Duration,
    /// Latch delay after each transmitted frame
    pub frame_gap: Duration,
    /// Settle time after each clock edge; zero disables it
    pub bit_delay: Duration,
    /// Weight given to each neighbor by the smear pass
    pub smear_factor: f32,
    /// Per-channel brightness drop of the decay pass
    pub decay_amount: u8,
    /// Tick interval bounds for the colorful flicker
    pub flicker_interval: FlickerInterval,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            tick_interval: Duration::from_millis(15),
            frame_gap: Duration::from_millis(1),
            bit_delay: Duration::from_micros(0),
            smear_factor: 0.05,
            decay_amount: 1,
            flicker_interval: FlickerInterval::new(5, 15),
        }
    }
}

/// Construction-time validation failures.
///
/// Everything past construction is infallible; a configuration the
/// per-tick path could not honor is rejected before the first tick
/// instead of corrupting the frame math silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured strip does not fit the frame capacity.
    StripTooLong { led_count: usize, capacity: usize },
    /// Flicker bounds with `max <= min` leave nothing to draw from.
    EmptyFlickerInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StripTooLong {
                led_count,
                capacity,
            } => write!(
                f,
                "strip of {led_count} elements exceeds frame capacity {capacity}"
            ),
            Self::EmptyFlickerInterval => write!(f, "flicker interval is empty"),
        }
    }
}

/// Clamp a duration to the microsecond range the delay provider accepts.
pub(crate) fn duration_micros(duration: Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}
