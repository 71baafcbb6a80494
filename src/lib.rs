#![no_std]

pub mod color;
pub mod config;
pub mod effect;
pub mod renderer;
pub mod scheduler;
pub mod transmitter;

pub use color::{Rgb, hue_to_rgb};
pub use config::{ConfigError, FlickerInterval, StripConfig};
pub use effect::{
    DecayEffect, Effect, EffectSlot, FlickerEffect, Pipeline, SmearEffect, WhiteFlickerEffect,
};
pub use renderer::Renderer;
pub use scheduler::Scheduler;
pub use transmitter::{PinSink, SerialSink, Transmitter};

pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
