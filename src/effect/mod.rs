//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait. A [`Pipeline`] holds an
//! ordered list of slots and applies them in sequence once per tick.

mod decay;
mod flicker;
mod smear;
mod white_flicker;

pub use decay::DecayEffect;
pub use flicker::FlickerEffect;
pub use smear::SmearEffect;
pub use white_flicker::{WHITE_FLICKER_INTERVAL, WhiteFlickerEffect};

use heapless::Vec;
use rand_core::RngCore;

use crate::color::Rgb;
use crate::config::StripConfig;

/// Maximum number of effect slots in a pipeline.
pub const MAX_EFFECTS: usize = 8;

/// Ticks between gated passes; smear and decay share this gate.
pub const GATE_PERIOD: u32 = 3;

pub trait Effect {
    /// Mutate the frame for the given tick
    fn apply(&mut self, tick: u32, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug)]
pub enum EffectSlot<R: RngCore, const MAX_LEDS: usize> {
    /// Random single-element color injection
    Flicker(FlickerEffect<R>),
    /// Rare full-white injection away from the strip edges
    WhiteFlicker(WhiteFlickerEffect<R>),
    /// Spatial blur across adjacent elements
    Smear(SmearEffect<MAX_LEDS>),
    /// Uniform saturating darkening
    Decay(DecayEffect),
}

impl<R: RngCore, const MAX_LEDS: usize> EffectSlot<R, MAX_LEDS> {
    /// Apply the effect for this tick
    pub fn apply(&mut self, tick: u32, leds: &mut [Rgb]) {
        match self {
            Self::Flicker(effect) => effect.apply(tick, leds),
            Self::WhiteFlicker(effect) => effect.apply(tick, leds),
            Self::Smear(effect) => effect.apply(tick, leds),
            Self::Decay(effect) => effect.apply(tick, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Flicker(effect) => Effect::reset(effect),
            Self::WhiteFlicker(effect) => Effect::reset(effect),
            Self::Smear(effect) => Effect::reset(effect),
            Self::Decay(effect) => Effect::reset(effect),
        }
    }
}

/// Ordered, stateful composition of effects.
///
/// Order is part of the contract: the ambient chain injects color first,
/// so a fresh flicker stays sharp until the next gated smear pass and
/// only then starts to fade under decay.
#[derive(Debug)]
pub struct Pipeline<R: RngCore, const MAX_LEDS: usize> {
    slots: Vec<EffectSlot<R, MAX_LEDS>, MAX_EFFECTS>,
}

impl<R: RngCore, const MAX_LEDS: usize> Pipeline<R, MAX_LEDS> {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Build the standard ambient chain: flicker, then smear, then decay.
    pub fn ambient(config: &StripConfig, rng: R) -> Self {
        let mut pipeline = Self::new();
        // Three slots always fit in MAX_EFFECTS.
        let _ = pipeline.push(EffectSlot::Flicker(FlickerEffect::new(
            config.flicker_interval,
            rng,
        )));
        let _ = pipeline.push(EffectSlot::Smear(SmearEffect::new(config.smear_factor)));
        let _ = pipeline.push(EffectSlot::Decay(DecayEffect::new(config.decay_amount)));
        pipeline
    }

    /// Append a slot to the chain
    ///
    /// Returns the slot if the pipeline is full
    pub fn push(
        &mut self,
        slot: EffectSlot<R, MAX_LEDS>,
    ) -> Result<(), EffectSlot<R, MAX_LEDS>> {
        self.slots.push(slot)
    }

    /// Apply every effect in order
    pub fn apply(&mut self, tick: u32, leds: &mut [Rgb]) {
        for slot in &mut self.slots {
            slot.apply(tick, leds);
        }
    }

    /// Reset all effect state
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.reset();
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<R: RngCore, const MAX_LEDS: usize> Default for Pipeline<R, MAX_LEDS> {
    fn default() -> Self {
        Self::new()
    }
}
