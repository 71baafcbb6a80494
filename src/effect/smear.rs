//! Spatial blur ("smear") across adjacent elements.

use super::{Effect, GATE_PERIOD};
use crate::color::Rgb;

/// Neighbor-weighted blur with a persistent scratch buffer.
///
/// Runs only on ticks that are a multiple of [`GATE_PERIOD`], so freshly
/// injected colors stay sharp for up to two ticks before the first pass
/// touches them. Every new value is computed from the pre-pass snapshot,
/// never from a value already updated in the same pass; the scratch copy
/// of the frame keeps that single-source rule cheap.
///
/// Each channel moves toward a neighbor as `own + factor * (neighbor -
/// own)`, which leaves a uniform frame bit-for-bit unchanged. Edge
/// elements blend one-sided with their sole neighbor, interior elements
/// with both.
#[derive(Debug, Clone)]
pub struct SmearEffect<const MAX_LEDS: usize> {
    factor: f32,
    scratch: Option<[Rgb; MAX_LEDS]>,
}

impl<const MAX_LEDS: usize> SmearEffect<MAX_LEDS> {
    pub const fn new(factor: f32) -> Self {
        Self {
            factor,
            scratch: None,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn channel_edge(factor: f32, own: u8, neighbor: u8) -> u8 {
        let own = f32::from(own);
        (own + factor * (f32::from(neighbor) - own)) as u8
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn channel_interior(factor: f32, own: u8, left: u8, right: u8) -> u8 {
        let own = f32::from(own);
        (own + factor * (f32::from(left) - own) + factor * (f32::from(right) - own)) as u8
    }

    fn edge(factor: f32, own: Rgb, neighbor: Rgb) -> Rgb {
        Rgb {
            r: Self::channel_edge(factor, own.r, neighbor.r),
            g: Self::channel_edge(factor, own.g, neighbor.g),
            b: Self::channel_edge(factor, own.b, neighbor.b),
        }
    }

    fn interior(factor: f32, own: Rgb, left: Rgb, right: Rgb) -> Rgb {
        Rgb {
            r: Self::channel_interior(factor, own.r, left.r, right.r),
            g: Self::channel_interior(factor, own.g, left.g, right.g),
            b: Self::channel_interior(factor, own.b, left.b, right.b),
        }
    }
}

impl<const MAX_LEDS: usize> Effect for SmearEffect<MAX_LEDS> {
    fn apply(&mut self, tick: u32, leds: &mut [Rgb]) {
        if !tick.is_multiple_of(GATE_PERIOD) {
            return;
        }
        let count = leds.len();
        if count < 2 {
            return;
        }

        // Materialized once and kept for the life of the effect. The
        // capacity matches the frame capacity, so a frame that fits the
        // renderer always fits here.
        let scratch = self
            .scratch
            .get_or_insert_with(|| [Rgb::default(); MAX_LEDS]);
        let scratch = &mut scratch[..count];
        scratch.copy_from_slice(leds);

        let factor = self.factor;
        scratch[0] = Self::edge(factor, leds[0], leds[1]);
        for i in 1..count - 1 {
            scratch[i] = Self::interior(factor, leds[i], leds[i - 1], leds[i + 1]);
        }
        scratch[count - 1] = Self::edge(factor, leds[count - 1], leds[count - 2]);

        leds.copy_from_slice(scratch);
    }
}
