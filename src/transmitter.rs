//! Bit-banged clocked serial output.
//!
//! Pushes the frame to the strip over two logical lines, one byte per
//! channel in R, G, B order, most significant bit first. The link is
//! fire and forget: no acknowledgement, no error detection, no retry.

use core::convert::Infallible;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::OutputDriver;
use crate::color::Rgb;
use crate::config::{StripConfig, duration_micros};

/// Minimal two-signal sink for the clocked serial protocol.
///
/// Implementations translate logic levels into physical line states. A
/// recording implementation makes the framing testable without hardware.
pub trait SerialSink {
    /// Drive the clock line
    fn set_clock(&mut self, state: PinState);

    /// Drive the data line
    fn set_data(&mut self, state: PinState);
}

/// [`SerialSink`] over two push-pull GPIO outputs.
pub struct PinSink<CLK, DATA> {
    clock: CLK,
    data: DATA,
}

impl<CLK, DATA> PinSink<CLK, DATA>
where
    CLK: OutputPin<Error = Infallible>,
    DATA: OutputPin<Error = Infallible>,
{
    /// Both pins must already be configured as outputs.
    pub fn new(clock: CLK, data: DATA) -> Self {
        Self { clock, data }
    }
}

impl<CLK, DATA> SerialSink for PinSink<CLK, DATA>
where
    CLK: OutputPin<Error = Infallible>,
    DATA: OutputPin<Error = Infallible>,
{
    fn set_clock(&mut self, state: PinState) {
        match self.clock.set_state(state) {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }

    fn set_data(&mut self, state: PinState) {
        match self.data.set_state(state) {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }
}

/// Synchronous, blocking transmitter for the clocked serial link.
pub struct Transmitter<S: SerialSink, D: DelayNs> {
    sink: S,
    delay: D,
    frame_gap: Duration,
    bit_delay: Duration,
}

impl<S: SerialSink, D: DelayNs> Transmitter<S, D> {
    pub fn new(sink: S, delay: D, config: &StripConfig) -> Self {
        Self {
            sink,
            delay,
            frame_gap: config.frame_gap,
            bit_delay: config.bit_delay,
        }
    }

    /// Clock one frame out, then latch it.
    ///
    /// Blocks until every bit has been shifted and the inter-frame gap
    /// has elapsed with the clock held low, so the receiving hardware
    /// can latch the frame.
    pub fn write_frame(&mut self, frame: &[Rgb]) {
        for color in frame {
            self.write_byte(color.r);
            self.write_byte(color.g);
            self.write_byte(color.b);
        }
        self.sink.set_clock(PinState::Low);
        self.delay.delay_us(duration_micros(self.frame_gap));
    }

    /// Force the clock line to its idle (low) state.
    pub fn idle(&mut self) {
        self.sink.set_clock(PinState::Low);
    }

    fn write_byte(&mut self, byte: u8) {
        let mut mask = 0x80u8;
        while mask != 0 {
            self.sink.set_clock(PinState::Low);
            self.pace();
            self.sink.set_data(if byte & mask != 0 {
                PinState::High
            } else {
                PinState::Low
            });
            self.sink.set_clock(PinState::High);
            self.pace();
            mask >>= 1;
        }
    }

    /// Settle time after each clock edge; disabled when configured to zero.
    fn pace(&mut self) {
        let micros = duration_micros(self.bit_delay);
        if micros > 0 {
            self.delay.delay_us(micros);
        }
    }
}

impl<S: SerialSink, D: DelayNs> OutputDriver for Transmitter<S, D> {
    fn write(&mut self, colors: &[Rgb]) {
        self.write_frame(colors);
    }
}
