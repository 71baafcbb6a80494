mod tests {
    use ember_strip::color::Rgb;
    use ember_strip::config::FlickerInterval;
    use ember_strip::effect::{
        DecayEffect, Effect, FlickerEffect, SmearEffect, WHITE_FLICKER_INTERVAL,
        WhiteFlickerEffect,
    };
    use rand_chacha::ChaCha8Rng;
    use rand_core::{Error, RngCore, SeedableRng};

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const CYAN: Rgb = Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// RNG double replaying a fixed sequence of draws, cycling at the end.
    struct ScriptRng {
        values: &'static [u32],
        position: usize,
    }

    impl ScriptRng {
        fn new(values: &'static [u32]) -> Self {
            Self {
                values,
                position: 0,
            }
        }
    }

    impl RngCore for ScriptRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.position % self.values.len()];
            self.position += 1;
            value
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = self.next_u32() as u8;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_flicker_waits_out_the_drawn_interval() {
        // All-zero draws: wait 5, index 0, hue 0.
        let mut flicker = FlickerEffect::new(FlickerInterval::new(5, 15), ScriptRng::new(&[0]));
        let mut leds = [BLACK; 3];
        for tick in 0..=5 {
            flicker.apply(tick, &mut leds);
            assert_eq!(leds, [BLACK; 3], "no event before the interval elapses");
        }
        flicker.apply(6, &mut leds);
        assert_eq!(leds, [CYAN, BLACK, BLACK]);
    }

    #[test]
    fn test_flicker_touches_exactly_one_element() {
        // Six idle interval draws, then wait 5, index 2, hue 0.
        let script: &[u32] = &[0, 0, 0, 0, 0, 0, 0, 2, 0];
        let mut flicker = FlickerEffect::new(FlickerInterval::new(5, 15), ScriptRng::new(script));
        let mut leds = [BLACK; 5];
        for tick in 0..=6 {
            flicker.apply(tick, &mut leds);
        }
        assert_eq!(leds, [BLACK, BLACK, CYAN, BLACK, BLACK]);
    }

    #[test]
    fn test_flicker_rearms_after_an_event() {
        let mut flicker = FlickerEffect::new(FlickerInterval::new(5, 15), ScriptRng::new(&[0]));
        let mut leds = [BLACK; 3];
        for tick in 0..=6 {
            flicker.apply(tick, &mut leds);
        }
        assert_eq!(leds[0], CYAN, "first event fires at tick 6");

        leds = [BLACK; 3];
        for tick in 7..=11 {
            flicker.apply(tick, &mut leds);
            assert_eq!(leds, [BLACK; 3], "elapsed ticks not yet above the wait");
        }
        flicker.apply(12, &mut leds);
        assert_eq!(leds[0], CYAN);
    }

    #[test]
    fn test_flicker_reset_clears_the_event_clock() {
        let mut flicker = FlickerEffect::new(FlickerInterval::new(5, 15), ScriptRng::new(&[0]));
        let mut leds = [BLACK; 3];
        for tick in 0..=6 {
            flicker.apply(tick, &mut leds);
        }
        flicker.reset();
        leds = [BLACK; 3];
        // Ticks now count from zero again, so tick 7 is already past the wait.
        flicker.apply(7, &mut leds);
        assert_eq!(leds[0], CYAN);
    }

    #[test]
    fn test_flicker_is_deterministic_for_a_fixed_seed() {
        let interval = FlickerInterval::new(5, 15);
        let mut first = FlickerEffect::new(interval, ChaCha8Rng::seed_from_u64(7));
        let mut second = FlickerEffect::new(interval, ChaCha8Rng::seed_from_u64(7));
        let mut leds_first = [BLACK; 50];
        let mut leds_second = [BLACK; 50];
        for tick in 0..200 {
            first.apply(tick, &mut leds_first);
            second.apply(tick, &mut leds_second);
        }
        assert_eq!(leds_first, leds_second);
        assert_ne!(
            leds_first, [BLACK; 50],
            "200 ticks with waits below 15 must produce an event"
        );
    }

    #[test]
    fn test_white_flicker_stays_off_the_edges() {
        let mut effect = WhiteFlickerEffect::new(WHITE_FLICKER_INTERVAL, ScriptRng::new(&[0]));
        let mut leds = [BLACK; 5];
        effect.apply(1200, &mut leds);
        assert_eq!(leds, [BLACK; 5], "wait of 1200 ticks not yet exceeded");
        effect.apply(1201, &mut leds);
        assert_eq!(leds, [BLACK, WHITE, BLACK, BLACK, BLACK]);
    }

    #[test]
    fn test_smear_leaves_uniform_frames_unchanged() {
        let mut smear: SmearEffect<5> = SmearEffect::new(0.05);
        for value in 0..=255u8 {
            let uniform = Rgb {
                r: value,
                g: value,
                b: value,
            };
            let mut leds = [uniform; 5];
            smear.apply(0, &mut leds);
            assert_eq!(leds, [uniform; 5], "uniform value {value}");
        }
    }

    #[test]
    fn test_smear_runs_only_on_gated_ticks() {
        let mut smear: SmearEffect<4> = SmearEffect::new(0.05);
        let start = [Rgb { r: 200, g: 0, b: 0 }, BLACK, BLACK, BLACK];
        let mut leds = start;
        smear.apply(1, &mut leds);
        assert_eq!(leds, start);
        smear.apply(2, &mut leds);
        assert_eq!(leds, start);
        smear.apply(3, &mut leds);
        assert_ne!(leds, start);
    }

    #[test]
    fn test_smear_blends_toward_neighbors() {
        let mut smear: SmearEffect<4> = SmearEffect::new(0.05);
        let mut leds = [
            Rgb {
                r: 10,
                g: 200,
                b: 30,
            },
            BLACK,
            WHITE,
            Rgb { r: 7, g: 8, b: 9 },
        ];
        smear.apply(0, &mut leds);
        assert_eq!(
            leds,
            [
                Rgb {
                    r: 9,
                    g: 190,
                    b: 28
                },
                Rgb {
                    r: 13,
                    g: 22,
                    b: 14
                },
                Rgb {
                    r: 229,
                    g: 229,
                    b: 229
                },
                Rgb {
                    r: 19,
                    g: 20,
                    b: 21
                },
            ]
        );
    }

    #[test]
    fn test_smear_reads_the_pre_pass_snapshot() {
        let mut smear: SmearEffect<3> = SmearEffect::new(0.05);
        let mut leds = [
            Rgb {
                r: 200,
                g: 200,
                b: 200,
            },
            BLACK,
            BLACK,
        ];
        smear.apply(0, &mut leds);
        // The last element's sole neighbor was black before the pass; the
        // brightness bleeding into the middle must not leak further within
        // the same pass.
        assert_eq!(leds[2], BLACK);
        assert_ne!(leds[1], BLACK);
    }

    #[test]
    fn test_decay_is_saturating_subtraction() {
        let mut decay = DecayEffect::new(1);
        let mut leds = [
            BLACK,
            Rgb {
                r: 1,
                g: 2,
                b: 255,
            },
        ];
        decay.apply(0, &mut leds);
        assert_eq!(
            leds,
            [
                BLACK,
                Rgb {
                    r: 0,
                    g: 1,
                    b: 254
                }
            ]
        );
    }

    #[test]
    fn test_decay_of_a_zero_frame_is_a_no_op() {
        let mut decay = DecayEffect::new(5);
        let mut leds = [BLACK; 10];
        decay.apply(0, &mut leds);
        assert_eq!(leds, [BLACK; 10]);
    }

    #[test]
    fn test_decay_below_the_amount_clamps_to_zero() {
        let mut decay = DecayEffect::new(5);
        let mut leds = [Rgb { r: 3, g: 5, b: 6 }];
        decay.apply(3, &mut leds);
        assert_eq!(leds, [Rgb { r: 0, g: 0, b: 1 }]);
    }

    #[test]
    fn test_decay_runs_only_on_gated_ticks() {
        let mut decay = DecayEffect::new(1);
        let mut leds = [Rgb {
            r: 10,
            g: 10,
            b: 10,
        }];
        decay.apply(1, &mut leds);
        decay.apply(2, &mut leds);
        assert_eq!(
            leds,
            [Rgb {
                r: 10,
                g: 10,
                b: 10
            }]
        );
        decay.apply(3, &mut leds);
        assert_eq!(leds, [Rgb { r: 9, g: 9, b: 9 }]);
    }
}
