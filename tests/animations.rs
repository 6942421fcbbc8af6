mod tests {
    use belt_light_engine::{
        ColorDepth, Rgb, StripDriver,
        animation::{
            Animation, ChaseAnimation, DitherAnimation, FadeAnimation, FrameContext,
            RainbowAnimation, ScannerAnimation, SparklerAnimation, WipeAnimation,
            scan_position,
        },
        gamma,
        rng::Rng,
        wheel,
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Strip double that snapshots the frame on every `show` and logs every
    /// pixel write.
    struct RecordingStrip {
        pixels: Vec<Rgb>,
        frames: Vec<Vec<Rgb>>,
        writes: Vec<usize>,
        brightness: u8,
        enabled: bool,
    }

    impl RecordingStrip {
        fn new(count: usize) -> Self {
            Self {
                pixels: vec![BLACK; count],
                frames: Vec::new(),
                writes: Vec::new(),
                brightness: 255,
                enabled: true,
            }
        }
    }

    impl StripDriver for RecordingStrip {
        fn num_pixels(&self) -> usize {
            self.pixels.len()
        }

        fn set_pixel(&mut self, index: usize, color: Rgb) {
            if index < self.pixels.len() {
                self.pixels[index] = color;
                self.writes.push(index);
            }
        }

        fn set_brightness(&mut self, level: u8) {
            self.brightness = level;
        }

        fn show(&mut self) {
            self.frames.push(self.pixels.clone());
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    fn context<'a>(
        rng: &'a mut Rng,
        animation_step: u16,
        frame_step: u16,
        color: Rgb,
    ) -> FrameContext<'a> {
        FrameContext {
            animation_step,
            frame_step,
            color,
            depth: ColorDepth::SevenBit,
            ceiling: 255,
            rng,
        }
    }

    #[test]
    fn test_rainbow_spatial_layout() {
        let mut strip = RecordingStrip::new(32);
        let mut rng = Rng::new(7);
        let mut animation = RainbowAnimation::new();
        let depth = ColorDepth::SevenBit;

        let mut ctx = context(&mut rng, 17, 0, BLACK);
        animation.render(&mut ctx, &mut strip);

        for (i, &pixel) in strip.pixels.iter().enumerate() {
            let pos = (i as u32 * 384 / 32 + 17) % 384;
            assert_eq!(pixel, wheel(depth, pos as u16), "pixel {i}");
        }
    }

    #[test]
    fn test_chase_draws_head_and_erases_trail() {
        let mut strip = RecordingStrip::new(32);
        let mut rng = Rng::new(7);
        let mut animation = ChaseAnimation::new();
        let color = wheel(ColorDepth::SevenBit, 42);

        let mut ctx = context(&mut rng, 0, 5, color);
        animation.render(&mut ctx, &mut strip);

        assert_eq!(strip.pixels[5], color);
        assert_eq!(strip.pixels[4], BLACK);
    }

    #[test]
    fn test_wipe_reveals_prefix() {
        let mut strip = RecordingStrip::new(32);
        let mut rng = Rng::new(7);
        let mut animation = WipeAnimation::new();
        let color = wheel(ColorDepth::SevenBit, 200);

        let mut ctx = context(&mut rng, 0, 5, color);
        animation.render(&mut ctx, &mut strip);

        for i in 0..5 {
            assert_eq!(strip.pixels[i], color, "pixel {i} should be revealed");
        }
        for i in 5..32 {
            assert_eq!(strip.pixels[i], BLACK, "pixel {i} should be dark");
        }
    }

    fn assert_dither_covers(count: usize) {
        let mut strip = RecordingStrip::new(count);
        let mut rng = Rng::new(7);
        let mut animation = DitherAnimation::new();
        let color = wheel(ColorDepth::SevenBit, 300);

        let mut visited = Vec::new();
        for tick in 0..count {
            strip.writes.clear();
            let mut ctx = context(&mut rng, 0, tick as u16, color);
            animation.render(&mut ctx, &mut strip);
            assert_eq!(strip.writes.len(), 1, "one pixel per tick");
            visited.push(strip.writes[0]);
        }

        let mut sorted = visited.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), count, "every index visited exactly once");

        // The next pass repeats the same coverage.
        strip.writes.clear();
        let mut ctx = context(&mut rng, 0, 0, color);
        animation.render(&mut ctx, &mut strip);
        assert_eq!(strip.writes[0], visited[0]);
    }

    #[test]
    fn test_dither_covers_power_of_two_strip() {
        assert_dither_covers(16);
    }

    #[test]
    fn test_dither_covers_non_power_of_two_strip() {
        assert_dither_covers(24);
    }

    #[test]
    fn test_scan_position_bounces_within_strip() {
        for count in [16usize, 24, 32] {
            for _cycle in 0..2 {
                let positions: Vec<usize> =
                    (0..=count as u16).map(|step| scan_position(step, count)).collect();

                assert!(positions.iter().all(|&pos| pos < count), "position off strip");

                // Strictly rises to a single peak, then strictly falls.
                let peak = positions
                    .iter()
                    .position(|&pos| pos == *positions.iter().max().unwrap())
                    .unwrap();
                for pair in positions[..=peak].windows(2) {
                    assert!(pair[0] < pair[1], "not rising before peak: {positions:?}");
                }
                for pair in positions[peak..].windows(2) {
                    assert!(pair[0] > pair[1], "not falling after peak: {positions:?}");
                }
            }
        }
    }

    #[test]
    fn test_scanner_head_at_position() {
        let count = 32;
        let mut strip = RecordingStrip::new(count);
        let mut rng = Rng::new(7);
        let mut animation = ScannerAnimation::new();
        let color = wheel(ColorDepth::SevenBit, 64);

        for step in [0u16, 7, 16, 25] {
            strip.frames.clear();
            let mut ctx = context(&mut rng, 0, step, color);
            animation.render(&mut ctx, &mut strip);

            // Two sub-frames per tick; the first is centered on the
            // reported position.
            assert_eq!(strip.frames.len(), 2);
            let pos = scan_position(step, count);
            assert_eq!(strip.frames[0][pos], color, "head missing at step {step}");
        }
    }

    #[test]
    fn test_fade_round_trip() {
        let depth = ColorDepth::SevenBit;
        let color = wheel(depth, 100);
        let expected = Rgb {
            r: gamma::correct(color.r),
            g: gamma::correct(color.g),
            b: gamma::correct(color.b),
        };
        let mut rng = Rng::new(7);
        let mut animation = FadeAnimation::new();

        // Fade-in at the full threshold reproduces the gamma-corrected
        // target.
        let mut strip = RecordingStrip::new(32);
        let mut ctx = context(&mut rng, 191, 1, color);
        animation.render(&mut ctx, &mut strip);
        let fade_in_peak = strip.pixels[0];
        for (got, want) in [
            (fade_in_peak.r, expected.r),
            (fade_in_peak.g, expected.g),
            (fade_in_peak.b, expected.b),
        ] {
            assert!(got.abs_diff(want) <= 4, "fade-in peak off: {got} vs {want}");
        }

        // Fade-out starts from the same frame, within rounding.
        let mut strip = RecordingStrip::new(32);
        let mut ctx = context(&mut rng, 192, 1, color);
        animation.render(&mut ctx, &mut strip);
        let fade_out_start = strip.pixels[0];
        for (a, b) in [
            (fade_in_peak.r, fade_out_start.r),
            (fade_in_peak.g, fade_out_start.g),
            (fade_in_peak.b, fade_out_start.b),
        ] {
            assert!(a.abs_diff(b) <= 4, "round trip drifted: {a} vs {b}");
        }

        // Fade-out at the zero threshold lands on black.
        let mut strip = RecordingStrip::new(32);
        let mut ctx = context(&mut rng, 383, 1, color);
        animation.render(&mut ctx, &mut strip);
        assert_eq!(strip.pixels[0], BLACK);
    }

    #[test]
    fn test_sparkler_lights_and_decays() {
        let mut strip = RecordingStrip::new(32);
        let mut rng = Rng::new(7);
        let mut animation = SparklerAnimation::<32>::new();
        let depth = ColorDepth::SevenBit;

        let mut lit_any = false;
        for tick in 0..50u16 {
            let mut ctx = context(&mut rng, tick, 0, BLACK);
            animation.render(&mut ctx, &mut strip);

            // Every pixel is either off or a wheel color from a lit
            // intensity.
            for &pixel in &strip.pixels {
                if pixel != BLACK {
                    lit_any = true;
                    let max = pixel.r.max(pixel.g).max(pixel.b);
                    assert!(max > 0 && max <= depth.channel_max());
                }
            }
        }
        assert!(lit_any, "no sparkle ever ignited");
    }
}
