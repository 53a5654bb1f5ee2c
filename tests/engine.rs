mod tests {
    use core::cell::Cell;

    use myrtio_light_patterns::color::{dim, wheel};
    use myrtio_light_patterns::pattern::RainbowCycle;
    use myrtio_light_patterns::{
        ConfigError, Direction, Duration, FrameBuffer, FrameResult, Instant, OutputDriver,
        PatternConfig, PatternEngine, PatternKind, PixelStrip, Rgb,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[derive(Default)]
    struct CountingDriver {
        frames: usize,
    }

    impl OutputDriver for CountingDriver {
        fn write(&mut self, _colors: &[Rgb]) {
            self.frames += 1;
        }
    }

    type Strip = FrameBuffer<CountingDriver, 32>;

    fn strip(pixels: usize) -> Strip {
        FrameBuffer::new(CountingDriver::default(), pixels).unwrap()
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_color_wipe_fills_strip() {
        let completed = Cell::new(0);
        let mut engine =
            PatternEngine::with_on_complete(strip(10), || completed.set(completed.get() + 1));
        engine
            .configure_color_wipe(RED, Duration::from_millis(0), Direction::Forward)
            .unwrap();
        assert_eq!(engine.total_steps(), Some(10));

        for ms in 1..=10 {
            assert!(engine.tick(at(ms)).rendered);
        }

        assert_eq!(engine.strip().pixels(), &[RED; 10]);
        assert_eq!(engine.strip().driver().frames, 10);
        assert_eq!(engine.index(), Some(0));
        assert_eq!(completed.get(), 1);
    }

    #[test]
    fn test_color_wipe_paints_progressively() {
        let mut engine = PatternEngine::new(strip(4));
        engine.fill(BLUE);
        engine
            .configure_color_wipe(RED, Duration::from_millis(0), Direction::Forward)
            .unwrap();

        engine.tick(at(1));
        engine.tick(at(2));
        assert_eq!(engine.strip().pixels(), &[RED, RED, BLUE, BLUE]);
    }

    #[test]
    fn test_color_wipe_reverse_completes_once() {
        let completed = Cell::new(0);
        let mut engine =
            PatternEngine::with_on_complete(strip(4), || completed.set(completed.get() + 1));
        engine
            .configure_color_wipe(RED, Duration::from_millis(0), Direction::Reverse)
            .unwrap();
        assert_eq!(engine.index(), Some(3));

        engine.tick(at(1));
        assert_eq!(engine.strip().pixels(), &[BLACK, BLACK, BLACK, RED]);

        for ms in 2..=4 {
            engine.tick(at(ms));
        }
        assert_eq!(engine.strip().pixels(), &[RED; 4]);
        assert_eq!(engine.index(), Some(3));
        assert_eq!(completed.get(), 1);
    }

    #[test]
    fn test_scanner_cycle() {
        let completed = Cell::new(0);
        let mut engine =
            PatternEngine::with_on_complete(strip(5), || completed.set(completed.get() + 1));
        engine.configure_scanner(RED, Duration::from_millis(0)).unwrap();
        assert_eq!(engine.total_steps(), Some(8));
        assert_eq!(engine.direction(), Some(Direction::Forward));

        for ms in 1..=8 {
            engine.tick(at(ms));
            if ms < 8 {
                assert_eq!(completed.get(), 0);
            }
        }

        assert_eq!(engine.index(), Some(0));
        assert_eq!(completed.get(), 1);
    }

    #[test]
    fn test_scanner_leaves_fading_trail() {
        let mut engine = PatternEngine::new(strip(5));
        engine.configure_scanner(RED, Duration::from_millis(0)).unwrap();

        engine.tick(at(1));
        assert_eq!(engine.strip().pixels(), &[RED, BLACK, BLACK, BLACK, BLACK]);

        engine.tick(at(2));
        assert_eq!(
            engine.strip().pixels(),
            &[dim(RED), RED, BLACK, BLACK, BLACK]
        );

        engine.tick(at(3));
        assert_eq!(
            engine.strip().pixels(),
            &[dim(dim(RED)), dim(RED), RED, BLACK, BLACK]
        );
    }

    #[test]
    fn test_scanner_bounces_back() {
        let mut engine = PatternEngine::new(strip(3));
        engine.configure_scanner(RED, Duration::from_millis(0)).unwrap();

        // Indices 0, 1, 2 travel out, index 3 mirrors back onto pixel 1
        for ms in 1..=4 {
            engine.tick(at(ms));
        }
        assert_eq!(engine.strip().pixel(1), RED);
        assert_eq!(engine.strip().pixel(2), dim(RED));
    }

    #[test]
    fn test_scanner_needs_two_pixels() {
        let mut engine = PatternEngine::new(strip(1));
        assert_eq!(
            engine.configure_scanner(RED, Duration::from_millis(0)),
            Err(ConfigError::TooFewPixels {
                required: 2,
                actual: 1,
            })
        );
        assert_eq!(engine.active_pattern(), PatternKind::None);
    }

    #[test]
    fn test_fade_rejects_zero_steps() {
        let mut engine = PatternEngine::new(strip(3));
        engine
            .configure_rainbow_cycle(Duration::from_millis(10), Direction::Forward)
            .unwrap();
        assert_eq!(
            engine.configure_fade(RED, BLUE, 0, Duration::from_millis(10), Direction::Forward),
            Err(ConfigError::ZeroSteps)
        );
        assert_eq!(engine.active_pattern(), PatternKind::RainbowCycle);
    }

    #[test]
    fn test_empty_strip_rejected() {
        let mut engine = PatternEngine::new(strip(0));
        assert_eq!(
            engine.configure_theater_chase(RED, BLUE, Duration::from_millis(0), Direction::Forward),
            Err(ConfigError::ZeroSteps)
        );
        assert_eq!(
            engine.configure_color_wipe(RED, Duration::from_millis(0), Direction::Forward),
            Err(ConfigError::ZeroSteps)
        );
    }

    #[test]
    fn test_fade_interpolates() {
        let mut engine = PatternEngine::new(strip(3));
        engine
            .configure_fade(
                BLACK,
                Rgb::new(200, 100, 50),
                4,
                Duration::from_millis(0),
                Direction::Forward,
            )
            .unwrap();

        engine.tick(at(1));
        assert_eq!(engine.strip().pixels(), &[BLACK; 3]);

        engine.tick(at(2));
        assert_eq!(engine.strip().pixels(), &[Rgb::new(50, 25, 12); 3]);

        engine.tick(at(3));
        engine.tick(at(4));
        assert_eq!(engine.strip().pixels(), &[Rgb::new(150, 75, 37); 3]);
        assert_eq!(engine.index(), Some(0));
    }

    #[test]
    fn test_theater_chase() {
        let mut engine = PatternEngine::new(strip(6));
        engine
            .configure_theater_chase(RED, BLUE, Duration::from_millis(0), Direction::Forward)
            .unwrap();

        engine.tick(at(1));
        assert_eq!(
            engine.strip().pixels(),
            &[RED, BLUE, BLUE, RED, BLUE, BLUE]
        );

        engine.tick(at(2));
        assert_eq!(
            engine.strip().pixels(),
            &[BLUE, BLUE, RED, BLUE, BLUE, RED]
        );
    }

    #[test]
    fn test_rainbow_cycle_frame() {
        let mut engine = PatternEngine::new(strip(10));
        engine
            .configure_rainbow_cycle(Duration::from_millis(0), Direction::Forward)
            .unwrap();
        assert_eq!(engine.total_steps(), Some(255));

        engine.tick(at(1));
        engine.tick(at(2));
        for (i, pixel) in engine.strip().pixels().iter().enumerate() {
            assert_eq!(*pixel, wheel(RainbowCycle::hue(i, 10, 1)));
        }
    }

    #[test]
    fn test_rainbow_hue_spacing() {
        assert_eq!(RainbowCycle::hue(0, 10, 0), 0);
        assert_eq!(RainbowCycle::hue(5, 10, 200), 72);

        for count in 2..=64usize {
            let step = 256 / count;
            for index in [0, 17, 254] {
                for i in 0..count - 1 {
                    let a = RainbowCycle::hue(i, count, index);
                    let b = RainbowCycle::hue(i + 1, count, index);
                    let diff = usize::from(b.wrapping_sub(a));
                    assert!(diff == step || diff == step + 1, "count {count} pixel {i}");
                }
            }
        }
    }

    #[test]
    fn test_interval_gates_rendering() {
        let mut engine = PatternEngine::new(strip(3));
        assert_eq!(engine.next_update(), None);
        engine
            .configure_rainbow_cycle(Duration::from_millis(50), Direction::Forward)
            .unwrap();

        assert!(!engine.tick(at(10)).rendered);
        assert!(engine.tick(at(50)).rendered);
        assert_eq!(engine.next_update(), Some(at(100)));
        assert!(!engine.tick(at(99)).rendered);
        assert!(engine.tick(at(100)).rendered);
        assert_eq!(engine.strip().driver().frames, 2);
        assert_eq!(engine.index(), Some(2));
    }

    #[test]
    fn test_tick_without_pattern() {
        let mut engine = PatternEngine::new(strip(3));
        assert_eq!(engine.active_pattern(), PatternKind::None);
        assert!(!engine.tick(at(1000)).rendered);
        assert_eq!(engine.strip().driver().frames, 0);
    }

    #[test]
    fn test_stop() {
        let mut engine = PatternEngine::new(strip(3));
        engine
            .configure_color_wipe(RED, Duration::from_millis(0), Direction::Forward)
            .unwrap();
        engine.tick(at(1));
        engine.stop();

        assert_eq!(engine.active_pattern(), PatternKind::None);
        assert_eq!(engine.index(), None);
        assert!(!engine.tick(at(2)).rendered);
        assert_eq!(engine.strip().pixels(), &[RED, BLACK, BLACK]);
    }

    #[test]
    fn test_reverse_direction() {
        let mut engine = PatternEngine::new(strip(6));
        engine
            .configure_theater_chase(RED, BLUE, Duration::from_millis(0), Direction::Forward)
            .unwrap();
        engine.tick(at(1));
        engine.tick(at(2));
        assert_eq!(engine.index(), Some(2));

        engine.reverse_direction();
        assert_eq!(engine.direction(), Some(Direction::Reverse));
        assert_eq!(engine.index(), Some(5));

        engine.reverse_direction();
        assert_eq!(engine.direction(), Some(Direction::Forward));
        assert_eq!(engine.index(), Some(0));
        assert_eq!(engine.active_pattern(), PatternKind::TheaterChase);
    }

    #[test]
    fn test_configure_resets_progress() {
        let mut engine = PatternEngine::new(strip(4));
        engine
            .configure_color_wipe(RED, Duration::from_millis(0), Direction::Forward)
            .unwrap();
        engine.tick(at(1));
        assert_eq!(engine.index(), Some(1));

        engine
            .configure(PatternConfig::Fade {
                color1: RED,
                color2: BLUE,
                steps: 16,
                interval: Duration::from_millis(25),
                direction: Direction::Reverse,
            })
            .unwrap();
        assert_eq!(engine.active_pattern(), PatternKind::Fade);
        assert_eq!(engine.total_steps(), Some(16));
        assert_eq!(engine.index(), Some(15));
        assert_eq!(engine.interval(), Some(Duration::from_millis(25)));
        // Configuring never renders
        assert_eq!(engine.strip().driver().frames, 1);
    }

    #[test]
    fn test_fill() {
        let mut engine = PatternEngine::new(strip(4));
        engine.fill(BLUE);
        assert_eq!(engine.strip().pixels(), &[BLUE; 4]);
        assert_eq!(engine.strip().driver().frames, 1);

        let strip = engine.into_strip();
        assert_eq!(strip.pixel_count(), 4);
    }

    #[test]
    fn test_next_update_saturates() {
        let mut engine = PatternEngine::new(strip(3));
        engine
            .configure_rainbow_cycle(Duration::from_millis(0), Direction::Forward)
            .unwrap();
        assert!(engine.tick(at(1000)).rendered);

        engine
            .configure_rainbow_cycle(Duration::MAX, Direction::Forward)
            .unwrap();
        assert!(!engine.tick(at(2000)).rendered);
        assert_eq!(engine.next_update(), Some(Instant::MAX));
    }

    #[test]
    fn test_clock_going_backwards_with_zero_interval() {
        let mut engine = PatternEngine::new(strip(3));
        engine
            .configure_color_wipe(RED, Duration::from_millis(0), Direction::Forward)
            .unwrap();

        assert!(engine.tick(at(100)).rendered);
        assert!(engine.tick(at(50)).rendered);
        assert_eq!(engine.next_update(), Some(at(50)));
        assert_eq!(engine.index(), Some(2));
    }

    #[test]
    fn test_clock_going_backwards_stalls() {
        let mut engine = PatternEngine::new(strip(3));
        engine
            .configure_color_wipe(RED, Duration::from_millis(10), Direction::Forward)
            .unwrap();

        assert!(engine.tick(at(100)).rendered);
        assert!(!engine.tick(at(50)).rendered);
        assert!(!engine.tick(at(105)).rendered);
        assert!(engine.tick(at(110)).rendered);
        assert_eq!(engine.strip().driver().frames, 2);
    }

    #[test]
    fn test_fade_reverse() {
        let completed = Cell::new(0);
        let mut engine =
            PatternEngine::with_on_complete(strip(2), || completed.set(completed.get() + 1));
        engine
            .configure_fade(
                BLACK,
                Rgb::new(200, 0, 0),
                4,
                Duration::from_millis(0),
                Direction::Reverse,
            )
            .unwrap();
        assert_eq!(engine.index(), Some(3));

        engine.tick(at(1));
        assert_eq!(engine.strip().pixels(), &[Rgb::new(150, 0, 0); 2]);

        for ms in 2..=4 {
            engine.tick(at(ms));
        }
        assert_eq!(engine.strip().pixels(), &[BLACK; 2]);
        assert_eq!(engine.index(), Some(3));
        assert_eq!(completed.get(), 1);
    }

    #[test]
    fn test_rainbow_cycle_reverse() {
        let mut engine = PatternEngine::new(strip(8));
        engine
            .configure_rainbow_cycle(Duration::from_millis(0), Direction::Reverse)
            .unwrap();
        assert_eq!(engine.index(), Some(254));

        engine.tick(at(1));
        engine.tick(at(2));
        for (i, pixel) in engine.strip().pixels().iter().enumerate() {
            assert_eq!(*pixel, wheel(RainbowCycle::hue(i, 8, 253)));
        }
        assert_eq!(engine.index(), Some(252));
    }

    #[test]
    fn test_tick_reports_cycle_completion() {
        let mut engine = PatternEngine::new(strip(3));
        engine
            .configure_color_wipe(RED, Duration::from_millis(0), Direction::Forward)
            .unwrap();

        assert_eq!(
            engine.tick(at(1)),
            FrameResult {
                rendered: true,
                cycle_complete: false,
            }
        );
        engine.tick(at(2));
        let result = engine.tick(at(3));
        assert!(result.cycle_complete);

        // The engine is free again, so the caller can reverse it right away
        engine.reverse_direction();
        assert_eq!(engine.direction(), Some(Direction::Reverse));
        assert_eq!(engine.index(), Some(2));
        assert_eq!(
            engine.tick(at(3)),
            FrameResult {
                rendered: true,
                cycle_complete: false,
            }
        );
    }

    #[test]
    fn test_tick_without_pattern_reports_nothing() {
        let mut engine = PatternEngine::new(strip(3));
        assert_eq!(engine.tick(at(5)), FrameResult::default());
    }
}
