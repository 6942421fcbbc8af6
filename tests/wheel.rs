mod tests {
    use belt_light_engine::{ColorDepth, Rgb, wheel};

    #[test]
    fn test_wheel_cyclic_closure() {
        for depth in [ColorDepth::SevenBit, ColorDepth::EightBit] {
            assert_eq!(wheel(depth, 0), wheel(depth, depth.wheel_range()));
        }
    }

    #[test]
    fn test_wheel_continuity_seven_bit() {
        let depth = ColorDepth::SevenBit;
        // Adjacent positions never move a channel by more than the band
        // slope, including across the wrap.
        for pos in 0..depth.wheel_range() {
            let a = wheel(depth, pos);
            let b = wheel(depth, pos + 1);
            for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
                assert!(x.abs_diff(y) <= 1, "channel jump at position {pos}");
            }
        }
    }

    #[test]
    fn test_wheel_continuity_eight_bit() {
        let depth = ColorDepth::EightBit;
        for pos in 0..depth.wheel_range() {
            let a = wheel(depth, pos);
            let b = wheel(depth, pos + 1);
            for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
                assert!(x.abs_diff(y) <= 3, "channel jump at position {pos}");
            }
        }
    }

    #[test]
    fn test_wheel_band_endpoints_seven_bit() {
        let depth = ColorDepth::SevenBit;
        assert_eq!(wheel(depth, 0), Rgb { r: 127, g: 0, b: 0 });
        assert_eq!(wheel(depth, 128), Rgb { r: 0, g: 127, b: 0 });
        assert_eq!(wheel(depth, 256), Rgb { r: 0, g: 0, b: 127 });
    }

    #[test]
    fn test_wheel_band_endpoints_eight_bit() {
        let depth = ColorDepth::EightBit;
        assert_eq!(wheel(depth, 0), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(depth, 85), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(depth, 170), Rgb { r: 0, g: 0, b: 255 });
    }
}
