mod tests {
    use led_effect_core::{GeometryError, Geometry, Layout, LightDisc, LightStrip, Rgb};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_strip_addressing() {
        let mut strip = LightStrip::<4>::new();
        assert_eq!(strip.count(), 4);
        let Layout::Strip(mut view) = strip.layout() else {
            panic!("strip must expose a strip layout");
        };
        assert_eq!(view.l(), 4);
        *view.at(1) = RED;
        assert_eq!(strip.as_slice(), &[BLACK, RED, BLACK, BLACK]);
    }

    #[test]
    fn test_reversed_strip_addressing() {
        let mut strip = LightStrip::<4>::new().with_reversed(true);
        let Layout::Strip(mut view) = strip.layout() else {
            panic!("strip must expose a strip layout");
        };
        *view.at(0) = RED;
        assert_eq!(strip.as_slice(), &[BLACK, BLACK, BLACK, RED]);
    }

    #[test]
    fn test_disc_addressing() {
        let mut disc = LightDisc::<13, 3>::new([1, 4, 8]).unwrap();
        assert_eq!(disc.count(), 13);
        let Layout::Disc(mut view) = disc.layout() else {
            panic!("disc must expose a disc layout");
        };
        assert_eq!(view.r(), 3);
        assert_eq!(view.l(2), 8);
        *view.at(1, 2) = RED;
        view.ring(2).fill(RED);
        let leds = disc.as_slice();
        assert_eq!(leds[3], RED);
        assert_eq!(leds[4], BLACK);
        assert!(leds[5..].iter().all(|led| *led == RED));
    }

    #[test]
    fn test_disc_ring_mismatch() {
        assert_eq!(
            LightDisc::<12, 3>::new([1, 4, 8]).unwrap_err(),
            GeometryError::RingMismatch {
                expected: 12,
                actual: 13
            }
        );
    }
}
