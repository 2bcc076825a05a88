mod tests {
    use led_effect_core::{
        Rgb,
        math8::{nscale8, scale8, scale8_video},
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_video_keeps_dim_values_lit() {
        assert_eq!(scale8_video(1, 1), 1);
        assert_eq!(scale8_video(0, 200), 0);
        assert_eq!(scale8_video(200, 0), 0);
        assert_eq!(scale8_video(255, 255), 255);
        assert_eq!(scale8_video(240, 240), 226);
    }

    #[test]
    fn test_nscale8() {
        let color = Rgb::new(200, 100, 50);
        assert_eq!(nscale8(color, 0), Rgb::new(0, 0, 0));
        assert_eq!(nscale8(color, 253), Rgb::new(198, 99, 49));
    }
}
