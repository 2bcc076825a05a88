mod tests {
    use std::{
        fs,
        io::Cursor,
        path::{Path, PathBuf},
    };

    use led_effect_core::{
        DEFAULT_COLOR, Effect, EffectContext, EffectKind, EffectSlot, Geometry, LightStrip, Rgb,
        effect::AnimationEffect, parse_mode_command,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Fresh animation directory per test
    fn animation_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "led-effect-core-{}-{test}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_animation(dir: &Path, name: &str, text: &str) {
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_plays_and_loops() {
        let dir = animation_dir("loops");
        write_animation(&dir, "blink.txt", "#FF0000,#FF0000\n#00ff00,#00ff00\n");

        let mut strip = LightStrip::<2>::new();
        let mut effect: EffectSlot = AnimationEffect::open("blink.txt", &dir).into();

        for expected in [RED, GREEN, RED, GREEN, RED] {
            assert!(effect.update(&mut strip, 16));
            assert_eq!(strip.as_slice(), &[expected; 2]);
        }
    }

    #[test]
    fn test_frame_counter_resets_on_loop() {
        let dir = animation_dir("counter");
        write_animation(&dir, "two.txt", "#FF0000\n#00FF00\n");

        let mut strip = LightStrip::<1>::new();
        let mut effect = AnimationEffect::open("two.txt", &dir);

        assert_eq!(effect.frame(), Some(0));
        effect.update(&mut strip, 16);
        effect.update(&mut strip, 16);
        assert_eq!(effect.frame(), Some(2));
        effect.update(&mut strip, 16);
        assert_eq!(effect.frame(), Some(1));

        let missing = AnimationEffect::open("absent.txt", &dir);
        assert_eq!(missing.frame(), None);
        assert!(!missing.is_playing());
    }

    #[test]
    fn test_plays_from_in_memory_source() {
        let source = Cursor::new(b"#FF0000\n#00FF00\n".to_vec());
        let mut strip = LightStrip::<1>::new();
        let mut effect = AnimationEffect::from_source("builtin", source);

        assert!(effect.is_playing());
        assert_eq!(effect.params().name, "builtin");
        for expected in [RED, GREEN, RED] {
            assert!(effect.update(&mut strip, 16));
            assert_eq!(strip.as_slice(), &[expected]);
        }

        let mut empty = AnimationEffect::from_source("blank", Cursor::new(Vec::new()));
        assert!(!empty.update(&mut strip, 16));
        assert_eq!(strip.as_slice(), &[RED]);
    }

    #[test]
    fn test_malformed_line_keeps_previous_pixels() {
        let dir = animation_dir("malformed");
        write_animation(&dir, "bad.txt", "#FF0000\n#00FF00\n#GGGGGG\n");

        let mut strip = LightStrip::<1>::new();
        let mut effect: EffectSlot = AnimationEffect::open("bad.txt", &dir).into();

        let mut seen = Vec::new();
        for _ in 0..4 {
            assert!(effect.update(&mut strip, 16));
            seen.push(strip.as_slice()[0]);
        }
        assert_eq!(seen, [RED, GREEN, GREEN, RED]);
    }

    #[test]
    fn test_unopenable_names_are_inert() {
        let dir = animation_dir("inert");
        fs::create_dir_all(dir.join("nested")).unwrap();
        write_animation(&dir.join("nested"), "inner.txt", "#FF0000\n");
        write_animation(&dir, "empty.txt", "");

        let mut strip = LightStrip::<1>::new();
        for name in ["missing.txt", "", "../inert", "nested", "nested/inner.txt", "empty.txt"] {
            let mut effect: EffectSlot = AnimationEffect::open(name, &dir).into();
            for _ in 0..3 {
                assert!(!effect.update(&mut strip, 16), "{name:?} should stay dark");
            }
            assert_eq!(strip.as_slice(), &[BLACK]);
        }
    }

    #[test]
    fn test_replacing_effect_closes_file() {
        let dir = animation_dir("replace");
        write_animation(&dir, "one.txt", "#FF0000\n");

        let ctx = EffectContext::new(60, &dir);
        let mut slot = parse_mode_command("mode,animation,one.txt", &ctx).unwrap();
        let EffectSlot::Animation(effect) = &slot else {
            panic!("expected animation");
        };
        assert!(effect.is_playing());

        slot = EffectSlot::default();
        assert_eq!(slot.kind(), EffectKind::Constant);
        fs::remove_file(dir.join("one.txt")).unwrap();
        let mut strip = LightStrip::<1>::new();
        assert!(slot.update(&mut strip, 16));
        assert_eq!(strip.data()[0], DEFAULT_COLOR);
    }
}
