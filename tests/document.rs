mod tests {
    use std::sync::Arc;

    use led_effect_core::{
        DEFAULT_COLOR, Document, DocumentError, EffectContext, EffectKind, EffectSlot, Rgb,
        color::rgb_to_u32,
        effect::{
            AnimationEffect, BlinkEffect, BreathEffect, ChaseEffect, ConstantEffect, CustomEffect,
            MusicEffect, RainbowEffect, SoundMode, StreamEffect,
        },
    };
    use serde_json::json;

    fn all_effects(ctx: &EffectContext) -> Vec<EffectSlot> {
        vec![
            ConstantEffect::new(Rgb::new(1, 2, 3)).into(),
            BlinkEffect::new(Rgb::new(255, 0, 0), 0.5, 1.5, ctx.fps()).into(),
            BreathEffect::new(Rgb::new(0, 0, 255), 2.0, 0.25, ctx.fps()).into(),
            ChaseEffect::new(Rgb::new(0, 255, 0), 1, 0.125, ctx.fps()).into(),
            RainbowEffect::new(-3).into(),
            StreamEffect::new(1, 7).into(),
            AnimationEffect::open("missing.txt", ctx.animation_dir()).into(),
            MusicEffect::new(SoundMode::Spectrum, Arc::clone(ctx.sound())).into(),
            CustomEffect::new().into(),
        ]
    }

    fn assert_default_constant(slot: &EffectSlot) {
        assert_eq!(slot.kind(), EffectKind::Constant);
        assert_eq!(
            slot.snapshot().get("color"),
            Some(&json!(rgb_to_u32(DEFAULT_COLOR)))
        );
    }

    #[test]
    fn test_round_trip_every_kind() {
        let ctx = EffectContext::default();
        let effects = all_effects(&ctx);
        let kinds: Vec<EffectKind> = effects.iter().map(EffectSlot::kind).collect();
        assert_eq!(kinds, EffectKind::ALL);

        for effect in effects {
            let doc = effect.snapshot();
            let restored = EffectSlot::from_document(&doc, &ctx).unwrap();
            assert_eq!(restored.kind(), effect.kind());
            assert_eq!(restored.snapshot(), doc, "{} round trip", effect.kind());
        }
    }

    #[test]
    fn test_persisted_keys() {
        let slot: EffectSlot = BlinkEffect::new(Rgb::new(255, 0, 0), 0.5, 1.5, 60).into();
        let doc = slot.snapshot();

        assert_eq!(doc.get("mode"), Some(&json!(1)));
        assert_eq!(doc.get("color"), Some(&json!(0xFF_00_00)));
        assert_eq!(doc.get("lastTime"), Some(&json!(0.5)));
        assert_eq!(doc.get("interval"), Some(&json!(1.5)));

        let slot: EffectSlot = AnimationEffect::open("fire", "animations".as_ref()).into();
        assert_eq!(slot.snapshot().get("animName"), Some(&json!("fire")));

        let slot: EffectSlot = MusicEffect::new(SoundMode::Spectrum, Arc::default()).into();
        assert_eq!(slot.snapshot().get("soundMode"), Some(&json!(1)));

        let slot: EffectSlot = CustomEffect::new().into();
        assert_eq!(slot.snapshot().to_json(), r#"{"mode":8}"#);
    }

    #[test]
    fn test_unknown_mode_falls_back() {
        let ctx = EffectContext::default();

        let doc = Document::from_json(r#"{"mode":99,"color":255}"#).unwrap();
        assert_default_constant(&EffectSlot::from_document(&doc, &ctx).unwrap());

        let doc = Document::from_json(r#"{"color":255}"#).unwrap();
        assert_default_constant(&EffectSlot::from_document(&doc, &ctx).unwrap());

        let doc = Document::from_json(r#"{"mode":"rainbow","delta":1}"#).unwrap();
        assert_default_constant(&EffectSlot::from_document(&doc, &ctx).unwrap());

        assert_default_constant(&EffectSlot::default());
    }

    #[test]
    fn test_missing_fields() {
        let ctx = EffectContext::default();
        let doc = Document::from_json(r#"{"mode":1,"color":255}"#).unwrap();

        let err = EffectSlot::from_document(&doc, &ctx).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Fields {
                kind: EffectKind::Blink,
                ..
            }
        ));
        assert_default_constant(&EffectSlot::from_document_or_default(&doc, &ctx));

        let doc = Document::from_json(r#"{"mode":4,"delta":"fast"}"#).unwrap();
        assert!(EffectSlot::from_document(&doc, &ctx).is_err());
    }

    #[test]
    fn test_sibling_keys_preserved() {
        let mut doc = Document::from_json(r#"{"brightness":128,"mode":0,"color":1}"#).unwrap();
        let slot: EffectSlot = RainbowEffect::new(2).into();
        slot.write_document(&mut doc);

        assert_eq!(doc.get("brightness"), Some(&json!(128)));
        assert_eq!(doc.get("mode"), Some(&json!(4)));
        assert_eq!(doc.get("delta"), Some(&json!(2)));

        let restored = EffectSlot::from_document(&doc, &EffectContext::default()).unwrap();
        assert_eq!(restored.kind(), EffectKind::Rainbow);
    }

    #[test]
    fn test_restore_from_persisted_json() {
        let doc = Document::from_json(
            r#"{"mode":3,"color":255,"direction":1,"lastTime":0.25,"brightness":10}"#,
        )
        .unwrap();
        let slot = EffectSlot::from_document(&doc, &EffectContext::default()).unwrap();

        let EffectSlot::Chase(chase) = &slot else {
            panic!("expected chase, got {:?}", slot.kind());
        };
        assert_eq!(chase.params().color, Rgb::new(0, 0, 255));
        assert_eq!(chase.params().direction, 1);
        assert!((chase.params().last_time - 0.25).abs() < f32::EPSILON);

        let text = doc.to_json();
        assert_eq!(Document::from_json(&text).unwrap(), doc);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Document::from_json("[1, 2]"),
            Err(DocumentError::Json(_))
        ));
        assert!(Document::from_json("{").is_err());
    }

    #[test]
    fn test_music_shares_context_sound() {
        let ctx = EffectContext::default();
        let doc = Document::from_json(r#"{"mode":7,"soundMode":0}"#).unwrap();
        let slot = EffectSlot::from_document(&doc, &ctx).unwrap();

        let music = slot.as_music().unwrap();
        assert_eq!(music.params().sound_mode, SoundMode::Level);
        assert!(Arc::ptr_eq(music.sound(), ctx.sound()));

        ctx.sound().set(0.75);
        assert!((music.sound().get() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn test_custom_cursor_access() {
        let mut slot: EffectSlot = CustomEffect::new().into();
        *slot.custom_cursor_mut().unwrap() = 3;
        assert_eq!(slot.as_custom_mut().unwrap().cursor(), 3);

        let mut slot = EffectSlot::default();
        assert!(slot.custom_cursor_mut().is_none());
        assert!(slot.as_music().is_none());
    }
}
